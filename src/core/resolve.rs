use tracing::debug;
use uuid::Uuid;

use crate::core::client::{BuildApi, DefinitionQuery, GitApi};
use crate::error::{Result, TeamBuildError};

/// Whether a token is a service-native identifier rather than a human name.
pub fn is_uuid(value: &str) -> bool {
    Uuid::parse_str(value).is_ok()
}

/// Resolve a definition name to its ID.
///
/// Exactly one match resolves; zero matches is not-found; multiple matches
/// are always surfaced as ambiguous rather than tie-broken. When the project
/// token is a UUID the ambiguity message substitutes the first match's human
/// project name, purely for readability.
pub async fn get_definition_id_from_name<B: BuildApi + Sync>(
    name: &str,
    client: &B,
    project: &str,
) -> Result<i32> {
    let definitions = client
        .get_definitions(project, &DefinitionQuery::by_name(name))
        .await?;
    match definitions.len() {
        1 => {
            debug!("Resolved definition '{}' to id {}", name, definitions[0].id);
            Ok(definitions[0].id)
        }
        0 => Err(TeamBuildError::DefinitionNotFound {
            name: name.to_string(),
            project: project.to_string(),
        }),
        _ => {
            let project = if is_uuid(project) {
                definitions[0]
                    .project
                    .as_ref()
                    .map(|p| p.name.clone())
                    .unwrap_or_else(|| project.to_string())
            } else {
                project.to_string()
            };
            Err(TeamBuildError::AmbiguousDefinition {
                name: name.to_string(),
                project,
            })
        }
    }
}

/// Resolve a repository name or ID to a repository ID.
///
/// UUID tokens are already IDs and pass through without a remote call.
/// Names match case-insensitively against the project's repository list;
/// `None` means no repository matched.
pub async fn resolve_repository_as_id<G: GitApi + Sync>(
    repository: &str,
    client: &G,
    project: &str,
) -> Result<Option<String>> {
    if is_uuid(repository) {
        return Ok(Some(repository.to_string()));
    }
    let repositories = client.get_repositories(project).await?;
    for found in repositories {
        if found.name.to_lowercase() == repository.to_lowercase() {
            debug!("Resolved repository '{}' to id {}", repository, found.id);
            return Ok(Some(found.id));
        }
    }
    Ok(None)
}
