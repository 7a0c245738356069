use tracing::debug;

use crate::commands::output::{print_definition, print_definition_list};
use crate::core::{
    browser, get_definition_id_from_name, resolve_instance_and_project,
    resolve_instance_project_and_repo, resolve_repository_as_id, BuildApi, Context,
    DefinitionQuery, GitApi, ServiceClient,
};
use crate::error::{Result, TeamBuildError};
use crate::models::{BuildDefinitionReference, Config};

/// Repository type discriminator for service-hosted git repositories
const REPOSITORY_TYPE_GIT: &str = "TfsGit";

/// Options for listing build definitions
#[derive(Debug, Clone, Default)]
pub struct DefinitionListOptions {
    /// Name filter; append `*` to match by prefix
    pub name: Option<String>,
    /// Maximum number of definitions to return
    pub top: Option<u32>,
    /// Restrict to definitions building this repository (name or ID)
    pub repository: Option<String>,
}

/// List build definitions, ordered by name ascending.
pub async fn list_definitions<B, G>(
    build_client: &B,
    git_client: &G,
    context: &Context,
    options: &DefinitionListOptions,
) -> Result<Vec<BuildDefinitionReference>>
where
    B: BuildApi + Sync,
    G: GitApi + Sync,
{
    let mut query = DefinitionQuery {
        name: options.name.clone(),
        top: options.top,
        ..DefinitionQuery::default()
    };

    if let Some(repository) = &options.repository {
        let resolved = resolve_repository_as_id(repository, git_client, &context.project).await?;
        match resolved {
            Some(id) => {
                query.repository_id = Some(id);
                query.repository_type = Some(REPOSITORY_TYPE_GIT.to_string());
            }
            None => {
                return Err(TeamBuildError::RepositoryNotFound {
                    repository: repository.clone(),
                    project: context.project.clone(),
                });
            }
        }
    }

    let definitions = build_client
        .get_definitions(&context.project, &query)
        .await?;
    debug!("Found {} definition(s)", definitions.len());
    Ok(definitions)
}

/// Fetch a single build definition by ID or name.
pub async fn show_definition<B: BuildApi + Sync>(
    client: &B,
    context: &Context,
    definition_id: Option<i32>,
    name: Option<&str>,
    open_browser: bool,
) -> Result<BuildDefinitionReference> {
    let definition_id = match definition_id {
        Some(id) => id,
        None => match name {
            Some(name) => get_definition_id_from_name(name, client, &context.project).await?,
            None => return Err(TeamBuildError::id_or_name_required()),
        },
    };

    let definition = client
        .get_definition(&context.project, definition_id)
        .await?;
    if open_browser {
        browser::open_definition(&definition, &context.instance);
    }
    Ok(definition)
}

/// CLI entry point for `teambuild definition list`.
pub async fn run_definition_list(
    config: &Config,
    options: DefinitionListOptions,
    json: bool,
) -> Result<()> {
    // The detected repo narrows nothing here; only an explicit --repository
    // filters the listing.
    let (context, _detected_repo) =
        resolve_instance_project_and_repo(&config.context_options())?;
    let client = ServiceClient::new(
        &context.instance,
        config.connection.token.clone(),
        &config.http,
    )?;
    let definitions = list_definitions(&client, &client, &context, &options).await?;
    print_definition_list(&definitions, json)?;
    Ok(())
}

/// CLI entry point for `teambuild definition show`.
pub async fn run_definition_show(
    config: &Config,
    definition_id: Option<i32>,
    name: Option<String>,
    open_browser: bool,
    json: bool,
) -> Result<()> {
    let context = resolve_instance_and_project(&config.context_options())?;
    let client = ServiceClient::new(
        &context.instance,
        config.connection.token.clone(),
        &config.http,
    )?;
    let definition =
        show_definition(&client, &context, definition_id, name.as_deref(), open_browser).await?;
    print_definition(&definition, json)?;
    Ok(())
}
