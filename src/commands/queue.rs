use tracing::info;

use crate::commands::output::print_build;
use crate::core::{
    browser, get_definition_id_from_name, resolve_git_ref_heads, resolve_instance_and_project,
    BuildApi, Context, ServiceClient,
};
use crate::error::{Result, TeamBuildError};
use crate::models::{Build, Config, QueueBuildRequest};

/// Options for queueing a build
#[derive(Debug, Clone, Default)]
pub struct QueueOptions {
    /// Definition ID; required unless `name` is supplied
    pub definition_id: Option<i32>,
    /// Definition name; ignored if `definition_id` is supplied
    pub name: Option<String>,
    /// Branch to build, normalized to refs/heads form
    pub source_branch: Option<String>,
    /// Open the queued build in the default web browser
    pub open_browser: bool,
}

/// Queue a new build against the resolved definition.
pub async fn queue_build<B: BuildApi + Sync>(
    client: &B,
    context: &Context,
    options: &QueueOptions,
) -> Result<Build> {
    if options.definition_id.is_none() && options.name.is_none() {
        return Err(TeamBuildError::id_or_name_required());
    }

    let definition_id = match options.definition_id {
        Some(id) => id,
        None => {
            let name = options.name.as_deref().unwrap_or_default();
            get_definition_id_from_name(name, client, &context.project).await?
        }
    };

    let mut request = QueueBuildRequest::new(definition_id);
    if let Some(branch) = &options.source_branch {
        request.source_branch = Some(resolve_git_ref_heads(branch));
    }

    let queued = client.queue_build(&context.project, &request).await?;
    info!(
        "Queued build {} for definition {}",
        queued.id, definition_id
    );

    if options.open_browser {
        browser::open_build(&queued, &context.instance);
    }
    Ok(queued)
}

/// CLI entry point for `teambuild queue`.
pub async fn run_queue(config: &Config, options: QueueOptions, json: bool) -> Result<()> {
    let context = resolve_instance_and_project(&config.context_options())?;
    let client = ServiceClient::new(
        &context.instance,
        config.connection.token.clone(),
        &config.http,
    )?;
    let build = queue_build(&client, &context, &options).await?;
    print_build(&build, json)?;
    Ok(())
}
