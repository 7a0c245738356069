use crate::commands::output::print_build;
use crate::core::{browser, resolve_instance_and_project, BuildApi, Context, ServiceClient};
use crate::error::Result;
use crate::models::{Build, Config};

/// Fetch a build by ID.
pub async fn show_build<B: BuildApi + Sync>(
    client: &B,
    context: &Context,
    build_id: i32,
    open_browser: bool,
) -> Result<Build> {
    let build = client.get_build(&context.project, build_id).await?;
    if open_browser {
        browser::open_build(&build, &context.instance);
    }
    Ok(build)
}

/// CLI entry point for `teambuild show`.
pub async fn run_show(config: &Config, build_id: i32, open_browser: bool, json: bool) -> Result<()> {
    let context = resolve_instance_and_project(&config.context_options())?;
    let client = ServiceClient::new(
        &context.instance,
        config.connection.token.clone(),
        &config.http,
    )?;
    let build = show_build(&client, &context, build_id, open_browser).await?;
    print_build(&build, json)?;
    Ok(())
}
