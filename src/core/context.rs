use tracing::debug;

use crate::core::git::{current_remote_url, parse_remote_url, RemoteInfo};
use crate::error::{Result, TeamBuildError};

/// Resolved connection context for a single command invocation
#[derive(Debug, Clone)]
pub struct Context {
    pub instance: String,
    pub project: String,
}

/// Connection values supplied by the caller, before detection
#[derive(Debug, Clone, Default)]
pub struct ContextOptions {
    pub instance: Option<String>,
    pub project: Option<String>,
    /// When true, values missing above are detected from the current
    /// working directory's repo remote
    pub detect: bool,
}

/// Resolve instance and project, detecting from the working tree if allowed.
pub fn resolve_instance_and_project(options: &ContextOptions) -> Result<Context> {
    let (context, _) = resolve_with_remote(options, detected_remote(options))?;
    Ok(context)
}

/// Resolve instance, project, and the active repository name when detected.
pub fn resolve_instance_project_and_repo(
    options: &ContextOptions,
) -> Result<(Context, Option<String>)> {
    resolve_with_remote(options, detected_remote(options))
}

fn detected_remote(options: &ContextOptions) -> Option<RemoteInfo> {
    if !options.detect {
        return None;
    }
    if options.instance.is_some() && options.project.is_some() {
        return None;
    }
    let url = current_remote_url()?;
    let info = parse_remote_url(&url);
    if info.is_none() {
        debug!("Remote '{}' is not a hosted-service URL", url);
    }
    info
}

/// Fill unsupplied values from the detected remote. Explicit values always
/// win over detection.
pub fn resolve_with_remote(
    options: &ContextOptions,
    remote: Option<RemoteInfo>,
) -> Result<(Context, Option<String>)> {
    let instance = options
        .instance
        .clone()
        .or_else(|| remote.as_ref().map(|r| r.instance.clone()))
        .ok_or_else(|| {
            TeamBuildError::InvalidArgument(
                "The --instance argument must be supplied for this command.".to_string(),
            )
        })?;
    let project = options
        .project
        .clone()
        .or_else(|| remote.as_ref().map(|r| r.project.clone()))
        .ok_or_else(|| {
            TeamBuildError::InvalidArgument(
                "The --project argument must be supplied for this command.".to_string(),
            )
        })?;

    let repo = remote.map(|r| r.repo);
    Ok((Context { instance, project }, repo))
}
