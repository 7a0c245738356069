use std::process::Command;
use tracing::debug;

const REF_HEADS_PREFIX: &str = "refs/heads/";

/// Normalize a branch name to its full ref form. Inputs already carrying a
/// `refs/` prefix pass through unchanged.
pub fn resolve_git_ref_heads(symbolic_ref: &str) -> String {
    if symbolic_ref.starts_with("refs/") {
        symbolic_ref.to_string()
    } else {
        format!("{}{}", REF_HEADS_PREFIX, symbolic_ref)
    }
}

/// Connection values derived from a hosted-service remote URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteInfo {
    pub instance: String,
    pub project: String,
    pub repo: String,
}

/// Parse a hosted-service remote URL of the form
/// `https://<account>.visualstudio.com/[DefaultCollection/]<project>/_git/<repo>`.
pub fn parse_remote_url(url: &str) -> Option<RemoteInfo> {
    let url = url.trim_end_matches('/');
    let (prefix, repo) = url.split_once("/_git/")?;

    let rest = prefix
        .strip_prefix("https://")
        .map(|r| ("https://", r))
        .or_else(|| prefix.strip_prefix("http://").map(|r| ("http://", r)))?;
    let (scheme, rest) = rest;

    let mut segments = rest.split('/');
    let host = segments.next()?;
    if host.is_empty() {
        return None;
    }

    let mut instance = format!("{}{}", scheme, host);
    let mut project = segments.next()?;
    if project.eq_ignore_ascii_case("DefaultCollection") {
        instance.push_str("/DefaultCollection");
        project = segments.next()?;
    }
    if project.is_empty() || segments.next().is_some() {
        return None;
    }

    let project = urlencoding::decode(project).ok()?.into_owned();
    let repo = urlencoding::decode(repo).ok()?.into_owned();
    Some(RemoteInfo {
        instance,
        project,
        repo,
    })
}

/// Read the origin remote URL of the repository containing the current
/// working directory, if any.
pub fn current_remote_url() -> Option<String> {
    let output = Command::new("git")
        .args(["config", "--get", "remote.origin.url"])
        .output()
        .ok()?;
    if !output.status.success() {
        debug!("No git remote found in the current working directory");
        return None;
    }
    let url = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if url.is_empty() {
        None
    } else {
        Some(url)
    }
}
