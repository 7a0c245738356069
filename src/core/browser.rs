use tracing::{debug, warn};

use crate::models::{Build, BuildDefinitionReference};

/// Web view URL for a queued or completed build.
// e.g. https://fabrikam.visualstudio.com/Fabrikam/_build/index?buildid=4053990
pub fn build_view_url(instance: &str, project: &str, build_id: i32) -> String {
    format!(
        "{}/{}/_build/index?buildid={}",
        instance.trim_end_matches('/'),
        urlencoding::encode(project),
        urlencoding::encode(&build_id.to_string())
    )
}

/// Web view URL for a build definition.
// e.g. https://fabrikam.visualstudio.com/Fabrikam/_build/index?definitionId=5419
pub fn definition_view_url(instance: &str, project: &str, definition_id: i32) -> String {
    format!(
        "{}/{}/_build/index?definitionId={}",
        instance.trim_end_matches('/'),
        urlencoding::encode(project),
        urlencoding::encode(&definition_id.to_string())
    )
}

/// Open the build in the default browser. Fire-and-forget: a failed launch
/// is logged and does not fail the command.
pub fn open_build(build: &Build, instance: &str) {
    let project = match &build.project {
        Some(project) => project.name.as_str(),
        None => {
            warn!("Build {} has no project, not opening browser", build.id);
            return;
        }
    };
    open_url(&build_view_url(instance, project, build.id));
}

/// Open the build definition in the default browser.
pub fn open_definition(definition: &BuildDefinitionReference, instance: &str) {
    let project = match &definition.project {
        Some(project) => project.name.as_str(),
        None => {
            warn!(
                "Definition {} has no project, not opening browser",
                definition.id
            );
            return;
        }
    };
    open_url(&definition_view_url(instance, project, definition.id));
}

fn open_url(url: &str) {
    debug!("Opening web page: {}", url);
    if let Err(e) = open::that(url) {
        warn!("Failed to open browser: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_view_url() {
        let url = build_view_url("https://x.visualstudio.com/", "Demo Project", 42);
        assert_eq!(
            url,
            "https://x.visualstudio.com/Demo%20Project/_build/index?buildid=42"
        );
    }

    #[test]
    fn test_definition_view_url() {
        let url = definition_view_url("https://fabrikam.visualstudio.com", "Fabrikam", 5419);
        assert_eq!(
            url,
            "https://fabrikam.visualstudio.com/Fabrikam/_build/index?definitionId=5419"
        );
    }

    #[test]
    fn test_trailing_slash_stripped_only_at_end() {
        let url = build_view_url("https://tfs.corp.example/DefaultCollection/", "P", 1);
        assert_eq!(
            url,
            "https://tfs.corp.example/DefaultCollection/P/_build/index?buildid=1"
        );
    }
}
