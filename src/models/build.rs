use serde::{Deserialize, Serialize};

/// Reference linking a queued build to its definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefinitionReference {
    pub id: i32,
}

/// Body submitted to the queue-build endpoint
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueueBuildRequest {
    pub definition: DefinitionReference,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_branch: Option<String>,
}

impl QueueBuildRequest {
    pub fn new(definition_id: i32) -> Self {
        Self {
            definition: DefinitionReference { id: definition_id },
            source_branch: None,
        }
    }
}

/// Team project reference as returned by the service
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamProjectReference {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
}

/// A build as returned by the service
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Build {
    pub id: i32,
    #[serde(default)]
    pub build_number: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub result: Option<String>,
    #[serde(default)]
    pub source_branch: Option<String>,
    #[serde(default)]
    pub queue_time: Option<String>,
    #[serde(default)]
    pub definition: Option<BuildDefinitionReference>,
    #[serde(default)]
    pub project: Option<TeamProjectReference>,
}

/// A build definition reference, used both for listing and for
/// showing a single definition
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildDefinitionReference {
    pub id: i32,
    pub name: String,
    #[serde(default)]
    pub project: Option<TeamProjectReference>,
    #[serde(default)]
    pub queue_status: Option<String>,
    #[serde(default)]
    pub revision: Option<i32>,
}

/// A git repository as returned by the repository listing endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitRepository {
    pub id: String,
    pub name: String,
}

/// Envelope wrapping every list response from the service
#[derive(Debug, Clone, Deserialize)]
pub struct ListResponse<T> {
    #[serde(default)]
    pub count: usize,
    pub value: Vec<T>,
}
