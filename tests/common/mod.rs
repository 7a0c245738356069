//! Mock service implementations shared by the command tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use teambuild::core::{BuildApi, Context, DefinitionQuery, GitApi};
use teambuild::error::ApiError;
use teambuild::models::{
    Build, BuildDefinitionReference, GitRepository, QueueBuildRequest, TeamProjectReference,
};

/// In-memory stand-in for the hosted service, counting every remote call.
#[derive(Default)]
pub struct MockService {
    pub definitions: Vec<BuildDefinitionReference>,
    pub repositories: Vec<GitRepository>,
    pub definition_calls: AtomicUsize,
    pub repository_calls: AtomicUsize,
    pub queue_calls: AtomicUsize,
    pub last_queue_request: Mutex<Option<QueueBuildRequest>>,
    pub last_definition_query: Mutex<Option<DefinitionQuery>>,
}

impl MockService {
    pub fn with_definitions(definitions: Vec<BuildDefinitionReference>) -> Self {
        Self {
            definitions,
            ..Self::default()
        }
    }

    pub fn with_repositories(repositories: Vec<GitRepository>) -> Self {
        Self {
            repositories,
            ..Self::default()
        }
    }

    pub fn remote_calls(&self) -> usize {
        self.definition_calls.load(Ordering::SeqCst)
            + self.repository_calls.load(Ordering::SeqCst)
            + self.queue_calls.load(Ordering::SeqCst)
    }

    fn matching_definitions(&self, name: Option<&str>) -> Vec<BuildDefinitionReference> {
        match name {
            None => self.definitions.clone(),
            Some(filter) => {
                if let Some(prefix) = filter.strip_suffix('*') {
                    self.definitions
                        .iter()
                        .filter(|d| d.name.starts_with(prefix))
                        .cloned()
                        .collect()
                } else {
                    self.definitions
                        .iter()
                        .filter(|d| d.name == filter)
                        .cloned()
                        .collect()
                }
            }
        }
    }
}

#[async_trait]
impl BuildApi for MockService {
    async fn queue_build(
        &self,
        project: &str,
        request: &QueueBuildRequest,
    ) -> Result<Build, ApiError> {
        self.queue_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_queue_request.lock().unwrap() = Some(request.clone());
        Ok(Build {
            id: 1000,
            build_number: Some("20260829.1".to_string()),
            status: Some("notStarted".to_string()),
            result: None,
            source_branch: request.source_branch.clone(),
            queue_time: None,
            definition: None,
            project: Some(TeamProjectReference {
                id: None,
                name: project.to_string(),
            }),
        })
    }

    async fn get_build(&self, project: &str, build_id: i32) -> Result<Build, ApiError> {
        Ok(Build {
            id: build_id,
            build_number: None,
            status: Some("completed".to_string()),
            result: Some("succeeded".to_string()),
            source_branch: None,
            queue_time: None,
            definition: None,
            project: Some(TeamProjectReference {
                id: None,
                name: project.to_string(),
            }),
        })
    }

    async fn get_definitions(
        &self,
        _project: &str,
        query: &DefinitionQuery,
    ) -> Result<Vec<BuildDefinitionReference>, ApiError> {
        self.definition_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_definition_query.lock().unwrap() = Some(query.clone());
        let mut matches = self.matching_definitions(query.name.as_deref());
        if let Some(top) = query.top {
            matches.truncate(top as usize);
        }
        Ok(matches)
    }

    async fn get_definition(
        &self,
        _project: &str,
        definition_id: i32,
    ) -> Result<BuildDefinitionReference, ApiError> {
        self.definitions
            .iter()
            .find(|d| d.id == definition_id)
            .cloned()
            .ok_or(ApiError::HttpError {
                status: 404,
                message: format!("definition {} not found", definition_id),
            })
    }
}

#[async_trait]
impl GitApi for MockService {
    async fn get_repositories(&self, _project: &str) -> Result<Vec<GitRepository>, ApiError> {
        self.repository_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.repositories.clone())
    }
}

pub fn context(project: &str) -> Context {
    Context {
        instance: "https://fabrikam.visualstudio.com".to_string(),
        project: project.to_string(),
    }
}

pub fn definition(id: i32, name: &str, project: &str) -> BuildDefinitionReference {
    BuildDefinitionReference {
        id,
        name: name.to_string(),
        project: Some(TeamProjectReference {
            id: None,
            name: project.to_string(),
        }),
        queue_status: None,
        revision: None,
    }
}

pub fn repository(id: &str, name: &str) -> GitRepository {
    GitRepository {
        id: id.to_string(),
        name: name.to_string(),
    }
}
