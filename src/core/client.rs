use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

use crate::error::ApiError;
use crate::models::{
    Build, BuildDefinitionReference, GitRepository, HttpConfig, ListResponse, QueueBuildRequest,
};

const API_VERSION: &str = "4.0";

/// Query parameters for the definition listing endpoint
#[derive(Debug, Clone, Default)]
pub struct DefinitionQuery {
    /// Name filter; a trailing `*` matches by prefix
    pub name: Option<String>,
    /// Restrict to definitions building this repository
    pub repository_id: Option<String>,
    /// Repository type discriminator, set only alongside `repository_id`
    pub repository_type: Option<String>,
    /// Maximum number of definitions to return
    pub top: Option<u32>,
}

impl DefinitionQuery {
    /// Query matching definitions by name only, as used for name resolution
    pub fn by_name(name: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            ..Self::default()
        }
    }
}

/// Build endpoints of the hosted service
#[async_trait]
pub trait BuildApi {
    async fn queue_build(
        &self,
        project: &str,
        request: &QueueBuildRequest,
    ) -> Result<Build, ApiError>;

    async fn get_build(&self, project: &str, build_id: i32) -> Result<Build, ApiError>;

    async fn get_definitions(
        &self,
        project: &str,
        query: &DefinitionQuery,
    ) -> Result<Vec<BuildDefinitionReference>, ApiError>;

    async fn get_definition(
        &self,
        project: &str,
        definition_id: i32,
    ) -> Result<BuildDefinitionReference, ApiError>;
}

/// Git repository endpoints of the hosted service
#[async_trait]
pub trait GitApi {
    async fn get_repositories(&self, project: &str) -> Result<Vec<GitRepository>, ApiError>;
}

/// REST client for a hosted Team Services instance
pub struct ServiceClient {
    client: Client,
    instance: String,
    token: Option<String>,
}

impl ServiceClient {
    /// Create a client for the given instance URL. The token, when present,
    /// is sent as basic-auth credentials with an empty username.
    pub fn new(instance: &str, token: Option<String>, http: &HttpConfig) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(http.timeout_seconds))
            .build()
            .map_err(|e| ApiError::RequestFailed(e.to_string()))?;

        Ok(Self {
            client,
            instance: instance.trim_end_matches('/').to_string(),
            token,
        })
    }

    fn url(&self, project: &str, path: &str) -> String {
        format!(
            "{}/{}/_apis/{}",
            self.instance,
            urlencoding::encode(project),
            path
        )
    }

    fn request(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        let builder = builder.query(&[("api-version", API_VERSION)]);
        match &self.token {
            Some(token) => builder.basic_auth("", Some(token)),
            None => builder,
        }
    }

    async fn send<T: DeserializeOwned>(
        &self,
        builder: reqwest::RequestBuilder,
    ) -> Result<T, ApiError> {
        let response = self.request(builder).send().await.map_err(|e| {
            if e.is_connect() {
                ApiError::ConnectionRefused(format!(
                    "Could not connect to {}. Check the instance URL.",
                    self.instance
                ))
            } else {
                ApiError::from(e)
            }
        })?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(ApiError::HttpError { status, message });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::ParseError(e.to_string()))
    }
}

#[async_trait]
impl BuildApi for ServiceClient {
    async fn queue_build(
        &self,
        project: &str,
        request: &QueueBuildRequest,
    ) -> Result<Build, ApiError> {
        let url = self.url(project, "build/builds");
        debug!("POST {}", url);
        self.send(self.client.post(&url).json(request)).await
    }

    async fn get_build(&self, project: &str, build_id: i32) -> Result<Build, ApiError> {
        let url = self.url(project, &format!("build/builds/{}", build_id));
        debug!("GET {}", url);
        self.send(self.client.get(&url)).await
    }

    async fn get_definitions(
        &self,
        project: &str,
        query: &DefinitionQuery,
    ) -> Result<Vec<BuildDefinitionReference>, ApiError> {
        let url = self.url(project, "build/definitions");
        debug!("GET {} (name filter: {:?})", url, query.name);

        let mut params: Vec<(&str, String)> =
            vec![("queryOrder", "definitionNameAscending".to_string())];
        if let Some(name) = &query.name {
            params.push(("name", name.clone()));
        }
        if let Some(repository_id) = &query.repository_id {
            params.push(("repositoryId", repository_id.clone()));
        }
        if let Some(repository_type) = &query.repository_type {
            params.push(("repositoryType", repository_type.clone()));
        }
        if let Some(top) = query.top {
            params.push(("$top", top.to_string()));
        }

        let list: ListResponse<BuildDefinitionReference> =
            self.send(self.client.get(&url).query(&params)).await?;
        Ok(list.value)
    }

    async fn get_definition(
        &self,
        project: &str,
        definition_id: i32,
    ) -> Result<BuildDefinitionReference, ApiError> {
        let url = self.url(project, &format!("build/definitions/{}", definition_id));
        debug!("GET {}", url);
        self.send(self.client.get(&url)).await
    }
}

#[async_trait]
impl GitApi for ServiceClient {
    async fn get_repositories(&self, project: &str) -> Result<Vec<GitRepository>, ApiError> {
        let url = self.url(project, "git/repositories");
        debug!("GET {}", url);
        let params = [("includeLinks", "false"), ("includeAllUrls", "false")];
        let list: ListResponse<GitRepository> =
            self.send(self.client.get(&url).query(&params)).await?;
        Ok(list.value)
    }
}
