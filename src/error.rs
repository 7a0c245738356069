use thiserror::Error;

use crate::models::ConfigError;

/// Main error type for TeamBuild
#[derive(Error, Debug)]
pub enum TeamBuildError {
    #[error("{0}")]
    InvalidArgument(String),

    #[error("There were no build definitions matching name \"{name}\" in project \"{project}\".")]
    DefinitionNotFound { name: String, project: String },

    #[error("Multiple definitions were found matching name \"{name}\" in project \"{project}\".  Try supplying the definition ID.")]
    AmbiguousDefinition { name: String, project: String },

    #[error("Could not find a repository with name, '{repository}', in project, '{project}'.")]
    RepositoryNotFound { repository: String, project: String },

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Service error: {0}")]
    Api(#[from] ApiError),

    #[error("Failed to render output: {0}")]
    Output(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised by the build service REST client
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Connection refused: {0}")]
    ConnectionRefused(String),

    #[error("Request timeout after {0} seconds")]
    Timeout(u64),

    #[error("HTTP error: {status} - {message}")]
    HttpError { status: u16, message: String },

    #[error("Failed to parse response: {0}")]
    ParseError(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Timeout(0)
        } else if err.is_connect() {
            ApiError::ConnectionRefused(err.to_string())
        } else if let Some(status) = err.status() {
            ApiError::HttpError {
                status: status.as_u16(),
                message: err.to_string(),
            }
        } else {
            ApiError::RequestFailed(err.to_string())
        }
    }
}

impl TeamBuildError {
    /// The error raised when a command is given neither an ID nor a name.
    pub fn id_or_name_required() -> Self {
        TeamBuildError::InvalidArgument(
            "Either the --id argument or the --name argument must be supplied for this command."
                .to_string(),
        )
    }
}

pub type Result<T> = std::result::Result<T, TeamBuildError>;
