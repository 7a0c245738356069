pub mod browser;
pub mod client;
pub mod config;
pub mod context;
pub mod git;
pub mod resolve;

pub use browser::{build_view_url, definition_view_url, open_build, open_definition};
pub use client::{BuildApi, DefinitionQuery, GitApi, ServiceClient};
pub use config::load_config;
pub use context::{
    resolve_instance_and_project, resolve_instance_project_and_repo, Context, ContextOptions,
};
pub use git::resolve_git_ref_heads;
pub use resolve::{get_definition_id_from_name, is_uuid, resolve_repository_as_id};
