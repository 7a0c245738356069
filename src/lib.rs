//! TeamBuild - command-line client for a hosted build-automation service
//!
//! TeamBuild queues builds, inspects build status, and lists and inspects
//! build definitions over the service's REST API. Human-friendly names are
//! resolved to service IDs before any request is submitted.
//!
//! # Architecture
//!
//! - **commands**: CLI command implementations (queue, show, definition list/show)
//! - **core**: Service client, context resolution, name/repository resolution,
//!   git helpers, browser URL construction
//! - **models**: Data structures (config, wire records)
//! - **error**: Error types

pub mod commands;
pub mod core;
pub mod error;
pub mod models;

pub use error::{Result, TeamBuildError};
