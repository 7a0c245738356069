pub mod build;
pub mod config;

pub use build::*;
pub use config::*;
