pub mod definition;
pub mod output;
pub mod queue;
pub mod show;

pub use definition::*;
pub use queue::*;
pub use show::*;
