pub mod config;
pub mod filters;
pub mod task;

pub use config::*;
pub use filters::*;
pub use task::*;
