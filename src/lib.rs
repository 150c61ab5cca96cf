pub mod action_log;
pub mod actions;
pub mod config;
pub mod engine;
pub mod error;
pub mod model;
pub mod report;
pub mod retention;
pub mod scanner;

pub use config::AppConfig;
pub use engine::{CleanEngine, CleanResult};
pub use error::Error;
pub use report::{Notice, Reporter, SilentReporter};
