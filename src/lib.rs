pub mod bridge;
pub mod completer;
pub mod config;
pub mod consts;
pub mod engine;
pub mod error;
pub mod logging;
pub mod prompts;
