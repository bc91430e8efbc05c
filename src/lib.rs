// Game controller test library

pub mod app;
pub mod cli;
pub mod config;
pub mod graphics;
pub mod input;
pub mod logging;

pub use cli::Cli;
pub use config::Options;
pub use logging::LogLevel;
