pub mod commands;
pub mod context;
pub mod export;
pub mod list;
pub mod open;
pub mod shell;
pub mod upload;

pub use commands::{Cli, Commands};
pub use context::CliContext;
