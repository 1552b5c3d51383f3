pub mod cli;
pub mod client;
pub mod config;
pub mod errors;
pub mod models;
pub mod render;
pub mod repl;
pub mod view;
