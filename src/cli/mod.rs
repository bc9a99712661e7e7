pub mod commands;
pub mod core;
pub mod io;
pub mod output;
pub mod registry;
pub mod render;
mod shell;

pub use shell::run_cli;
