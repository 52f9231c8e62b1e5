//! CLI module for Preservation Tips
//!
//! - `serve`: run the HTTP API
//! - `search`, `details`, `save`, `remove`, `saved`: run one service
//!   operation and print the result as JSON

pub mod item;
pub mod serve;

use clap::{Parser, Subcommand};

/// Preservation Tips - food storage guidance with caching and saved items
#[derive(Parser)]
#[command(name = "preservation-tips")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP API server
    Serve,

    #[command(flatten)]
    Item(item::ItemCommand),
}
