//! CLI 模块

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "tadu")]
#[command(version)]
#[command(about = "Four-column kanban to-do board for the terminal")]
pub struct Cli {
    /// Disable the terminal bell on task changes
    #[arg(long)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the task database location
    DbPath,
}
