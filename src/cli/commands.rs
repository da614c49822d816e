use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "todo", about = concat!("[x] todo v", env!("CARGO_PKG_VERSION"), " - a to-do list for your terminal"), version)]
pub struct Cli {
    /// Read settings from this file instead of ./todo.toml
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Write logs to this file (filter with RUST_LOG)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Start with a task already on the list (repeatable)
    #[arg(short, long = "task", value_name = "TITLE")]
    pub tasks: Vec<String>,
}
