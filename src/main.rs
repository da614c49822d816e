use clap::Parser;
use todo_screen::cli::commands::Cli;
use todo_screen::io::config_io::load_config;
use todo_screen::io::logging::init_file_logging;
use todo_screen::ops::task_ops::TaskList;
use todo_screen::tui::{self, App};

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(path) = &cli.log_file {
        init_file_logging(path)?;
    }

    let cwd = std::env::current_dir()?;
    let config = load_config(cli.config.as_deref(), &cwd)?;

    // Seed tasks go through the same rules as typed ones
    let mut tasks = TaskList::new();
    for title in cli.tasks.iter().filter(|t| !t.trim().is_empty()) {
        if let Err(e) = tasks.add_task(title) {
            eprintln!("warning: skipping --task: {}", e);
        }
    }

    tui::run(App::new(tasks, &config))
}
