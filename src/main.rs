//! To-Do CLI - Main Entry Point
//!
//! Parses arguments, sets up logging and runs an interactive session on the
//! terminal. The actual implementation is in the `todo_cli` library.

use anyhow::Result;
use clap::Parser;
use todo_cli::TodoApp;
use tracing_subscriber::EnvFilter;

/// To-Do CLI - add, view and delete tasks from an interactive menu
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Log filter used when RUST_LOG is not set (e.g. "debug", "todo_cli=trace")
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Logs go to stderr so they never mix with the menu on stdout
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&args.log_level))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let stdin = std::io::stdin();
    let mut app = TodoApp::new(stdin.lock(), std::io::stdout());
    app.run()
}
