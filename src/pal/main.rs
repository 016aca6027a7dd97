//! # Pal CLI
//!
//! The binary is intentionally thin: the prompt loop lives in `cli/`, and this
//! file only invokes `cli::run()` and handles process termination.
//!
//! ```text
//! cli/setup.rs     process flags (clap) and the prompt's command table
//! cli/prompt.rs    line reading with re-prompting on invalid input
//! cli/commands.rs  session loop and per-command handlers
//! cli/print.rs     colored output of CmdResult values
//! ```
//!
//! Everything from `pal::api` inward is UI agnostic.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
