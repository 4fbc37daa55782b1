mod cli;
mod command;
mod config;
mod logger;
mod workspace;

use std::process::ExitCode;

fn main() -> ExitCode {
    let _log_guard = logger::init();

    match cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %format!("{:#}", e), "command failed");
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
