use clap::Parser;
use preflight::cli::error_line;
use preflight::{setup_logging, Cli};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = setup_logging(&cli.log_level) {
        eprintln!("Warning: Failed to initialize logging: {e}. Continuing without logs.");
    }

    match cli.run() {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("{}", error_line(&e));
            ExitCode::FAILURE
        }
    }
}
