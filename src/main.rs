//! ADR CLI - Architecture Decision Records from the command line

use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = adr_cli::cli::run() {
        eprintln!("Error: {:#}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
