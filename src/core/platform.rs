//! Process-level glue for the CLI binary.
//!
//! Argument collection and the fatal error exit path live here so that
//! main stays small.

/// Handle a fatal application error.
///
/// Prints the error chain to stderr and exits with code 1.
pub fn handle_error(error: anyhow::Error) {
    eprintln!();
    eprintln!("Error running riffle:");
    eprintln!("{error:#}");
    eprintln!();
    eprintln!("Try running with --help for usage information.");
    std::process::exit(1);
}

/// Parse CLI arguments from the process environment.
pub fn get_cli_args() -> crate::core::cli::CliArgs {
    use clap::Parser;
    crate::core::cli::CliArgs::parse()
}
