//! A shuffle bias measurement tool built with Rust.
//!
//! Shuffling is easy to get subtly wrong and hard to eyeball; counting is
//! the only honest check.

use riffle::core;
use riffle::logging;

fn main() {
    let cli_args = core::platform::get_cli_args();
    logging::init(cli_args.verbose);
    match core::run_app(cli_args) {
        Ok(()) => {}
        Err(error) => core::platform::handle_error(error),
    }
}
