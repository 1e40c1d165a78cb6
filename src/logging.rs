use std::io::IsTerminal;

use tracing_subscriber::EnvFilter;

/// Install the stderr subscriber. Returns false if one was already installed.
///
/// The level comes from the verbose flag alone; `RUST_LOG` is not consulted.
pub fn init(verbose: bool) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(filter(verbose))
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .try_init()
        .is_ok()
}

fn filter(verbose: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new("warn,quantum_forecaster=debug")
    } else {
        EnvFilter::new("warn")
    }
}
