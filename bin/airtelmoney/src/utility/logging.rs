use std::io::{IsTerminal, stdout};
use tracing_subscriber::EnvFilter;

/// Installs the global subscriber: human-readable on a terminal, JSON lines otherwise.
pub fn setup_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true);

    if stdout().is_terminal() {
        builder.with_ansi(true).init();
    } else {
        builder.json().with_ansi(false).init();
    }
}
