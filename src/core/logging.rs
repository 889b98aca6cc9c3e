//! Logging initialization shared by the server and client binaries.
//!
//! Output always goes to stderr: the server's stdout carries the MCP
//! protocol and the client's stdout is the interactive terminal.

use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt};

/// Map a textual level to a tracing `Level`, defaulting to INFO.
pub fn parse_level(level: &str) -> Level {
    match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}

/// Initialize the logging subsystem.
///
/// `RUST_LOG` directives are honoured on top of `level`.
pub fn init_logging(level: &str) {
    let filter = EnvFilter::from_default_env().add_directive(parse_level(level).into());

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("DEBUG"), Level::DEBUG);
        assert_eq!(parse_level("warn"), Level::WARN);
        assert_eq!(parse_level("verbose"), Level::INFO);
    }
}
