//! Logging setup shared by binaries and tests.
//!
//! Library code logs through the `log` and `tracing` macros; nothing is
//! printed until a subscriber is installed here. The subscriber also
//! captures `log` records, so both end up in the same output.

use tracing::Level;

/// Parse a level name, falling back to INFO for anything unrecognised
pub fn parse_level(level: &str) -> Level {
    match level.trim().to_ascii_lowercase().as_str() {
        "error" => Level::ERROR,
        "warn" | "warning" => Level::WARN,
        "debug" => Level::DEBUG,
        "trace" => Level::TRACE,
        _ => Level::INFO,
    }
}

/// Install a stderr `tracing-subscriber` at the given level
///
/// Returns false if a global subscriber was already installed; calling
/// this more than once is harmless.
pub fn init_logging(level: &str) -> bool {
    tracing_subscriber::fmt()
        .with_max_level(parse_level(level))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .is_ok()
}
