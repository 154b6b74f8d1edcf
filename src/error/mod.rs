// Error types for the fixture store
//
// The accessors themselves never fail. Store errors only arise when a slot's
// lock was poisoned by a writer that panicked while holding it; config errors
// when a configuration file can't be read or parsed.

mod config;
mod store;

pub use config::{ConfigError, ConfigErrorCodes};
pub use store::{log_store_error, StoreError, StoreErrorCodes};

/// Error codes for structured error reporting
///
/// This trait provides a standard way to get error codes and messages
/// from custom error types, so callers outside Rust can branch on a
/// stable number instead of parsing text.
pub trait ErrorCode {
    /// Get the numeric error code
    fn code(&self) -> i32;

    /// Get the human-readable error message
    fn message(&self) -> String;
}
