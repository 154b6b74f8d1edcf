// Store error types and constants

use crate::error::ErrorCode;
use crate::slot::SlotName;
use log::error;
use std::fmt;

/// Store error code constants
///
/// Error code range: 3001
pub struct StoreErrorCodes {}

impl StoreErrorCodes {
    /// Slot RwLock was poisoned
    pub const LOCK_POISONED: i32 = 3001;
}

/// Log a store error with structured context
///
/// Logs the numeric code, the failing component and the message.
/// The logging is non-blocking and will not panic on failure.
pub fn log_store_error(err: &StoreError, context: &str) {
    error!(
        "Store error in {}: code={}, component=FixtureStore, message={}",
        context,
        err.code(),
        err.message()
    );
}

/// Errors raised while accessing a slot through its handle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// A writer panicked while holding the slot lock
    LockPoisoned { slot: SlotName },
}

impl ErrorCode for StoreError {
    fn code(&self) -> i32 {
        match self {
            StoreError::LockPoisoned { .. } => StoreErrorCodes::LOCK_POISONED,
        }
    }

    fn message(&self) -> String {
        match self {
            StoreError::LockPoisoned { slot } => {
                format!("Lock poisoned for slot: {}", slot)
            }
        }
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "StoreError::{:?} (code {}): {}",
            self,
            self.code(),
            self.message()
        )
    }
}

impl std::error::Error for StoreError {}
