// Process-wide access to the fixture store
//
// The store is created on first use and lives for the rest of the process.
// Consumers that can take a `&FixtureStore` should prefer that; these
// functions exist for callers that need ambient access.

use once_cell::sync::Lazy;

use crate::models::{ClaimDocument, UserRecord};
use crate::slot::Slot;
use crate::store::FixtureStore;

/// Global FixtureStore instance
///
/// Built with the default configuration the first time any function in
/// this module is called. Never rebuilt or reset afterwards.
static STORE: Lazy<FixtureStore> = Lazy::new(|| {
    let store = FixtureStore::new();
    tracing::info!("[FixtureStore] Process-wide store initialized");
    store
});

/// Initialize the process-wide store
///
/// The first call populates both slots with their literal defaults. Later
/// calls return the same instance without touching its contents, so edits
/// made through any handle survive re-initialization.
pub fn initialize() -> &'static FixtureStore {
    &STORE
}

/// Shared handle to the process-wide user records
pub fn users() -> Slot<Vec<UserRecord>> {
    initialize().users()
}

/// Shared handle to the process-wide claim document
pub fn claim_document() -> Slot<ClaimDocument> {
    initialize().claim_document()
}

/// Get the version of the fixture store crate
pub fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
