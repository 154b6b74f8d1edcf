// Fixture Store - process-wide container for the user and claim fixtures
// Two shared, observable slots populated from literal data on first use

// Module declarations
pub mod api;
pub mod config;
pub mod error;
pub mod fixtures;
pub mod logging;
pub mod models;
pub mod slot;
pub mod store;

// Re-exports for convenience
pub use api::{claim_document, initialize, users};
pub use error::{ErrorCode, StoreError};
pub use models::{ClaimDocument, UserRecord};
pub use slot::{Slot, SlotChange, SlotName, SlotWriteGuard};
pub use store::{FixtureStore, StoreSnapshot};
