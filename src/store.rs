// FixtureStore: injectable container for the users and claim slots
//
// A store is populated with the literal fixtures the moment it is built.
// Tests construct their own instances; the process-wide instance lives in
// `crate::api`.

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use crate::config::StoreConfig;
use crate::error::StoreError;
use crate::fixtures::{default_claim_document, default_users};
use crate::models::{ClaimDocument, UserRecord};
use crate::slot::{Slot, SlotChange, SlotName};

/// Point-in-time copy of both slots
///
/// Serializes to the `{ users, responseBody }` object handed to the
/// presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreSnapshot {
    pub users: Vec<UserRecord>,
    #[serde(rename = "responseBody")]
    pub response_body: ClaimDocument,
}

/// FixtureStore: container holding two independently addressable slots
///
/// - `users`: ordered sequence of `UserRecord`
/// - `response_body`: the single `ClaimDocument`
///
/// Both slots share one notification channel; each `SlotChange` names the
/// slot that was written. The store never validates, persists or resets
/// what callers write.
pub struct FixtureStore {
    users: Slot<Vec<UserRecord>>,
    response_body: Slot<ClaimDocument>,
    notifier: Option<broadcast::Sender<SlotChange>>,
}

impl FixtureStore {
    /// Create a store populated with the literal fixtures
    ///
    /// Uses the default configuration: notifications enabled.
    pub fn new() -> Self {
        Self::with_config(&StoreConfig::default())
    }

    /// Create a store populated with the literal fixtures
    ///
    /// # Arguments
    /// * `config` - Controls whether writes publish change notifications
    pub fn with_config(config: &StoreConfig) -> Self {
        let notifier = if config.notifications.enabled {
            let (tx, _) = broadcast::channel(config.notifications.effective_capacity());
            Some(tx)
        } else {
            None
        };

        let users = default_users();
        log::debug!(
            "[FixtureStore] Populating {} users and claim document (notifications: {})",
            users.len(),
            notifier.is_some()
        );

        Self {
            users: Slot::new(SlotName::Users, users, notifier.clone()),
            response_body: Slot::new(
                SlotName::ResponseBody,
                default_claim_document(),
                notifier.clone(),
            ),
            notifier,
        }
    }

    /// Shared handle to the user records
    ///
    /// Every call returns a handle to the same underlying sequence, so a
    /// mutation through one handle is visible through all of them.
    pub fn users(&self) -> Slot<Vec<UserRecord>> {
        self.users.clone()
    }

    /// Shared handle to the claim document
    ///
    /// Same sharing guarantee as `users()`.
    pub fn claim_document(&self) -> Slot<ClaimDocument> {
        self.response_body.clone()
    }

    /// Subscribe to writes on either slot
    ///
    /// Returns None when notifications are disabled.
    pub fn subscribe(&self) -> Option<broadcast::Receiver<SlotChange>> {
        self.notifier.as_ref().map(|tx| tx.subscribe())
    }

    /// Copy both slots out for serialization
    ///
    /// # Errors
    /// - `StoreError::LockPoisoned` if either slot's lock was poisoned
    pub fn snapshot(&self) -> Result<StoreSnapshot, StoreError> {
        Ok(StoreSnapshot {
            users: self.users.get()?,
            response_body: self.response_body.get()?,
        })
    }
}

impl Default for FixtureStore {
    fn default() -> Self {
        Self::new()
    }
}
