// Slot: shared, observable handle to one piece of store state
//
// Every clone of a Slot points at the same value. Writers go through a guard
// that publishes a SlotChange once the lock is released, so consumers that
// render the data can re-read instead of polling.

use std::fmt;
use std::ops::{Deref, DerefMut};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use futures::stream::{BoxStream, StreamExt};
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;
use tokio_stream::wrappers::BroadcastStream;

use crate::error::{log_store_error, StoreError};

/// Names of the slots exposed by the store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SlotName {
    /// Ordered user records
    Users,
    /// Claim summary document
    ResponseBody,
}

impl SlotName {
    pub fn as_str(&self) -> &'static str {
        match self {
            SlotName::Users => "users",
            SlotName::ResponseBody => "responseBody",
        }
    }
}

impl fmt::Display for SlotName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Notification published after a slot was written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotChange {
    pub slot: SlotName,
}

/// Shared handle to a mutable value
///
/// Cloning a Slot clones the handle, not the value. There is no
/// copy-on-write and no rollback: whatever a writer leaves behind is what
/// every other holder sees next.
pub struct Slot<T> {
    name: SlotName,
    value: Arc<RwLock<T>>,
    notifier: Option<broadcast::Sender<SlotChange>>,
}

impl<T> Clone for Slot<T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name,
            value: Arc::clone(&self.value),
            notifier: self.notifier.clone(),
        }
    }
}

impl<T> fmt::Debug for Slot<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Slot")
            .field("name", &self.name)
            .field("handles", &Arc::strong_count(&self.value))
            .field("notifications", &self.notifier.is_some())
            .finish()
    }
}

impl<T> Slot<T> {
    /// Create a slot holding `value`
    ///
    /// # Arguments
    /// * `name` - Slot identity reported in errors and notifications
    /// * `value` - Initial value
    /// * `notifier` - Broadcast sender for change notifications, or None to
    ///   disable them
    pub fn new(
        name: SlotName,
        value: T,
        notifier: Option<broadcast::Sender<SlotChange>>,
    ) -> Self {
        Self {
            name,
            value: Arc::new(RwLock::new(value)),
            notifier,
        }
    }

    pub fn name(&self) -> SlotName {
        self.name
    }

    /// Acquire shared read access
    ///
    /// # Errors
    /// - `StoreError::LockPoisoned` if a writer panicked while holding the lock
    pub fn read(&self) -> Result<RwLockReadGuard<'_, T>, StoreError> {
        self.value
            .read()
            .map_err(|_| StoreError::LockPoisoned { slot: self.name })
            .inspect_err(|err| log_store_error(err, "slot_read"))
    }

    /// Acquire exclusive write access
    ///
    /// A change notification is published when the returned guard is
    /// dropped, provided the value was accessed mutably.
    ///
    /// # Errors
    /// - `StoreError::LockPoisoned` if a writer panicked while holding the lock
    pub fn write(&self) -> Result<SlotWriteGuard<'_, T>, StoreError> {
        let guard = self
            .value
            .write()
            .map_err(|_| StoreError::LockPoisoned { slot: self.name })
            .inspect_err(|err| log_store_error(err, "slot_write"))?;

        Ok(SlotWriteGuard {
            guard: Some(guard),
            name: self.name,
            notifier: self.notifier.as_ref(),
            touched: false,
        })
    }

    /// Mutate the value in place and return the closure's result
    pub fn update<R>(&self, f: impl FnOnce(&mut T) -> R) -> Result<R, StoreError> {
        let mut guard = self.write()?;
        Ok(f(&mut *guard))
    }

    /// Swap in a new value, returning the previous one
    pub fn replace(&self, value: T) -> Result<T, StoreError> {
        self.update(|current| std::mem::replace(current, value))
    }

    /// Whether both handles point at the same underlying value
    pub fn same_slot(&self, other: &Slot<T>) -> bool {
        Arc::ptr_eq(&self.value, &other.value)
    }

    /// Subscribe to change notifications
    ///
    /// Returns None when notifications are disabled for this store.
    /// Slow subscribers lose the oldest notifications once the channel
    /// buffer fills.
    pub fn subscribe(&self) -> Option<broadcast::Receiver<SlotChange>> {
        self.notifier.as_ref().map(|tx| tx.subscribe())
    }

    /// Stream of change notifications for this store
    ///
    /// Yields nothing when notifications are disabled. Lagged notifications
    /// are skipped; the stream ends once every handle to the store is gone.
    pub fn changes(&self) -> BoxStream<'static, SlotChange> {
        match self.subscribe() {
            Some(rx) => BroadcastStream::new(rx)
                .filter_map(|item| async move { item.ok() })
                .boxed(),
            None => futures::stream::empty().boxed(),
        }
    }
}

impl<T: Clone> Slot<T> {
    /// Clone the current value out of the slot
    pub fn get(&self) -> Result<T, StoreError> {
        Ok(self.read()?.clone())
    }
}

/// Write guard that notifies subscribers after the lock is released
pub struct SlotWriteGuard<'a, T> {
    guard: Option<RwLockWriteGuard<'a, T>>,
    name: SlotName,
    notifier: Option<&'a broadcast::Sender<SlotChange>>,
    touched: bool,
}

impl<T> Deref for SlotWriteGuard<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        // Only None inside Drop
        match self.guard.as_ref() {
            Some(guard) => &**guard,
            None => unreachable!("slot guard used after release"),
        }
    }
}

impl<T> DerefMut for SlotWriteGuard<'_, T> {
    fn deref_mut(&mut self) -> &mut T {
        self.touched = true;
        match self.guard.as_mut() {
            Some(guard) => &mut **guard,
            None => unreachable!("slot guard used after release"),
        }
    }
}

impl<T> Drop for SlotWriteGuard<'_, T> {
    fn drop(&mut self) {
        // Release the lock before waking subscribers so they can read
        drop(self.guard.take());

        if !self.touched || std::thread::panicking() {
            return;
        }

        if let Some(tx) = self.notifier {
            // No receivers is fine
            let delivered = tx.send(SlotChange { slot: self.name }).unwrap_or(0);
            tracing::debug!(slot = %self.name, delivered, "slot changed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn observed_slot() -> (Slot<Vec<u32>>, broadcast::Receiver<SlotChange>) {
        let (tx, rx) = broadcast::channel(8);
        (Slot::new(SlotName::Users, vec![1, 2, 3], Some(tx)), rx)
    }

    #[test]
    fn test_clones_share_value() {
        let slot = Slot::new(SlotName::Users, vec![1u32], None);
        let other = slot.clone();

        other.update(|v| v.push(2)).unwrap();

        assert_eq!(*slot.read().unwrap(), vec![1, 2]);
        assert!(slot.same_slot(&other));
    }

    #[test]
    fn test_separate_slots_are_not_same() {
        let a = Slot::new(SlotName::Users, 1u32, None);
        let b = Slot::new(SlotName::Users, 1u32, None);
        assert!(!a.same_slot(&b));
    }

    #[test]
    fn test_replace_returns_previous() {
        let slot = Slot::new(SlotName::ResponseBody, "old".to_string(), None);
        let previous = slot.replace("new".to_string()).unwrap();
        assert_eq!(previous, "old");
        assert_eq!(slot.get().unwrap(), "new");
    }

    #[test]
    fn test_write_publishes_change() {
        let (slot, mut rx) = observed_slot();

        slot.write().unwrap()[0] = 10;

        assert_eq!(
            rx.try_recv().unwrap(),
            SlotChange {
                slot: SlotName::Users
            }
        );
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_reads_do_not_publish() {
        let (slot, mut rx) = observed_slot();

        let _ = slot.get().unwrap();
        {
            let guard = slot.write().unwrap();
            assert_eq!(guard.len(), 3);
        }

        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_lock_released_before_notification() {
        let (slot, mut rx) = observed_slot();

        slot.update(|v| v.clear()).unwrap();

        assert!(rx.try_recv().is_ok());
        // Lock must already be free
        assert!(slot.read().unwrap().is_empty());
    }

    #[test]
    fn test_subscribe_disabled() {
        let slot = Slot::new(SlotName::Users, 0u8, None);
        assert!(slot.subscribe().is_none());
        slot.update(|v| *v = 1).unwrap();
        assert_eq!(slot.get().unwrap(), 1);
    }

    #[test]
    fn test_poisoned_lock_is_reported() {
        let slot = Slot::new(SlotName::Users, vec![1u32], None);
        let writer = slot.clone();

        let result = std::thread::spawn(move || {
            let _guard = writer.write().unwrap();
            panic!("writer failed mid-update");
        })
        .join();
        assert!(result.is_err());

        assert!(matches!(
            slot.read(),
            Err(StoreError::LockPoisoned {
                slot: SlotName::Users
            })
        ));
        assert!(slot.write().is_err());
    }

    #[test]
    fn test_changes_stream_yields_notifications() {
        use futures::StreamExt;

        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .expect("failed to build test runtime");

        let (slot, _rx) = observed_slot();
        let mut changes = slot.changes();

        slot.update(|v| v.push(4)).unwrap();

        let change = runtime.block_on(changes.next());
        assert_eq!(
            change,
            Some(SlotChange {
                slot: SlotName::Users
            })
        );
    }

    #[test]
    fn test_changes_stream_empty_when_disabled() {
        use futures::StreamExt;

        let runtime = tokio::runtime::Builder::new_current_thread()
            .build()
            .expect("failed to build test runtime");

        let slot = Slot::new(SlotName::Users, 0u8, None);
        let mut changes = slot.changes();
        assert_eq!(runtime.block_on(changes.next()), None);
    }

    #[test]
    fn test_changes_stream_skips_lagged_notifications() {
        use futures::StreamExt;

        let runtime = tokio::runtime::Builder::new_current_thread()
            .build()
            .expect("failed to build test runtime");

        // Two slots on one channel that only buffers a single notification
        let (tx, _) = broadcast::channel(1);
        let users = Slot::new(SlotName::Users, vec![1u32], Some(tx.clone()));
        let claim = Slot::new(SlotName::ResponseBody, 0u8, Some(tx));
        let changes = users.changes();

        users.update(|v| v.push(2)).unwrap();
        claim.update(|v| *v = 1).unwrap();
        assert_eq!(users.name(), SlotName::Users);

        // Closing the channel ends the stream after the buffered item
        drop(users);
        drop(claim);

        let received: Vec<SlotChange> = runtime.block_on(changes.collect());
        assert_eq!(
            received,
            vec![SlotChange {
                slot: SlotName::ResponseBody
            }]
        );
    }

    #[test]
    fn test_slot_name_serialization() {
        assert_eq!(
            serde_json::to_string(&SlotName::ResponseBody).unwrap(),
            "\"responseBody\""
        );
        assert_eq!(SlotName::Users.to_string(), "users");
    }
}
