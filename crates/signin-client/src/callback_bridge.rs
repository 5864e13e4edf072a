//! Single-slot, in-process channel for out-of-band callbacks.
//!
//! At most one subscriber is registered at a time. A publish reaches the
//! current subscriber or nobody; nothing is queued for later subscribers.
//! Registering replaces any previous subscriber.

use crate::OutOfBandCallback;

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use tokio::sync::mpsc;

struct Subscriber {
    id: u64,
    sender: mpsc::UnboundedSender<OutOfBandCallback>,
}

#[derive(Clone, Default)]
pub struct CallbackBridge {
    slot: Arc<Mutex<Option<Subscriber>>>,
    next_id: Arc<AtomicU64>,
}

impl CallbackBridge {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the active subscriber, replacing any existing one.
    pub fn register(&self) -> CallbackSubscription {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let (sender, receiver) = mpsc::unbounded_channel();

        let previous = self
            .slot
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .replace(Subscriber { id, sender });

        if previous.is_some() {
            log::debug!("Replaced existing callback subscriber");
        }

        CallbackSubscription {
            id,
            receiver,
            bridge: self.clone(),
        }
    }

    /// Drop the active subscriber. Idempotent.
    pub fn unregister(&self) {
        self.slot.lock().unwrap_or_else(|e| e.into_inner()).take();
    }

    pub fn has_subscriber(&self) -> bool {
        self.slot
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .is_some()
    }

    /// Deliver to the active subscriber. Returns false when the callback was
    /// lost because nobody was listening.
    pub fn publish(&self, callback: OutOfBandCallback) -> bool {
        log::debug!(
            "Publishing auth callback: code={}, id_token={}, error={:?}",
            !callback.code.is_empty(),
            callback.id_token.is_some(),
            callback.error
        );

        let mut slot = self.slot.lock().unwrap_or_else(|e| e.into_inner());

        let Some(subscriber) = slot.as_ref() else {
            log::warn!("Auth callback published with no subscriber; dropped");
            return false;
        };

        if subscriber.sender.send(callback).is_err() {
            log::warn!("Auth callback subscriber is gone; dropped");
            slot.take();
            return false;
        }

        true
    }

    fn unregister_if(&self, id: u64) {
        let mut slot = self.slot.lock().unwrap_or_else(|e| e.into_inner());
        if slot.as_ref().is_some_and(|subscriber| subscriber.id == id) {
            slot.take();
        }
    }
}

/// Receiving end of a registration. Dropping it unregisters, unless a newer
/// subscriber has taken the slot since.
pub struct CallbackSubscription {
    id: u64,
    receiver: mpsc::UnboundedReceiver<OutOfBandCallback>,
    bridge: CallbackBridge,
}

impl CallbackSubscription {
    /// Wait for the next callback. None once this subscription has been
    /// replaced or unregistered and nothing is left to read.
    pub async fn recv(&mut self) -> Option<OutOfBandCallback> {
        self.receiver.recv().await
    }

    /// Non-blocking receive
    pub fn try_recv(&mut self) -> Option<OutOfBandCallback> {
        self.receiver.try_recv().ok()
    }

    pub fn unregister(self) {
        // Drop does the work.
    }
}

impl Drop for CallbackSubscription {
    fn drop(&mut self) {
        self.bridge.unregister_if(self.id);
    }
}
