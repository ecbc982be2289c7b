use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, PoisonError, Weak};

use rentora_shared::models::events::ListingsUpdated;
use tracing::debug;

type Callback = Arc<dyn Fn(&ListingsUpdated) + Send + Sync>;

#[derive(Default)]
struct Registry {
    next_id: u64,
    callbacks: BTreeMap<u64, Callback>,
}

/// Fan-out of change notifications to registered observers. Delivery is
/// synchronous and follows subscription order.
#[derive(Clone, Default)]
pub struct ChangeNotifier {
    registry: Arc<Mutex<Registry>>,
}

impl ChangeNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&ListingsUpdated) + Send + Sync + 'static,
    {
        let mut registry = self.registry.lock().unwrap_or_else(PoisonError::into_inner);
        let id = registry.next_id;
        registry.next_id += 1;
        registry.callbacks.insert(id, Arc::new(callback));

        Subscription {
            id,
            registry: Arc::downgrade(&self.registry),
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.registry
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .callbacks
            .len()
    }

    /// Callbacks run after the registry lock is released, so they may
    /// subscribe, unsubscribe or read the store themselves.
    pub fn publish(&self, event: &ListingsUpdated) {
        let callbacks: Vec<Callback> = self
            .registry
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .callbacks
            .values()
            .cloned()
            .collect();

        debug!("Notifying {} listing observers", callbacks.len());
        for callback in callbacks {
            callback(event);
        }
    }
}

/// Detach handle returned by `subscribe`. Dropping it unsubscribes.
#[must_use = "dropping a Subscription detaches the observer immediately"]
pub struct Subscription {
    id: u64,
    registry: Weak<Mutex<Registry>>,
}

impl Subscription {
    pub fn unsubscribe(self) {
        // Drop does the work
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            // The callback is dropped outside the lock; it may own other subscriptions.
            let removed = registry
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .callbacks
                .remove(&self.id);
            drop(removed);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_publish_reaches_all_subscribers_in_order() {
        let notifier = ChangeNotifier::new();
        let seen = Arc::new(Mutex::new(Vec::new()));

        let first = {
            let seen = seen.clone();
            notifier.subscribe(move |_| seen.lock().unwrap().push("first"))
        };
        let second = {
            let seen = seen.clone();
            notifier.subscribe(move |_| seen.lock().unwrap().push("second"))
        };

        notifier.publish(&ListingsUpdated);
        assert_eq!(*seen.lock().unwrap(), vec!["first", "second"]);

        drop(first);
        drop(second);
    }

    #[test]
    fn test_unsubscribe_detaches() {
        let notifier = ChangeNotifier::new();
        let hits = Arc::new(AtomicUsize::new(0));

        let sub = {
            let hits = hits.clone();
            notifier.subscribe(move |_| {
                hits.fetch_add(1, Ordering::SeqCst);
            })
        };
        notifier.publish(&ListingsUpdated);
        sub.unsubscribe();
        notifier.publish(&ListingsUpdated);

        assert_eq!(hits.load(Ordering::SeqCst), 1);
        assert_eq!(notifier.subscriber_count(), 0);
    }

    #[test]
    fn test_callback_may_subscribe_during_publish() {
        let notifier = ChangeNotifier::new();
        let inner = notifier.clone();
        let nested = Arc::new(Mutex::new(Vec::new()));

        let _sub = {
            let nested = nested.clone();
            notifier.subscribe(move |_| {
                let handle = inner.subscribe(|_| {});
                nested.lock().unwrap().push(handle);
            })
        };

        notifier.publish(&ListingsUpdated);
        assert_eq!(notifier.subscriber_count(), 2);
    }

    #[test]
    fn test_subscription_outliving_notifier_is_harmless() {
        let notifier = ChangeNotifier::new();
        let sub = notifier.subscribe(|_| {});
        drop(notifier);
        drop(sub);
    }
}
