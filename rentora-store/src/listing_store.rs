use std::sync::{Arc, Mutex, PoisonError};

use rentora_catalog::{static_listings, Listing, NewListing};
use rentora_shared::models::events::ListingsUpdated;
use serde::Serialize;
use tracing::{error, info, warn};

use crate::backend::KeyValueBackend;
use crate::error::{StoreError, StoreResult};
use crate::events::{ChangeNotifier, Subscription};

pub const DEFAULT_STORAGE_KEY: &str = "custom_listings";

/// First identifier handed to a user-created listing.
pub const USER_ID_FLOOR: u32 = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ListingOrigin {
    Static,
    UserCreated,
}

/// Merged view over the bundled catalog and the user-created listings kept
/// in a key-value backend. The user subset is append-only and always
/// rewritten as a whole.
pub struct ListingStore {
    catalog: Vec<Listing>,
    id_seed: u32,
    backend: Arc<dyn KeyValueBackend>,
    key: String,
    notifier: ChangeNotifier,
    write_lock: Mutex<()>,
}

impl ListingStore {
    pub fn new(backend: Arc<dyn KeyValueBackend>) -> Self {
        Self::with_catalog(backend, static_listings())
    }

    pub fn with_catalog(backend: Arc<dyn KeyValueBackend>, catalog: Vec<Listing>) -> Self {
        // User ids start past both the floor and the largest static id, so
        // the two ranges stay disjoint even if the catalog grows.
        let static_max = catalog.iter().map(|l| l.id).max().unwrap_or(0);
        let id_seed = static_max.max(USER_ID_FLOOR - 1);

        Self {
            catalog,
            id_seed,
            backend,
            key: DEFAULT_STORAGE_KEY.to_string(),
            notifier: ChangeNotifier::new(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    pub fn storage_key(&self) -> &str {
        &self.key
    }

    pub fn static_listings(&self) -> &[Listing] {
        &self.catalog
    }

    /// Static catalog followed by the user-created listings, each in its own
    /// order. Unreadable storage degrades to the static catalog alone.
    pub fn all_listings(&self) -> Vec<Listing> {
        let mut all = self.catalog.clone();
        match self.read_user_listings() {
            Ok(user) => all.extend(user),
            Err(e) => {
                warn!(key = %self.key, error = %e, "Failed to load listings from storage, serving static catalog");
            }
        }
        all
    }

    /// The user-created subset, in creation order. Empty if storage is unreadable.
    pub fn user_listings(&self) -> Vec<Listing> {
        self.read_user_listings().unwrap_or_else(|e| {
            warn!(key = %self.key, error = %e, "Failed to load user listings from storage");
            Vec::new()
        })
    }

    pub fn listing(&self, id: u32) -> Option<Listing> {
        self.all_listings().into_iter().find(|l| l.id == id)
    }

    pub fn origin_of(&self, id: u32) -> Option<ListingOrigin> {
        if self.catalog.iter().any(|l| l.id == id) {
            return Some(ListingOrigin::Static);
        }
        self.user_listings()
            .iter()
            .any(|l| l.id == id)
            .then_some(ListingOrigin::UserCreated)
    }

    /// Append a listing with the next free identifier, persist the whole user
    /// subset and notify observers. Nothing is notified if the write fails.
    pub fn add_listing(&self, draft: NewListing) -> StoreResult<Listing> {
        draft.validate()?;

        let listing = {
            let _guard = self.write_lock.lock().unwrap_or_else(PoisonError::into_inner);

            let mut user = self.read_user_listings().map_err(|e| {
                error!(key = %self.key, error = %e, "Refusing to overwrite unreadable listings");
                e
            })?;
            let id = self.next_id(&user)?;
            let listing = draft.into_listing(id)?;
            user.push(listing.clone());

            let raw = serde_json::to_string(&user).map_err(StoreError::Serialize)?;
            self.backend.set(&self.key, &raw).map_err(|e| {
                error!(key = %self.key, error = %e, "Failed to save listing");
                StoreError::from(e)
            })?;
            listing
        };

        info!(id = listing.id, title = %listing.title, "Listing added");
        self.notifier.publish(&ListingsUpdated);
        Ok(listing)
    }

    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&ListingsUpdated) + Send + Sync + 'static,
    {
        self.notifier.subscribe(callback)
    }

    pub fn notifier(&self) -> &ChangeNotifier {
        &self.notifier
    }

    fn next_id(&self, user: &[Listing]) -> StoreResult<u32> {
        let last = user.last().map_or(self.id_seed, |l| l.id.max(self.id_seed));
        last.checked_add(1).ok_or(StoreError::IdSpaceExhausted)
    }

    fn read_user_listings(&self) -> StoreResult<Vec<Listing>> {
        match self.backend.get(&self.key)? {
            Some(raw) if !raw.trim().is_empty() => {
                serde_json::from_str(&raw).map_err(|source| StoreError::Corrupt {
                    key: self.key.clone(),
                    source,
                })
            }
            _ => Ok(Vec::new()),
        }
    }
}
