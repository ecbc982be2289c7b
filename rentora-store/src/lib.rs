pub mod app_config;
pub mod backend;
pub mod error;
pub mod events;
pub mod listing_store;

pub use backend::{BackendError, FileBackend, KeyValueBackend, MemoryBackend};
pub use error::{StoreError, StoreResult};
pub use events::{ChangeNotifier, Subscription};
pub use listing_store::{ListingOrigin, ListingStore, DEFAULT_STORAGE_KEY, USER_ID_FLOOR};
