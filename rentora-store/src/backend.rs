use std::collections::HashMap;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

/// Persistence port for the listing store: a string key-value space scoped
/// to one user profile. A `set` either replaces the whole value or fails.
pub trait KeyValueBackend: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, BackendError>;

    fn set(&self, key: &str, value: &str) -> Result<(), BackendError>;
}

#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("Storage I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("Storage quota exceeded: {needed} bytes needed, {limit} allowed")]
    QuotaExceeded { needed: usize, limit: usize },

    #[error("Invalid storage key: {0}")]
    InvalidKey(String),
}

/// In-memory backend. An optional byte quota over all stored values mimics
/// the browser's storage limit.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    entries: Mutex<HashMap<String, String>>,
    quota_bytes: Option<usize>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_quota(quota_bytes: usize) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            quota_bytes: Some(quota_bytes),
        }
    }

    /// Seed a raw value, bypassing the quota.
    pub fn insert_raw(&self, key: &str, value: &str) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value.to_string());
    }
}

impl KeyValueBackend for MemoryBackend {
    fn get(&self, key: &str) -> Result<Option<String>, BackendError> {
        let entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), BackendError> {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);

        if let Some(limit) = self.quota_bytes {
            let others: usize = entries
                .iter()
                .filter(|(k, _)| k.as_str() != key)
                .map(|(k, v)| k.len() + v.len())
                .sum();
            let needed = others + key.len() + value.len();
            if needed > limit {
                return Err(BackendError::QuotaExceeded { needed, limit });
            }
        }

        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// One JSON file per key under `dir`. Each write lands in its own sibling
/// temp file first and is renamed into place, so concurrent writers never
/// share a temp file and the last rename wins.
#[derive(Debug, Clone)]
pub struct FileBackend {
    dir: PathBuf,
}

impl FileBackend {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, BackendError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(BackendError::InvalidKey(key.to_string()));
        }
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

impl KeyValueBackend for FileBackend {
    fn get(&self, key: &str) -> Result<Option<String>, BackendError> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), BackendError> {
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.dir)?;

        let tmp = self.dir.join(format!(
            ".{}.{}.{}.tmp",
            key,
            std::process::id(),
            uuid::Uuid::new_v4().simple()
        ));
        let written = fs::File::create(&tmp).and_then(|mut file| {
            file.write_all(value.as_bytes())?;
            file.sync_all()
        });
        if let Err(e) = written.and_then(|_| fs::rename(&tmp, &path)) {
            fs::remove_file(&tmp).ok();
            return Err(e.into());
        }
        Ok(())
    }
}
