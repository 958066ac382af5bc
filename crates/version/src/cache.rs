use comparable_version::VersionKey;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

/// Parsed keys by raw string.
///
/// Parsing happens under the lock, so each distinct string is parsed at most
/// once no matter how many threads ask for it.
#[derive(Debug, Default)]
pub struct VersionCache {
    keys: Mutex<HashMap<String, Arc<VersionKey>>>,
}

impl VersionCache {

    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, raw: &str) -> Arc<VersionKey> {
        let mut keys = self.keys.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(key) = keys.get(raw) {
            return Arc::clone(key);
        }
        let key = Arc::new(VersionKey::parse(raw));
        tracing::trace!(version = raw, canonical = %key, "cached new version key");
        keys.insert(raw.to_string(), Arc::clone(&key));
        key
    }

    pub fn len(&self) -> usize {
        self.keys.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
