use std::collections::HashMap;
use std::hash::Hash;
use std::sync::Arc;

use jobdesk_logging::jobdesk_debug;

use crate::SourceError;

pub type RequestId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheStatus {
    Idle,
    Pending,
    Success,
    Error,
}

/// One fetch outcome for a key.
///
/// Entries are never edited: each transition installs a new entry that
/// supersedes the previous one for the same key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheEntry<K, V> {
    pub key: K,
    pub status: CacheStatus,
    pub data: Option<V>,
    pub error: Option<SourceError>,
    /// The request that produced this entry. Resolutions carrying any other
    /// id are stale.
    pub request_id: RequestId,
    /// Logical clock value at which the entry was installed.
    pub timestamp: u64,
}

/// Outcome of [`FetchCache::request`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Requested<K, V> {
    /// A pending entry was installed; the caller must issue exactly one fetch
    /// tagged with this id.
    Issue(RequestId),
    /// A fetch for this key is already in flight.
    InFlight(Arc<CacheEntry<K, V>>),
    /// Stale-but-valid data, returned without revalidation.
    Hit(Arc<CacheEntry<K, V>>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Applied,
    /// A newer request owns the key; the response was dropped.
    Stale,
}

/// Single-writer map of key to its live fetch entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchCache<K: Eq + Hash, V> {
    entries: HashMap<K, Arc<CacheEntry<K, V>>>,
    clock: u64,
}

impl<K, V> FetchCache<K, V>
where
    K: Clone + Eq + Hash + std::fmt::Debug,
{
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            clock: 0,
        }
    }

    pub fn get(&self, key: &K) -> Option<Arc<CacheEntry<K, V>>> {
        self.entries.get(key).cloned()
    }

    /// Borrowing lookup for read models.
    pub fn peek(&self, key: &K) -> Option<&CacheEntry<K, V>> {
        self.entries.get(key).map(Arc::as_ref)
    }

    pub fn status(&self, key: &K) -> CacheStatus {
        self.entries
            .get(key)
            .map_or(CacheStatus::Idle, |entry| entry.status)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Deduplicating request: pending and successful entries are returned as
    /// they are; a missing or failed entry is replaced by a fresh pending one.
    pub fn request(&mut self, key: K) -> Requested<K, V> {
        if let Some(entry) = self.entries.get(&key) {
            match entry.status {
                CacheStatus::Pending => return Requested::InFlight(entry.clone()),
                CacheStatus::Success => return Requested::Hit(entry.clone()),
                CacheStatus::Idle | CacheStatus::Error => {}
            }
        }

        let request_id = self.tick();
        jobdesk_debug!("cache issue request_id={} key={:?}", request_id, key);
        let entry = CacheEntry {
            key: key.clone(),
            status: CacheStatus::Pending,
            data: None,
            error: None,
            request_id,
            timestamp: request_id,
        };
        self.entries.insert(key, Arc::new(entry));
        Requested::Issue(request_id)
    }

    /// Apply a fetch result, unless a newer request has taken over the key.
    pub fn resolve(
        &mut self,
        key: &K,
        request_id: RequestId,
        result: Result<V, SourceError>,
    ) -> Resolution {
        let live = match self.entries.get(key) {
            Some(entry) => entry.status == CacheStatus::Pending && entry.request_id == request_id,
            None => false,
        };
        if !live {
            jobdesk_debug!(
                "cache dropped stale response request_id={} key={:?}",
                request_id,
                key
            );
            return Resolution::Stale;
        }

        let timestamp = self.tick();
        let (status, data, error) = match result {
            Ok(value) => (CacheStatus::Success, Some(value), None),
            Err(err) => (CacheStatus::Error, None, Some(err)),
        };
        let entry = CacheEntry {
            key: key.clone(),
            status,
            data,
            error,
            request_id,
            timestamp,
        };
        self.entries.insert(key.clone(), Arc::new(entry));
        Resolution::Applied
    }

    /// Install a locally known successful value without any fetch. Existing
    /// pending or successful entries win.
    pub fn seed(&mut self, key: K, value: V) -> Arc<CacheEntry<K, V>> {
        match self.request(key.clone()) {
            Requested::Hit(entry) | Requested::InFlight(entry) => entry,
            Requested::Issue(request_id) => {
                self.resolve(&key, request_id, Ok(value));
                self.entries[&key].clone()
            }
        }
    }

    fn tick(&mut self) -> u64 {
        self.clock += 1;
        self.clock
    }
}

impl<K, V> Default for FetchCache<K, V>
where
    K: Clone + Eq + Hash + std::fmt::Debug,
{
    fn default() -> Self {
        Self::new()
    }
}
