//! Parsed-cell cache keyed by the packed 10-digit block.
//! Thread-safe via Mutex; values are pure functions of their key, so racing
//! inserts of the same block are harmless.

use std::num::NonZeroUsize;
use std::sync::{Mutex, PoisonError};

use lru::LruCache;
use serde::{Deserialize, Serialize};
use tracing::trace;

use super::cell_data::{CellData, PackedCell};

pub const DEFAULT_CELL_CACHE_CAPACITY: usize = 4096;

/// Configuration for the cell cache.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CellCacheConfig {
    /// Maximum number of distinct blocks kept. Least recently used is evicted.
    pub capacity: usize,
}

impl Default for CellCacheConfig {
    fn default() -> Self { Self { capacity: DEFAULT_CELL_CACHE_CAPACITY } }
}

impl CellCacheConfig {
    /// Read `ISOGRID_CELL_CACHE_CAPACITY` from the process environment.
    pub fn from_env() -> Self { Self::from_lookup(|name| std::env::var(name).ok()) }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let capacity = lookup("ISOGRID_CELL_CACHE_CAPACITY")
            .and_then(|s| s.trim().parse::<usize>().ok())
            .unwrap_or(DEFAULT_CELL_CACHE_CAPACITY);
        Self { capacity }
    }
}

/// A thread-safe LRU cache of unpacked cells.
pub struct CellDataCache {
    cfg: CellCacheConfig,
    inner: Mutex<LruCache<PackedCell, CellData>>,
}

impl CellDataCache {
    pub fn with_capacity(capacity: usize) -> Self {
        let cap_nz = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self { cfg: CellCacheConfig { capacity: cap_nz.get() }, inner: Mutex::new(LruCache::new(cap_nz)) }
    }

    pub fn new(cfg: CellCacheConfig) -> Self { Self::with_capacity(cfg.capacity) }

    /// Cached cell for `block`, unpacking and inserting it on a miss.
    pub fn get_or_unpack(&self, block: &PackedCell) -> CellData {
        if let Some(hit) = self.lookup(block) {
            trace!(block = ?block, "cell_cache_hit");
            return hit;
        }
        // Miss: unpack outside the lock
        let cell = CellData::unpack(block);
        let mut guard = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(existing) = guard.get(block) {
            return *existing;
        }
        trace!(block = ?block, "cell_cache_miss");
        guard.put(*block, cell);
        cell
    }

    fn lookup(&self, block: &PackedCell) -> Option<CellData> {
        let mut guard = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        guard.get(block).copied()
    }

    /// Number of distinct blocks cached.
    pub fn len(&self) -> usize { self.inner.lock().unwrap_or_else(PoisonError::into_inner).len() }

    pub fn is_empty(&self) -> bool { self.len() == 0 }

    pub fn capacity(&self) -> usize { self.cfg.capacity }

    pub fn clear(&self) { self.inner.lock().unwrap_or_else(PoisonError::into_inner).clear() }
}

impl Default for CellDataCache {
    fn default() -> Self { Self::new(CellCacheConfig::default()) }
}

impl std::fmt::Debug for CellDataCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CellDataCache").field("capacity", &self.cfg.capacity).field("len", &self.len()).finish()
    }
}

// The cache is shared between serializers on different threads.
#[allow(dead_code)]
fn _assert_send_sync() {
    fn assert_bound<T: Send + Sync>() {}
    assert_bound::<CellDataCache>();
}
