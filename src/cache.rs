//! Generic TTL (time-to-live) cache.
//!
//! The spreadsheet is re-fetched on every interaction unless a recent copy
//! exists; this cache is the memoization layer in front of that fetch,
//! keyed by export URL. No eviction beyond expiry — the working set is a
//! handful of sheet tabs. There is no concurrent writer, so no locking.

use std::collections::HashMap;
use std::hash::Hash;
use std::time::{Duration, Instant};

/// TTL matching the original deployment's 5-minute cache window.
pub const DEFAULT_TTL: Duration = Duration::from_secs(300);

struct Entry<V> {
    value: V,
    expires_at: Instant,
}

/// A map whose entries expire after a fixed time-to-live.
///
/// Expired entries read as absent; they are dropped lazily on access or via
/// [`TtlCache::purge_expired`]. A TTL of zero disables caching entirely.
pub struct TtlCache<K: Hash + Eq, V> {
    entries: HashMap<K, Entry<V>>,
    ttl: Duration,
}

impl<K: Hash + Eq, V> TtlCache<K, V> {
    /// Create a cache with the given time-to-live.
    #[must_use]
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            ttl,
        }
    }

    /// Create a cache with [`DEFAULT_TTL`].
    #[must_use]
    pub fn with_default_ttl() -> Self {
        Self::new(DEFAULT_TTL)
    }

    /// Look up a live value by key.
    pub fn get(&self, key: &K) -> Option<&V> {
        self.get_at(key, Instant::now())
    }

    /// Insert a value, replacing any previous entry and restarting its TTL.
    pub fn insert(&mut self, key: K, value: V) {
        self.insert_at(key, value, Instant::now());
    }

    /// Manual clear action: drop every entry regardless of age.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Drop expired entries eagerly.
    pub fn purge_expired(&mut self) {
        self.purge_expired_at(Instant::now());
    }

    // Clock-explicit variants used by tests.

    pub(crate) fn get_at(&self, key: &K, now: Instant) -> Option<&V> {
        let entry = self.entries.get(key)?;
        (now < entry.expires_at).then_some(&entry.value)
    }

    pub(crate) fn insert_at(&mut self, key: K, value: V, now: Instant) {
        if self.ttl.is_zero() {
            return;
        }
        self.entries.insert(
            key,
            Entry {
                value,
                expires_at: now + self.ttl,
            },
        );
    }

    pub(crate) fn purge_expired_at(&mut self, now: Instant) {
        self.entries.retain(|_, e| now < e.expires_at);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn live_entries_are_returned() {
        let mut cache: TtlCache<&str, u32> = TtlCache::with_default_ttl();
        let t0 = Instant::now();
        cache.insert_at("url", 7, t0);
        assert_eq!(cache.get_at(&"url", t0 + Duration::from_secs(299)), Some(&7));
    }

    #[test]
    fn entries_expire_after_ttl() {
        let mut cache: TtlCache<&str, u32> = TtlCache::new(Duration::from_secs(300));
        let t0 = Instant::now();
        cache.insert_at("url", 7, t0);
        assert_eq!(cache.get_at(&"url", t0 + Duration::from_secs(300)), None);
    }

    #[test]
    fn reinsert_restarts_the_clock() {
        let mut cache: TtlCache<&str, u32> = TtlCache::new(Duration::from_secs(300));
        let t0 = Instant::now();
        cache.insert_at("url", 1, t0);
        cache.insert_at("url", 2, t0 + Duration::from_secs(200));
        let t_late = t0 + Duration::from_secs(400);
        assert_eq!(cache.get_at(&"url", t_late), Some(&2));
    }

    #[test]
    fn clear_drops_everything() {
        let mut cache: TtlCache<&str, u32> = TtlCache::with_default_ttl();
        cache.insert("a", 1);
        cache.insert("b", 2);
        cache.clear();
        assert_eq!(cache.get(&"a"), None);
        assert_eq!(cache.get(&"b"), None);
    }

    #[test]
    fn purge_drops_only_expired() {
        let mut cache: TtlCache<&str, u32> = TtlCache::new(Duration::from_secs(300));
        let t0 = Instant::now();
        cache.insert_at("old", 1, t0);
        cache.insert_at("new", 2, t0 + Duration::from_secs(200));
        cache.purge_expired_at(t0 + Duration::from_secs(350));
        assert_eq!(cache.get_at(&"old", t0 + Duration::from_secs(350)), None);
        assert_eq!(cache.get_at(&"new", t0 + Duration::from_secs(350)), Some(&2));
    }

    #[test]
    fn zero_ttl_disables_caching() {
        let mut cache: TtlCache<&str, u32> = TtlCache::new(Duration::ZERO);
        cache.insert("url", 7);
        assert_eq!(cache.get(&"url"), None);
    }
}
