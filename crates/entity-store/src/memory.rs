use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::store::{Entity, EntityStore, SequentialKey};

const FIRST_SEQUENCE: u64 = 1;

struct Inner<K, V> {
    sequence: AtomicU64,
    entries: RwLock<BTreeMap<K, V>>,
}

/// In-memory entity store.
///
/// Keys come from an atomic counter; entries live in a map behind a single
/// reader-writer lock. Clones share the same underlying state.
pub struct InMemoryEntityStore<K, V> {
    inner: Arc<Inner<K, V>>,
}

impl<K, V> Clone for InMemoryEntityStore<K, V> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<K, V> Default for InMemoryEntityStore<K, V> {
    fn default() -> Self {
        Self {
            inner: Arc::new(Inner {
                sequence: AtomicU64::new(FIRST_SEQUENCE),
                entries: RwLock::new(BTreeMap::new()),
            }),
        }
    }
}

impl<K, V> InMemoryEntityStore<K, V> {
    /// Creates a new empty store whose first issued key is 1.
    pub fn new() -> Self {
        Self::default()
    }

    // Writers never leave the map half-updated, so a poisoned lock still
    // guards consistent data.
    fn read(&self) -> RwLockReadGuard<'_, BTreeMap<K, V>> {
        self.inner
            .entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, BTreeMap<K, V>> {
        self.inner
            .entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl<K, V> EntityStore<K, V> for InMemoryEntityStore<K, V>
where
    K: SequentialKey,
    V: Entity<Key = K>,
{
    fn next_id(&self) -> K {
        let sequence = self.inner.sequence.fetch_add(1, Ordering::SeqCst);
        K::from_sequence(sequence)
    }

    fn find_all(&self) -> Vec<V> {
        self.read().values().cloned().collect()
    }

    fn find_by_id(&self, key: K) -> Option<V> {
        self.read().get(&key).cloned()
    }

    fn save(&self, entity: V) {
        let key = entity.key();
        let replaced = self.write().insert(key, entity).is_some();
        tracing::trace!(?key, replaced, "entity saved");
    }

    fn delete_by_id(&self, key: K) -> bool {
        self.write().remove(&key).is_some()
    }

    fn modify<F>(&self, key: K, f: F) -> Option<V>
    where
        F: FnOnce(&mut V),
    {
        let mut entries = self.write();
        let entity = entries.get_mut(&key)?;
        f(entity);
        Some(entity.clone())
    }

    fn count(&self) -> usize {
        self.read().len()
    }

    fn clear(&self) {
        let mut entries = self.write();
        entries.clear();
        self.inner.sequence.store(FIRST_SEQUENCE, Ordering::SeqCst);
    }
}
