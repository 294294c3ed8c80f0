use std::hash::Hash;

use crate::EntityId;

/// A key type a store can issue from a monotonically increasing sequence.
pub trait SequentialKey: Copy + Ord + Hash + Send + Sync + std::fmt::Debug + 'static {
    /// Builds the key for the given sequence number (the first issued is 1).
    fn from_sequence(sequence: u64) -> Self;
}

impl SequentialKey for EntityId {
    // Past 2^63 issued ids every key saturates to `i64::MAX`, so keys stop
    // being distinct there. Not reachable at one id per call.
    fn from_sequence(sequence: u64) -> Self {
        EntityId::new(i64::try_from(sequence).unwrap_or(i64::MAX))
    }
}

/// A value that carries its own identity.
///
/// `save` upserts by this key, so two values with the same key are the same
/// entity as far as the store is concerned.
pub trait Entity: Clone + Send + Sync + 'static {
    /// The identity type.
    type Key: SequentialKey;

    /// Returns the entity's identity.
    fn key(&self) -> Self::Key;
}

/// Core trait for keyed entity storage.
///
/// Implementations must be safe to share across threads without any
/// locking on the caller's side. None of the operations fail: a missing
/// entry is reported as `None` or `false`.
pub trait EntityStore<K, V>: Send + Sync
where
    K: SequentialKey,
    V: Entity<Key = K>,
{
    /// Returns a key no earlier call on this store has returned.
    ///
    /// Concurrent callers each receive a distinct key, and keys are strictly
    /// increasing in the order the calls are linearized.
    fn next_id(&self) -> K;

    /// Returns a copy of every stored entity, ordered by key.
    ///
    /// Later writes to the store do not affect the returned vector.
    fn find_all(&self) -> Vec<V>;

    /// Returns a copy of the entity with the given key.
    fn find_by_id(&self, key: K) -> Option<V>;

    /// Inserts the entity, or overwrites the entry with the same key.
    ///
    /// Last write wins; there is no version check.
    fn save(&self, entity: V);

    /// Removes the entity with the given key. Returns true if one existed.
    fn delete_by_id(&self, key: K) -> bool;

    /// Applies `f` to the stored entity in a single atomic step and returns
    /// a copy of the result, or `None` if the key is unknown.
    fn modify<F>(&self, key: K, f: F) -> Option<V>
    where
        F: FnOnce(&mut V);

    /// Returns the number of stored entities.
    fn count(&self) -> usize;

    /// Removes every entity and restarts the key sequence.
    fn clear(&self);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entity_id_sequence_starts_at_first() {
        assert_eq!(EntityId::from_sequence(1), EntityId::FIRST);
        assert_eq!(EntityId::from_sequence(9).as_i64(), 9);
    }

    #[test]
    fn entity_id_sequence_saturates() {
        assert_eq!(EntityId::from_sequence(u64::MAX).as_i64(), i64::MAX);
    }
}
