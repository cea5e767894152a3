use crate::*;
use std::hash::Hash;

/// Maps keys to shared values without keeping the values alive.
///
/// Entries whose value has been dropped everywhere else are treated as missing and
/// are swept the next time a value is stored.
pub struct InternCache<K, V> {
    entries: HashMap<K, Weak<V>>,
}

impl<K: Hash + Eq, V> InternCache<K, V> {
    pub fn new() -> InternCache<K, V> {
        InternCache {
            entries: HashMap::new(),
        }
    }

    pub fn get(&self, k: &K) -> Option<Arc<V>> {
        self.entries.get(k).and_then(Weak::upgrade)
    }

    pub fn set(&mut self, k: K, v: &Arc<V>) {
        self.entries.retain(|_, entry| entry.strong_count() > 0);
        self.entries.insert(k, Arc::downgrade(v));
    }

    pub fn len(&self) -> usize {
        self.entries
            .values()
            .filter(|entry| entry.strong_count() > 0)
            .count()
    }
}

#[test]
fn intern_cache() {
    let mut cache = InternCache::new();
    let twelve = Arc::new(String::from("twelve"));

    cache.set(12, &twelve);

    assert!(Arc::ptr_eq(&cache.get(&12).unwrap(), &twelve));
    assert_eq!(cache.len(), 1);

    drop(twelve);

    assert!(cache.get(&12).is_none());
    assert_eq!(cache.len(), 0);
}
