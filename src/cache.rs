use rustc_hash::FxHashMap;

pub const DEFAULT_CAPACITY: usize = 131072;

/// Memo key: iterations still to apply to a stone, and the stone itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Key {
    pub depth: u8,
    pub stone: u64,
}

impl Key {
    pub fn new(depth: u8, stone: u64) -> Self {
        Self { depth, stone }
    }
}

/// Fixed-capacity memo table. Once `capacity` entries are stored, further
/// inserts are dropped; nothing is ever evicted or overwritten.
#[derive(Debug)]
pub struct MemoCache {
    map: FxHashMap<Key, u64>,
    capacity: usize,
}

impl MemoCache {
    pub fn with_capacity(capacity: usize) -> Self {
        let mut map = FxHashMap::default();
        map.reserve(capacity);
        Self { map, capacity }
    }

    #[inline]
    pub fn lookup(&self, key: Key) -> Option<u64> {
        self.map.get(&key).copied()
    }

    /// Returns `false` if the entry was not stored, either because the key
    /// is already present or because the cache is full.
    #[inline]
    pub fn insert(&mut self, key: Key, count: u64) -> bool {
        if self.is_full() || self.map.contains_key(&key) {
            return false;
        }
        self.map.insert(key, count);
        true
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_full(&self) -> bool {
        self.map.len() >= self.capacity
    }

    pub fn clear(&mut self) {
        self.map.clear();
    }
}

impl Default for MemoCache {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

#[test]
fn test_lookup_missing() {
    let cache = MemoCache::with_capacity(4);
    assert_eq!(cache.lookup(Key::new(3, 17)), None);
    assert!(cache.is_empty());
}

#[test]
fn test_key_fields_are_distinct() {
    // (1, 2) and (2, 1) must never alias
    let mut cache = MemoCache::with_capacity(4);
    assert!(cache.insert(Key::new(1, 2), 10));
    assert_eq!(cache.lookup(Key::new(2, 1)), None);
    assert_eq!(cache.lookup(Key::new(1, 2)), Some(10));

    // stones above 2^56 would collide under a packed key
    let big = (1u64 << 56) | 5;
    assert!(cache.insert(Key::new(0, big), 1));
    assert_eq!(cache.lookup(Key::new(1, 5)), None);
}

#[test]
fn test_first_write_wins() {
    let mut cache = MemoCache::with_capacity(4);
    assert!(cache.insert(Key::new(5, 0), 7));
    assert!(!cache.insert(Key::new(5, 0), 99));
    assert_eq!(cache.lookup(Key::new(5, 0)), Some(7));
    assert_eq!(cache.len(), 1);
}

#[test]
fn test_drop_when_full() {
    let mut cache = MemoCache::with_capacity(2);
    assert!(cache.insert(Key::new(1, 1), 1));
    assert!(cache.insert(Key::new(1, 2), 1));
    assert!(cache.is_full());

    assert!(!cache.insert(Key::new(1, 3), 1));
    assert_eq!(cache.lookup(Key::new(1, 3)), None);
    assert_eq!(cache.len(), 2);

    cache.clear();
    assert!(cache.is_empty());
    assert!(cache.insert(Key::new(1, 3), 1));
}

#[test]
fn test_zero_capacity_stores_nothing() {
    let mut cache = MemoCache::with_capacity(0);
    assert!(cache.is_full());
    assert!(!cache.insert(Key::new(1, 1), 1));
    assert_eq!(cache.capacity(), 0);
}
