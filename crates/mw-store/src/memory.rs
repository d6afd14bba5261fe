use std::collections::BTreeMap;

use crate::kv::{Kv, KvError};

/// Ordered in-memory substrate. Used by the CLI driver and the test suites;
/// hosts with a real substrate implement [`Kv`] themselves.
#[derive(Debug, Clone, Default)]
pub struct MemoryKv {
    entries: BTreeMap<Vec<u8>, Vec<u8>>,
}

impl MemoryKv {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Kv for MemoryKv {
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, KvError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &[u8], value: &[u8]) -> Result<(), KvError> {
        self.entries.insert(key.to_vec(), value.to_vec());
        Ok(())
    }

    fn delete(&mut self, key: &[u8]) -> Result<(), KvError> {
        self.entries.remove(key);
        Ok(())
    }

    fn scan_prefix(&self, prefix: &[u8]) -> Result<Vec<(Vec<u8>, Vec<u8>)>, KvError> {
        Ok(self
            .entries
            .range(prefix.to_vec()..)
            .take_while(|(key, _)| key.starts_with(prefix))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scan_prefix_is_key_ordered_and_bounded() {
        let mut kv = MemoryKv::new();
        kv.set(b"b\x02", b"2").unwrap();
        kv.set(b"b\x01", b"1").unwrap();
        kv.set(b"a\x01", b"0").unwrap();
        kv.set(b"c\x01", b"3").unwrap();

        let hits = kv.scan_prefix(b"b").unwrap();
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].0, b"b\x01");
        assert_eq!(hits[1].0, b"b\x02");
    }

    #[test]
    fn delete_is_idempotent() {
        let mut kv = MemoryKv::new();
        kv.set(b"k", b"v").unwrap();
        kv.delete(b"k").unwrap();
        kv.delete(b"k").unwrap();
        assert!(!kv.has(b"k").unwrap());
    }
}
