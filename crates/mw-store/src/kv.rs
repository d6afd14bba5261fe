use thiserror::Error;

/// Substrate failure surfaced by a [`Kv`] implementation.
#[derive(Debug, Error)]
#[error("kv backend error: {0}")]
pub struct KvError(pub String);

/// Host-provided key-value substrate.
///
/// The store assumes serialized access within a reconciliation cycle but
/// never an exclusive lock across writers: a check-then-write sequence is
/// racy against an external writer to the same key and resolves
/// last-write-wins.
pub trait Kv {
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, KvError>;

    fn has(&self, key: &[u8]) -> Result<bool, KvError> {
        Ok(self.get(key)?.is_some())
    }

    fn set(&mut self, key: &[u8], value: &[u8]) -> Result<(), KvError>;

    fn delete(&mut self, key: &[u8]) -> Result<(), KvError>;

    /// Key-ordered scan of every pair whose key starts with `prefix`.
    fn scan_prefix(&self, prefix: &[u8]) -> Result<Vec<(Vec<u8>, Vec<u8>)>, KvError>;
}
