//! Outcome of a write that may not have reached storage.

use crate::error::StorageError;

/// A value that was updated in memory, together with the result of
/// persisting it.
///
/// A failed write leaves `value` valid for the rest of the session; it just
/// won't survive a restart.
#[derive(Debug)]
pub struct Persisted<T> {
    /// The updated value.
    pub value: T,
    /// Set when the write to storage failed.
    pub persist_error: Option<StorageError>,
}

impl<T> Persisted<T> {
    /// Pair `value` with a write result.
    pub fn new(value: T, write: Result<(), StorageError>) -> Self {
        Self {
            value,
            persist_error: write.err(),
        }
    }

    /// Whether the value reached storage.
    #[must_use]
    pub const fn is_durable(&self) -> bool {
        self.persist_error.is_none()
    }

    /// User-facing warning for a failed write.
    #[must_use]
    pub fn warning(&self) -> Option<String> {
        self.persist_error
            .as_ref()
            .map(|e| format!("Change kept for this session only: {e}"))
    }
}
