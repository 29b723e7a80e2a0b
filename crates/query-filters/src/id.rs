//! Identifier generation for newly created filters.
//!
//! Filter ids are opaque and only matter for UI identity, but they must be
//! unique within a list. Generation is injected through [`IdSource`] rather
//! than reached for globally, so callers can substitute a deterministic source
//! in tests.

use std::cell::Cell;

/// Supplies unique identifiers for newly created filters.
///
/// Implementations must hand out a distinct id on every call through `&self`.
pub trait IdSource {
    /// Returns the next unique identifier.
    fn next_id(&self) -> String;
}

/// Production [`IdSource`] backed by random UUIDv4 values.
///
/// # Examples
///
/// ```
/// use query_filters_rs::id::{IdSource, UuidSource};
///
/// let a = UuidSource.next_id();
/// let b = UuidSource.next_id();
/// assert_ne!(a, b);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidSource;

impl IdSource for UuidSource {
    fn next_id(&self) -> String {
        uuid::Uuid::new_v4().to_string()
    }
}

/// Deterministic [`IdSource`] that counts up from 1.
///
/// Intended for tests and snapshot fixtures where stable ids matter.
///
/// # Examples
///
/// ```
/// use query_filters_rs::id::{IdSource, SequenceSource};
///
/// let ids = SequenceSource::new();
/// assert_eq!(ids.next_id(), "1");
/// assert_eq!(ids.next_id(), "2");
/// ```
#[derive(Debug, Default)]
pub struct SequenceSource {
    next: Cell<u64>,
}

impl SequenceSource {
    /// Creates a source whose first id is `"1"`.
    pub fn new() -> Self {
        Self { next: Cell::new(1) }
    }
}

impl IdSource for SequenceSource {
    fn next_id(&self) -> String {
        let id = self.next.get();
        self.next.set(id + 1);
        id.to_string()
    }
}
