use alloc::collections::TryReserveError;

use thiserror::Error;

/// Errors reported by the fallible [`OrderedMap`](crate::OrderedMap) operations.
///
/// Looking up or erasing an absent key is not an error; those operations
/// return `None` or a zero count instead.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum Error {
    /// The position is one past the last entry and names no element.
    #[error("position is past the end of the map")]
    PastTheEnd,

    /// The position is one before the first entry and names no element.
    #[error("position is before the beginning of the map")]
    BeforeBegin,

    /// The entry the position referred to has been erased.
    ///
    /// Detection is best-effort: once a later insertion reuses the erased
    /// entry's slot, the old position names the new entry instead and this
    /// error is no longer reported.
    #[error("position refers to an entry that is no longer in the map")]
    Stale,

    /// Reserving room for a new entry failed. The map is left unchanged.
    #[error("memory allocation failed")]
    Alloc(#[from] TryReserveError),
}
