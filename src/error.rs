use thiserror::Error;

/// Errors returned by the fallible [`SlotMap`](crate::SlotMap) operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SlotMapError {
    /// Growing the backing stores far enough to hold `key` is impossible,
    /// either because `key + 1` does not fit in `usize` or because the
    /// allocator refused the reservation.
    #[error("cannot grow slot map to hold key {key}")]
    CapacityOverflow { key: usize },
}
