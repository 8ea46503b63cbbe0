//! Comparator direction for hierarchical queues.

/// Which end of the key range is served first.
///
/// The original `hierarchical_queue` template defaults to
/// `std::greater<Priority>` (highest key first); `Descending` matches
/// that default, `Ascending` is the usual "less" comparator for a
/// distance-ordered thinning run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    /// Lower keys are served first.
    Ascending,
    /// Higher keys are served first.
    Descending,
}
