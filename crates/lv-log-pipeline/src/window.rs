//! Head/Tail positional window selection.

use crate::types::{LogRecord, Order};

/// Trim the filtered sequence to at most `count` records.
///
/// Head keeps the front, Tail keeps the back. A Tail request larger
/// than the sequence clips to the whole sequence instead of
/// underflowing. Selection borrows a contiguous sub-range; nothing is
/// reordered or mutated.
pub fn select(records: &[LogRecord], order: Order, count: usize) -> &[LogRecord] {
    match order {
        Order::Head => &records[..records.len().min(count)],
        Order::Tail => &records[records.len().saturating_sub(count)..],
    }
}
