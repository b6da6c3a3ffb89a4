//! Multi-threaded multiplication.
//!
//! Output rows are split into contiguous, non-overlapping bands, one per
//! worker. Each worker runs the naive kernel on its own band, so no two
//! threads ever write the same cell and no locking is needed. Workers are
//! spawned fresh for every call and all of them are joined before the
//! result is handed back.
//!
//! Available pieces:
//! - `partition`: the row-range plan
//! - `row_parallel`: the scoped-thread multiplier built on that plan

pub mod partition;
pub mod row_parallel;
