//! Row-range partitioning.

use std::ops::Range;

/// Splits `rows` output rows across `workers` workers.
///
/// Every worker gets `ceil(rows / workers)` rows, except the last busy one
/// which gets the remainder. Workers whose start row falls at or past
/// `rows` receive an empty range; this happens whenever there are more
/// workers than rows. The returned vector always has exactly `workers`
/// entries, ordered by worker index. A worker count of zero is treated as
/// one.
///
/// # Example
///
/// ```
/// use parmatmul::threaded::partition::partition_rows;
///
/// assert_eq!(partition_rows(10, 4), vec![0..3, 3..6, 6..9, 9..10]);
/// assert_eq!(partition_rows(2, 4), vec![0..1, 1..2, 2..2, 2..2]);
/// ```
pub fn partition_rows(rows: usize, workers: usize) -> Vec<Range<usize>> {
    let workers = workers.max(1);
    let rows_per_worker = rows.div_ceil(workers);

    (0..workers)
        .map(|t| {
            let start = (t * rows_per_worker).min(rows);
            let end = ((t + 1) * rows_per_worker).min(rows);
            start..end
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_covers(rows: usize, ranges: &[Range<usize>]) {
        let mut next = 0;
        for r in ranges {
            assert_eq!(r.start, next.min(rows), "gap or overlap at {:?}", r);
            assert!(r.start <= r.end);
            next = r.end;
        }
        assert_eq!(next, rows, "rows not fully covered");
    }

    #[test]
    fn test_even_split() {
        let ranges = partition_rows(8, 4);
        assert_eq!(ranges, vec![0..2, 2..4, 4..6, 6..8]);
    }

    #[test]
    fn test_uneven_split_puts_remainder_last() {
        let ranges = partition_rows(7, 3);
        assert_eq!(ranges, vec![0..3, 3..6, 6..7]);
    }

    #[test]
    fn test_more_workers_than_rows() {
        let ranges = partition_rows(3, 8);
        assert_eq!(ranges.len(), 8);
        assert_eq!(&ranges[..3], &[0..1, 1..2, 2..3]);
        assert!(ranges[3..].iter().all(|r| r.is_empty()));
    }

    #[test]
    fn test_ceil_can_leave_trailing_workers_idle() {
        // ceil(5 / 4) = 2, so only three workers are needed
        let ranges = partition_rows(5, 4);
        assert_eq!(ranges, vec![0..2, 2..4, 4..5, 5..5]);
    }

    #[test]
    fn test_single_worker_takes_everything() {
        assert_eq!(partition_rows(42, 1), vec![0..42]);
    }

    #[test]
    fn test_zero_workers_treated_as_one() {
        assert_eq!(partition_rows(5, 0), vec![0..5]);
    }

    #[test]
    fn test_ranges_cover_rows_exactly_once() {
        for rows in 1..40 {
            for workers in 1..12 {
                let ranges = partition_rows(rows, workers);
                assert_eq!(ranges.len(), workers);
                assert_covers(rows, &ranges);
            }
        }
    }
}
