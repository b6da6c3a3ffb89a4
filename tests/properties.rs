//! Property-based tests: the threaded product always equals the reference.

use parmatmul::threaded::partition::partition_rows;
use parmatmul::{Matrix, Multiplier, RowParallel, Sequential, is_empty};
use proptest::prelude::*;

// Strategy for an m×k and k×n pair with small signed entries
fn compatible_pair() -> impl Strategy<Value = (Matrix, Matrix)> {
    (1usize..12, 1usize..12, 1usize..12).prop_flat_map(|(m, k, n)| {
        (
            prop::collection::vec(-50i64..50, m * k),
            prop::collection::vec(-50i64..50, k * n),
        )
            .prop_map(move |(a, b)| {
                let a = a.chunks(k).map(<[i64]>::to_vec).collect();
                let b = b.chunks(n).map(<[i64]>::to_vec).collect();
                (
                    Matrix::from_rows(a).unwrap(),
                    Matrix::from_rows(b).unwrap(),
                )
            })
    })
}

proptest! {
    #[test]
    fn parallel_equals_sequential((a, b) in compatible_pair(), workers in 1usize..20) {
        let expected = Sequential.multiply(&a, &b).unwrap();
        let actual = RowParallel::with_workers(workers).unwrap().multiply(&a, &b).unwrap();
        prop_assert_eq!(expected, actual);
    }

    #[test]
    fn product_has_outer_shape((a, b) in compatible_pair()) {
        let c = Sequential.multiply(&a, &b).unwrap();
        prop_assert_eq!(c.shape(), (a.rows(), b.columns()));
    }

    #[test]
    fn new_matrix_is_empty_until_written(
        rows in 1usize..20,
        columns in 1usize..20,
        value in prop_oneof![(-100i64..=-1i64), (1i64..=100i64)],
        seed in any::<u64>(),
    ) {
        let mut m = Matrix::new(rows, columns).unwrap();
        prop_assert!(is_empty(Some(&m)));

        let row = (seed as usize) % rows;
        let column = (seed as usize / rows) % columns;
        m.set(row, column, value).unwrap();
        prop_assert!(!is_empty(Some(&m)));
    }

    #[test]
    fn partition_is_disjoint_and_complete(rows in 0usize..500, workers in 1usize..64) {
        let ranges = partition_rows(rows, workers);
        prop_assert_eq!(ranges.len(), workers);

        let mut next = 0;
        for r in &ranges {
            prop_assert!(r.start <= r.end);
            prop_assert_eq!(r.start, next.min(rows));
            next = r.end;
        }
        prop_assert_eq!(next, rows);

        let per = rows.div_ceil(workers);
        prop_assert!(ranges.iter().all(|r| r.len() <= per));
    }
}
