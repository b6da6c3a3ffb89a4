//! Row-partitioned multi-threaded multiplier.

use std::thread;

use tracing::{debug, trace};

use super::partition::partition_rows;
use crate::Multiplier;
use crate::config::MultiplyConfig;
use crate::error::Result;
use crate::matrix::naive_ijk::matmul_naive_ijk_rows;
use crate::matrix::{Element, Matrix};

/// Multi-threaded matrix multiplication over row bands.
///
/// Splits the rows of C across `num_threads` scoped threads, each running
/// the naive kernel on its band. Returns only after every thread has been
/// joined. Produces exactly the same cells as
/// [`matmul_naive_ijk`](crate::matrix::naive_ijk::matmul_naive_ijk).
///
/// # Arguments
///
/// * `c` - Matrix C (m × n), row-major, overwritten with A * B
/// * `num_threads` - Workers to spawn; zero is treated as one
///
/// # Panics
///
/// Re-raises a panic from any worker after all workers have finished.
pub fn matmul_naive_ijk_mt(
    a: &[Element],
    b: &[Element],
    c: &mut [Element],
    m: usize,
    n: usize,
    k: usize,
    num_threads: usize,
) {
    assert_eq!(c.len(), m * n, "C: expected {}x{}={} elements", m, n, m * n);

    let ranges = partition_rows(m, num_threads);
    trace!(?ranges, "row partition");

    thread::scope(|s| {
        let mut rest = c;
        for (tid, rows) in ranges.into_iter().enumerate() {
            let (band, tail) = std::mem::take(&mut rest).split_at_mut(rows.len() * n);
            rest = tail;

            s.spawn(move || {
                if rows.is_empty() {
                    trace!(worker = tid, "no rows assigned");
                    return;
                }
                debug!(worker = tid, start = rows.start, end = rows.end, "computing rows");
                matmul_naive_ijk_rows(a, b, band, rows, n, k);
            });
        }
    });
}

/// Parallel multiplier that spawns a fixed number of workers per call.
#[derive(Clone, Debug, Default)]
pub struct RowParallel {
    config: MultiplyConfig,
}

impl RowParallel {
    pub fn new(config: MultiplyConfig) -> Self {
        Self { config }
    }

    /// Shorthand for `RowParallel::new(MultiplyConfig::with_workers(n)?)`.
    pub fn with_workers(workers: usize) -> Result<Self> {
        Ok(Self::new(MultiplyConfig::with_workers(workers)?))
    }

    pub fn workers(&self) -> usize {
        self.config.workers.get()
    }
}

impl Multiplier for RowParallel {
    fn name(&self) -> &'static str {
        "parallel"
    }

    fn multiply(&self, first: &Matrix, second: &Matrix) -> Result<Matrix> {
        crate::check_inner_dimension(first, second)?;

        let (m, k) = first.shape();
        let n = second.columns();
        let mut c = vec![0; m * n];

        debug!(m, n, k, workers = self.workers(), "parallel multiply");
        matmul_naive_ijk_mt(
            first.as_slice(),
            second.as_slice(),
            &mut c,
            m,
            n,
            k,
            self.workers(),
        );
        debug!("all workers joined");

        Ok(Matrix::from_parts(m, n, c))
    }
}
