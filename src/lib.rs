//! Integer matrix multiplication, sequential and multi-threaded.
//!
//! Two strategies compute the same product: a plain triple loop, and a
//! version that splits the output rows across a fixed number of threads.
//! The threaded one is only correct if it agrees with the triple loop on
//! every cell, and the test suite holds it to that.
//!
//! ## Usage
//!
//! ```
//! use parmatmul::{Matrix, multiply, multiply_parallel};
//!
//! let a = Matrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
//! let b = Matrix::from_rows(vec![vec![5, 6], vec![7, 8]]).unwrap();
//!
//! let c = multiply(&a, &b).unwrap();
//! assert_eq!(c, Matrix::from_rows(vec![vec![19, 22], vec![43, 50]]).unwrap());
//!
//! let c_mt = multiply_parallel(&a, &b, 4).unwrap();
//! assert_eq!(c, c_mt);
//! ```
//!
//! ## What's inside
//!
//! - `Matrix`: row-major `i64` grid, bounds-checked access, text format
//! - `Sequential`: i-j-k reference kernel
//! - `RowParallel`: row bands on scoped threads, no locks
//! - `verify` and `stats`: equivalence checks and timing summaries

pub mod config;
pub mod error;
pub mod matrix;
pub mod sequential;
pub mod stats;
pub mod threaded;
pub mod verify;

pub use config::MultiplyConfig;
pub use error::{Error, Result};
pub use matrix::{Element, Matrix, is_empty};
pub use sequential::Sequential;
pub use threaded::row_parallel::RowParallel;

/// A strategy for computing `first × second`.
pub trait Multiplier {
    /// Short label used in logs and reports.
    fn name(&self) -> &'static str;

    /// Computes the product into a new matrix.
    ///
    /// # Errors
    ///
    /// [`Error::DimensionMismatch`] if `first.columns() != second.rows()`.
    fn multiply(&self, first: &Matrix, second: &Matrix) -> Result<Matrix>;

    /// Like [`Multiplier::multiply`], for operands that may not have been
    /// loaded yet. Fails with [`Error::NullOperand`] if either is `None`.
    fn multiply_operands(
        &self,
        first: Option<&Matrix>,
        second: Option<&Matrix>,
    ) -> Result<Matrix> {
        match (first, second) {
            (Some(first), Some(second)) => self.multiply(first, second),
            _ => Err(Error::NullOperand),
        }
    }
}

/// Matrix multiply: C = A * B, single-threaded.
pub fn multiply(first: &Matrix, second: &Matrix) -> Result<Matrix> {
    Sequential.multiply(first, second)
}

/// Same as [`multiply`] but splits rows across `workers` threads.
///
/// The result is identical to [`multiply`] for any worker count, including
/// counts larger than the number of rows.
pub fn multiply_parallel(first: &Matrix, second: &Matrix, workers: usize) -> Result<Matrix> {
    RowParallel::with_workers(workers)?.multiply(first, second)
}

pub(crate) fn check_inner_dimension(first: &Matrix, second: &Matrix) -> Result<()> {
    if first.columns() != second.rows() {
        return Err(Error::DimensionMismatch {
            first_rows: first.rows(),
            first_columns: first.columns(),
            second_rows: second.rows(),
            second_columns: second.columns(),
        });
    }
    Ok(())
}
