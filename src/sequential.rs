//! Single-threaded reference multiplier.

use crate::Multiplier;
use crate::error::Result;
use crate::matrix::Matrix;
use crate::matrix::naive_ijk::matmul_naive_ijk;

/// Triple-loop reference product.
///
/// Every other strategy is checked against this one.
#[derive(Clone, Copy, Debug, Default)]
pub struct Sequential;

impl Multiplier for Sequential {
    fn name(&self) -> &'static str {
        "sequential"
    }

    fn multiply(&self, first: &Matrix, second: &Matrix) -> Result<Matrix> {
        crate::check_inner_dimension(first, second)?;

        let (m, k) = first.shape();
        let n = second.columns();
        let mut c = vec![0; m * n];
        matmul_naive_ijk(first.as_slice(), second.as_slice(), &mut c, m, n, k);

        Ok(Matrix::from_parts(m, n, c))
    }
}
