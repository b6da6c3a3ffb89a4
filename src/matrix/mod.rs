//! Dense integer matrix and the kernels that operate on it.
//!
//! A [`Matrix`] owns a single row-major buffer sized once at construction.
//! Its shape never changes afterwards; only element values can be written,
//! and only through the bounds-checked [`Matrix::set`].

pub mod naive_ijk;
pub mod text;

use std::ops::Index;

use rand::Rng;

use crate::error::{Error, Result};

/// Element type of every matrix in this crate.
///
/// Deliberately 64-bit rather than 32-bit: products of generated values
/// (each below [`RANDOM_UPPER_BOUND`]) summed over realistic inner
/// dimensions stay far from wrapping, where a 32-bit accumulator would wrap
/// once the inner dimension passes about 21. Accumulation still wraps on
/// overflow, identically for every strategy.
pub type Element = i64;

/// Exclusive upper bound of randomly generated elements.
pub const RANDOM_UPPER_BOUND: Element = 10_000;

/// A rows×columns grid of integers stored row-major.
///
/// Equality is structural: two matrices are equal when their shapes match
/// and every corresponding cell is equal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    rows: usize,
    columns: usize,
    data: Vec<Element>,
}

impl Matrix {
    /// Creates a zero-filled `rows × columns` matrix.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidDimension`] if either dimension is zero or the grid
    /// would not fit in memory addressable by a `Vec`.
    ///
    /// # Example
    ///
    /// ```
    /// use parmatmul::Matrix;
    ///
    /// let m = Matrix::new(2, 3).unwrap();
    /// assert_eq!(m.shape(), (2, 3));
    /// assert!(m.as_slice().iter().all(|&v| v == 0));
    /// assert!(Matrix::new(0, 3).is_err());
    /// ```
    pub fn new(rows: usize, columns: usize) -> Result<Self> {
        let len = checked_len(rows, columns)?;
        Ok(Self {
            rows,
            columns,
            data: vec![0; len],
        })
    }

    /// Builds a matrix from nested rows. Every row must have the same,
    /// non-zero length.
    pub fn from_rows(rows: Vec<Vec<Element>>) -> Result<Self> {
        let columns = rows.first().map_or(0, Vec::len);
        let mut matrix = Self::new(rows.len(), columns)?;
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != columns {
                return Err(Error::format(
                    i + 1,
                    format!("expected {} values, found {}", columns, row.len()),
                ));
            }
            matrix.data[i * columns..(i + 1) * columns].copy_from_slice(&row);
        }
        Ok(matrix)
    }

    /// Wraps an already filled row-major buffer.
    pub(crate) fn from_parts(rows: usize, columns: usize, data: Vec<Element>) -> Self {
        debug_assert_eq!(data.len(), rows * columns);
        Self {
            rows,
            columns,
            data,
        }
    }

    /// Generates a matrix with elements drawn uniformly from
    /// `[0, RANDOM_UPPER_BOUND)` using the thread-local RNG.
    pub fn random(rows: usize, columns: usize) -> Result<Self> {
        Self::random_with_rng(rows, columns, &mut rand::thread_rng())
    }

    /// Same as [`Matrix::random`] but with a caller-supplied RNG, so tests
    /// and fixtures can be seeded.
    pub fn random_with_rng<R: Rng + ?Sized>(
        rows: usize,
        columns: usize,
        rng: &mut R,
    ) -> Result<Self> {
        let mut matrix = Self::new(rows, columns)?;
        for value in &mut matrix.data {
            *value = rng.gen_range(0..RANDOM_UPPER_BOUND);
        }
        Ok(matrix)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// `(rows, columns)`
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.columns)
    }

    /// Reads element `(row, column)`.
    pub fn get(&self, row: usize, column: usize) -> Result<Element> {
        let idx = self.offset(row, column)?;
        Ok(self.data[idx])
    }

    /// Writes element `(row, column)`.
    pub fn set(&mut self, row: usize, column: usize, value: Element) -> Result<()> {
        let idx = self.offset(row, column)?;
        self.data[idx] = value;
        Ok(())
    }

    /// Borrows one row.
    pub fn row(&self, row: usize) -> Option<&[Element]> {
        if row >= self.rows {
            return None;
        }
        Some(&self.data[row * self.columns..(row + 1) * self.columns])
    }

    /// The whole row-major buffer.
    pub fn as_slice(&self) -> &[Element] {
        &self.data
    }

    fn offset(&self, row: usize, column: usize) -> Result<usize> {
        if row >= self.rows || column >= self.columns {
            return Err(Error::IndexOutOfRange {
                row,
                column,
                rows: self.rows,
                columns: self.columns,
            });
        }
        Ok(row * self.columns + column)
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = Element;

    /// # Panics
    ///
    /// Panics if the index is out of range; use [`Matrix::get`] for a
    /// checked read.
    fn index(&self, (row, column): (usize, usize)) -> &Element {
        assert!(
            row < self.rows && column < self.columns,
            "index ({}, {}) out of range for {}x{} matrix",
            row,
            column,
            self.rows,
            self.columns
        );
        &self.data[row * self.columns + column]
    }
}

/// Returns `true` when the matrix is absent or every cell is zero.
///
/// Drivers use this to skip multiplication when an input was never set, so
/// "absent" and "all zero" deliberately share one answer. A failed read
/// while scanning also counts as empty.
pub fn is_empty(matrix: Option<&Matrix>) -> bool {
    let Some(matrix) = matrix else {
        return true;
    };
    for i in 0..matrix.rows() {
        for j in 0..matrix.columns() {
            match matrix.get(i, j) {
                Ok(0) => {}
                Ok(_) => return false,
                Err(_) => return true,
            }
        }
    }
    true
}

/// Validates signed dimensions coming from text or the command line.
pub fn check_dimensions(rows: i64, columns: i64) -> Result<(usize, usize)> {
    if rows <= 0 || columns <= 0 {
        return Err(Error::InvalidDimension { rows, columns });
    }
    let invalid = || Error::InvalidDimension { rows, columns };
    let rows = usize::try_from(rows).map_err(|_| invalid())?;
    let columns = usize::try_from(columns).map_err(|_| invalid())?;
    checked_len(rows, columns)?;
    Ok((rows, columns))
}

fn checked_len(rows: usize, columns: usize) -> Result<usize> {
    let invalid = || Error::InvalidDimension {
        rows: rows as i64,
        columns: columns as i64,
    };
    if rows == 0 || columns == 0 {
        return Err(invalid());
    }
    let len = rows.checked_mul(columns).ok_or_else(invalid)?;
    // a Vec can never hold more than isize::MAX bytes
    match len.checked_mul(size_of::<Element>()) {
        Some(bytes) if bytes <= isize::MAX as usize => Ok(len),
        _ => Err(invalid()),
    }
}
