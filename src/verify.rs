//! Equivalence checks between multiplication strategies.

use std::fmt;

use crate::matrix::{Element, Matrix};

/// Returns `true` when both matrices have the same shape and every
/// corresponding cell is equal. Same contract as `Matrix == Matrix`.
pub fn compare(a: &Matrix, b: &Matrix) -> bool {
    a == b
}

/// First point where two matrices disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mismatch {
    Shape {
        expected: (usize, usize),
        actual: (usize, usize),
    },
    Cell {
        row: usize,
        column: usize,
        expected: Element,
        actual: Element,
    },
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mismatch::Shape { expected, actual } => write!(
                f,
                "shape differs: expected {}x{}, got {}x{}",
                expected.0, expected.1, actual.0, actual.1
            ),
            Mismatch::Cell {
                row,
                column,
                expected,
                actual,
            } => write!(
                f,
                "cell ({}, {}) differs: expected {}, got {}",
                row, column, expected, actual
            ),
        }
    }
}

/// Finds the first mismatch in row-major order, or `None` if `expected`
/// and `actual` are equivalent.
pub fn first_mismatch(expected: &Matrix, actual: &Matrix) -> Option<Mismatch> {
    if expected.shape() != actual.shape() {
        return Some(Mismatch::Shape {
            expected: expected.shape(),
            actual: actual.shape(),
        });
    }

    let columns = expected.columns();
    expected
        .as_slice()
        .iter()
        .zip(actual.as_slice())
        .position(|(e, a)| e != a)
        .map(|idx| Mismatch::Cell {
            row: idx / columns,
            column: idx % columns,
            expected: expected.as_slice()[idx],
            actual: actual.as_slice()[idx],
        })
}
