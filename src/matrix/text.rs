//! Plain-text matrix layout.
//!
//! ```text
//! 2 3
//! 1 2 3
//! 4 5 6
//! ```
//!
//! The first line holds `rows columns`; each of the next `rows` lines holds
//! exactly `columns` whitespace-separated integers. Trailing blank lines are
//! ignored, anything else after the last row is rejected.

use std::fmt;
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::str::FromStr;

use tracing::info;

use super::{Element, Matrix, check_dimensions};
use crate::error::{Error, Result};

impl FromStr for Matrix {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut lines = s.lines().enumerate().map(|(i, line)| (i + 1, line));

        let (_, header) = lines
            .next()
            .ok_or_else(|| Error::format(1, "missing dimension header"))?;
        let dims = parse_line(1, header)?;
        if dims.len() != 2 {
            return Err(Error::format(
                1,
                format!("expected 2 header values, found {}", dims.len()),
            ));
        }
        let (rows, columns) = check_dimensions(dims[0], dims[1])?;

        // grown row by row: the header alone must not decide the allocation
        let mut data = Vec::new();
        for row in 0..rows {
            let (line_no, line) = lines.next().ok_or_else(|| {
                Error::format(row + 2, format!("expected {} rows, found {}", rows, row))
            })?;
            let values = parse_line(line_no, line)?;
            if values.len() != columns {
                return Err(Error::format(
                    line_no,
                    format!("expected {} values, found {}", columns, values.len()),
                ));
            }
            data.extend_from_slice(&values);
        }

        if let Some((line_no, _)) = lines.find(|(_, line)| !line.trim().is_empty()) {
            return Err(Error::format(
                line_no,
                format!("unexpected data after {} rows", rows),
            ));
        }

        Ok(Matrix::from_parts(rows, columns, data))
    }
}

fn parse_line(line_no: usize, line: &str) -> Result<Vec<Element>> {
    line.split_whitespace()
        .map(|token| {
            token
                .parse::<Element>()
                .map_err(|_| Error::format(line_no, format!("invalid integer {:?}", token)))
        })
        .collect()
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {}", self.rows, self.columns)?;
        for row in self.data.chunks(self.columns) {
            let mut values = row.iter();
            if let Some(first) = values.next() {
                write!(f, "{}", first)?;
            }
            for value in values {
                write!(f, " {}", value)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl Matrix {
    /// Loads a matrix from a text file.
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] if the file does not exist, [`Error::Format`] or
    /// [`Error::InvalidDimension`] if its content is malformed.
    pub fn read_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => Error::NotFound(path.to_path_buf()),
            _ => Error::Io(e),
        })?;
        let matrix: Matrix = content.parse()?;
        info!(
            path = %path.display(),
            rows = matrix.rows,
            columns = matrix.columns,
            "loaded matrix"
        );
        Ok(matrix)
    }

    /// Writes the matrix to `path` in the text layout, replacing any
    /// existing file.
    pub fn write_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let mut writer = BufWriter::new(fs::File::create(path)?);
        write!(writer, "{}", self)?;
        writer.flush()?;
        info!(
            path = %path.display(),
            rows = self.rows,
            columns = self.columns,
            "stored matrix"
        );
        Ok(())
    }
}
