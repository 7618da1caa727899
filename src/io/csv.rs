//! Flat `x,y` tables.
//!
//! The writer emits a header row `x,y` followed by one row per point, in
//! curve order. The reader accepts the same layout, skipping blank lines, and
//! is used to load control points.
//!
//! # Example
//!
//! ```
//! use splinum::{Point2, io::{read_csv, write_csv}};
//!
//! let points = vec![Point2::new(0.0, 0.5), Point2::new(1.25, -2.0)];
//!
//! let mut buf = Vec::new();
//! write_csv(&mut buf, &points).unwrap();
//! assert_eq!(String::from_utf8(buf.clone()).unwrap(), "x,y\n0,0.5\n1.25,-2\n");
//!
//! let back = read_csv(buf.as_slice()).unwrap();
//! assert_eq!(back, points);
//! ```

use crate::primitives::Point2;
use num_traits::Float;
use std::fmt::Display;
use std::io::{BufRead, Write};
use thiserror::Error;

const HEADER: &str = "x,y";

/// Errors reading or writing a point table.
#[derive(Debug, Error)]
pub enum CsvError {
    /// Underlying reader or writer failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The first non-blank line is not the `x,y` header.
    #[error("missing `x,y` header")]
    MissingHeader,

    /// A row does not have exactly two fields.
    #[error("line {line}: expected two comma-separated fields")]
    MalformedRow {
        /// 1-based line number
        line: usize,
    },

    /// A field is not a finite number.
    #[error("line {line}: invalid number '{value}'")]
    InvalidNumber {
        /// 1-based line number
        line: usize,
        /// The offending field
        value: String,
    },
}

/// Writes `points` as an `x,y` table.
///
/// Numbers use Rust's shortest round-trip formatting, so reading the table
/// back yields bit-identical coordinates.
pub fn write_csv<W: Write, F: Float + Display>(
    mut writer: W,
    points: &[Point2<F>],
) -> Result<(), CsvError> {
    writeln!(writer, "{}", HEADER)?;
    for p in points {
        writeln!(writer, "{},{}", p.x, p.y)?;
    }
    writer.flush()?;
    Ok(())
}

/// Reads an `x,y` table into points.
pub fn read_csv<R: BufRead>(reader: R) -> Result<Vec<Point2<f64>>, CsvError> {
    let mut points = Vec::new();
    let mut seen_header = false;

    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = i + 1;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        if !seen_header {
            let header: Vec<&str> = trimmed.split(',').map(str::trim).collect();
            if header != ["x", "y"] {
                return Err(CsvError::MissingHeader);
            }
            seen_header = true;
            continue;
        }

        let fields: Vec<&str> = trimmed.split(',').map(str::trim).collect();
        if fields.len() != 2 {
            return Err(CsvError::MalformedRow { line: line_no });
        }
        let x = parse_field(fields[0], line_no)?;
        let y = parse_field(fields[1], line_no)?;
        points.push(Point2::new(x, y));
    }

    if !seen_header {
        return Err(CsvError::MissingHeader);
    }
    Ok(points)
}

fn parse_field(field: &str, line: usize) -> Result<f64, CsvError> {
    match field.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(CsvError::InvalidNumber {
            line,
            value: field.to_string(),
        }),
    }
}
