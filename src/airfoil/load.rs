//! Reads tabulated airfoil coordinates, for sections which have no closed-form generator. The
//! format is plain text with a single header line followed by one whitespace separated `x y` pair
//! per line, in the order the points should be traced.

use crate::errors::{AirfoilError, Result};
use crate::geometry::PointSequence;
use ncollide2d::na::Point2;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::debug;

/// Reads the coordinate table at `path`. This is the only place in the crate that touches the
/// file system.
pub fn load(path: impl AsRef<Path>) -> Result<PointSequence> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => AirfoilError::ResourceNotFound(path.to_path_buf()),
        _ => AirfoilError::Io(e),
    })?;

    let points = parse_table(&text)?;
    debug!(path = %path.display(), points = points.len(), "loaded coordinate table");
    Ok(points)
}

/// Parses the text of a coordinate table. The first line is skipped as a header and blank lines
/// are ignored; every other line must hold exactly two numbers.
pub fn parse_table(text: &str) -> Result<PointSequence> {
    let mut points = Vec::new();

    for (index, line) in text.lines().enumerate().skip(1) {
        let line_no = index + 1;
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.is_empty() {
            continue;
        }

        if fields.len() != 2 {
            return Err(AirfoilError::MalformedData {
                line: line_no,
                reason: format!("expected 2 columns, found {}", fields.len()),
            });
        }

        let x = parse_value(fields[0], line_no)?;
        let y = parse_value(fields[1], line_no)?;
        points.push(Point2::new(x, y));
    }

    Ok(PointSequence::new(points))
}

fn parse_value(field: &str, line: usize) -> Result<f64> {
    match field.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        Ok(_) => Err(AirfoilError::MalformedData {
            line,
            reason: format!("'{}' is not a finite number", field),
        }),
        Err(_) => Err(AirfoilError::MalformedData {
            line,
            reason: format!("'{}' is not a number", field),
        }),
    }
}
