//! Reading the plain-text point-data format.
//!
//! A data file holds whitespace-separated `x y` coordinate pairs, read pair
//! by pair until end of stream:
//!
//! ```text
//! 0.206 0.095
//! 0.335 0.178
//! ```
//!
//! ```
//! use point_index::data;
//!
//! let points = data::parse_points("0.2 0.8\n0.6 0.4").unwrap();
//! assert_eq!(points.len(), 2);
//! ```

use std::fs;
use std::path::Path;

use crate::error::{PointIndexError, Result};
use crate::point::Point;

/// Read whitespace-separated `x y` pairs from the file at `path`.
pub fn read_points<P: AsRef<Path>>(path: P) -> Result<Vec<Point>> {
    parse_points(&fs::read_to_string(path)?)
}

/// Parse whitespace-separated `x y` pairs.
pub fn parse_points(input: &str) -> Result<Vec<Point>> {
    let mut coords = Vec::new();
    for token in input.split_whitespace() {
        let value: f64 = token
            .parse()
            .map_err(|_| PointIndexError::MalformedData(format!("invalid coordinate {token:?}")))?;
        coords.push(value);
    }
    if coords.len() % 2 != 0 {
        return Err(PointIndexError::MalformedData(format!(
            "odd number of coordinates ({})",
            coords.len()
        )));
    }
    Ok(coords
        .chunks(2)
        .map(|pair| Point::new(pair[0], pair[1]))
        .collect())
}
