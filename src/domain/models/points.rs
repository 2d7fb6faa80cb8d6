use serde::Serialize;

/// A random `(x, y)` coordinate. Serializes as a two-element array.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point(pub f64, pub f64);

/// Validated parameters for a point generation run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointRange {
    pub count: usize,
    pub min: f64,
    pub max: f64,
}

