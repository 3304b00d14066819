use super::items::Position;
use geo::prelude::*;
use geo_types::LineString;

/// Axis-aligned bounding box of a ring, `w`/`e` span the first ordinate and
/// `s`/`n` the second.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub e: f64,
    pub n: f64,
    pub s: f64,
    pub w: f64,
}

impl Bounds {
    /// Strict containment, boxes sharing an edge do not contain each other.
    pub fn contains(&self, other: &Bounds) -> bool {
        other.w > self.w && other.e < self.e && other.s > self.s && other.n < self.n
    }
}

/// Vertices with both ordinates, degenerate trailing positions are skipped.
pub fn vertices(positions: &[Position]) -> Vec<(f64, f64)> {
    positions
        .iter()
        .filter(|position| position.len() >= 2)
        .map(|position| (position[0], position[1]))
        .collect()
}

pub fn get_bounds(positions: &[Position]) -> Option<Bounds> {
    let line_string: LineString<f64> = vertices(positions).into();
    let rect = line_string.bounding_rect()?;
    Some(Bounds {
        e: rect.max().x,
        n: rect.max().y,
        s: rect.min().y,
        w: rect.min().x,
    })
}
