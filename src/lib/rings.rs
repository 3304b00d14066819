use super::geo::vertices;
use super::items::Position;
use itertools::Itertools;

/// Shoelace sum over consecutive vertices, the ring is not closed implicitly.
pub fn shoelace_sum(ring: &[Position]) -> f64 {
    vertices(ring)
        .into_iter()
        .tuple_windows()
        .map(|((x1, y1), (x2, y2))| (x2 - x1) * (y2 + y1))
        .sum()
}

/// A ring with a negative shoelace sum is a hole.
pub fn is_hole(ring: &[Position]) -> bool {
    shoelace_sum(ring) < 0.
}
