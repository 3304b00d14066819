use super::geo::{get_bounds, Bounds};
use super::items::{Polygon, Ring};
use super::rings::is_hole;
use log::{debug, warn};
use std::collections::BTreeMap;

/// Reassembles polygons from the rings of all polygon literals in one call.
///
/// Holes are assigned to an outer ring when the hole's bounding box lies
/// strictly inside the outer ring's box. This is a heuristic: it relies on the
/// rings already being classified, and adjacent polygons with overlapping
/// boxes can receive a hole that does not belong to them.
pub struct RingMatcher {
    outers: Vec<Ring>,
    holes: Vec<Ring>,
}

impl RingMatcher {
    pub fn new(outers: Vec<Ring>, holes: Vec<Ring>) -> Self {
        RingMatcher { outers, holes }
    }

    /// Split rings into outer boundaries and holes by orientation.
    pub fn classify(rings: impl IntoIterator<Item = Ring>) -> Self {
        let (holes, outers): (Vec<Ring>, Vec<Ring>) =
            rings.into_iter().partition(|ring| is_hole(ring));
        Self::new(outers, holes)
    }

    pub fn outers(&self) -> &[Ring] {
        &self.outers
    }

    pub fn holes(&self) -> &[Ring] {
        &self.holes
    }

    /// Hole indices per outer ring index, for outer rings with at least one hole.
    pub fn matches(&self) -> BTreeMap<usize, Vec<usize>> {
        let hole_bounds: Vec<Option<Bounds>> =
            self.holes.iter().map(|hole| get_bounds(hole)).collect();
        let mut matches: BTreeMap<usize, Vec<usize>> = BTreeMap::new();
        for (outer_idx, outer) in self.outers.iter().enumerate() {
            let outer_bounds = match get_bounds(outer) {
                Some(bounds) => bounds,
                None => continue,
            };
            for (hole_idx, bounds) in hole_bounds.iter().enumerate() {
                if let Some(bounds) = bounds {
                    if outer_bounds.contains(bounds) {
                        matches.entry(outer_idx).or_default().push(hole_idx);
                    }
                }
            }
        }
        matches
    }

    /// Polygons with holes first, in outer ring order, followed by the
    /// remaining outer rings as polygons without holes.
    pub fn into_polygons(self) -> Vec<Polygon> {
        let matches = self.matches();
        debug!(
            "matched holes to {} of {} outer rings",
            matches.len(),
            self.outers.len()
        );
        for hole_idx in 0..self.holes.len() {
            if !matches.values().any(|holes| holes.contains(&hole_idx)) {
                warn!("dropping hole {} without an enclosing outer ring", hole_idx);
            }
        }

        let mut polygons: Vec<Polygon> = matches
            .iter()
            .map(|(&outer_idx, hole_idxs)| {
                let mut polygon = vec![self.outers[outer_idx].clone()];
                polygon.extend(hole_idxs.iter().map(|&idx| self.holes[idx].clone()));
                polygon
            })
            .collect();
        let unmatched = self
            .outers
            .into_iter()
            .enumerate()
            .filter(|(idx, _)| !matches.contains_key(idx))
            .map(|(_, outer)| vec![outer]);
        polygons.extend(unmatched);
        polygons
    }
}
