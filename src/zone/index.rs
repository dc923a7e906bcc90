use geo::Point;
use rstar::{AABB, RTree};

use crate::geom::ZoneBounds;

use super::feature::Zone;

/// Spatial index over a zone slice: an R-tree of zone bounding boxes
/// pre-filters candidates, and the exact covers test runs on the survivors.
///
/// Pre-filtering cannot change results, since a shape never extends past
/// its bounding box; taking the minimal candidate index afterwards
/// reproduces the resolver's first-match-in-order rule exactly.
pub(crate) struct ZoneIndex<'a> {
    zones: &'a [Zone],
    rtree: RTree<ZoneBounds>,
}

impl<'a> ZoneIndex<'a> {
    pub(crate) fn new(zones: &'a [Zone]) -> Self {
        let bounds = zones
            .iter()
            .enumerate()
            .filter_map(|(idx, zone)| zone.bounding_rect().map(|rect| ZoneBounds::new(idx, rect)))
            .collect();
        Self { zones, rtree: RTree::bulk_load(bounds) }
    }

    /// Index of the first zone, in slice order, covering the point. `None`
    /// for points outside every zone or with non-finite coordinates.
    pub(crate) fn locate(&self, point: Point<f64>) -> Option<usize> {
        if !point.x().is_finite() || !point.y().is_finite() {
            return None;
        }
        let probe = AABB::from_corners([point.x(), point.y()], [point.x(), point.y()]);
        self.rtree
            .locate_in_envelope_intersecting(&probe)
            .map(|bounds| bounds.idx())
            .filter(|&idx| self.zones[idx].covers(point))
            .min()
    }
}
