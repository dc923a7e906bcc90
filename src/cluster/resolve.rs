use std::sync::Arc;

use geo::Point;

use crate::poi::Poi;
use crate::zone::{Zone, ZoneId, ZoneIndex, ZoneLevel};

/// Zone assignment of one point at one level. Assignments are ephemeral:
/// they are recomputed from the active zone set on every pass and never
/// persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneAssignment {
    /// Id of the assigned point.
    pub point: Arc<str>,
    pub level: ZoneLevel,
    /// `None` is the defined outside-every-zone outcome, not an error.
    pub zone: Option<ZoneId>,
}

/// Zone covering the point, or `None` when the point lies outside every
/// zone or has non-finite coordinates.
///
/// Zones are tested in slice order and the first covering zone wins. That
/// first-match rule is the defined tie-break for boundary points and for
/// slivers of overlap in the source data, not an accident of iteration.
pub fn resolve_zone<'a>(point: Point<f64>, zones: &'a [Zone]) -> Option<&'a ZoneId> {
    if !point.x().is_finite() || !point.y().is_finite() {
        return None;
    }
    zones.iter().find(|zone| zone.covers(point)).map(|zone| &zone.id)
}

/// Batch resolver: one assignment per input point, in input order.
///
/// Candidates are pre-filtered through an R-tree of zone bounding boxes;
/// the outcome is identical to calling [`resolve_zone`] point by point.
pub fn assign_zones(points: &[Poi], zones: &[Zone], level: ZoneLevel) -> Vec<ZoneAssignment> {
    debug_assert!(
        zones.iter().all(|zone| zone.level() == level),
        "zone set does not match the requested level"
    );

    let index = ZoneIndex::new(zones);
    points
        .iter()
        .map(|point| ZoneAssignment {
            point: point.id.clone(),
            level,
            zone: index.locate(point.position()).map(|idx| zones[idx].id.clone()),
        })
        .collect()
}
