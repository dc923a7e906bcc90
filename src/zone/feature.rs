use geo::{BoundingRect, Centroid, InteriorPoint, Intersects, MultiPolygon, Point, Rect};

use super::attrs::{BilingualName, ParentRefs, ZoneFlags};
use super::id::ZoneId;
use super::level::ZoneLevel;

/// One administrative feature: a zone at a single level, with the merged
/// boundary shape and the attributes the rendering surface needs.
///
/// Zones are plain values. Nothing mutates a zone in place; attribute
/// updates go through [`Zone::with_flags`] and produce a copy.
#[derive(Debug, Clone, PartialEq)]
pub struct Zone {
    pub id: ZoneId,
    pub name: BilingualName,
    pub parents: ParentRefs,
    pub flags: ZoneFlags,
    pub shape: MultiPolygon<f64>,
}

impl Zone {
    pub fn new(
        id: ZoneId,
        name: BilingualName,
        parents: ParentRefs,
        flags: ZoneFlags,
        shape: MultiPolygon<f64>,
    ) -> Self {
        Self { id, name, parents, flags, shape }
    }

    #[inline]
    pub fn level(&self) -> ZoneLevel {
        self.id.level
    }

    /// Closed membership test: interior or boundary counts, hole interiors
    /// do not. Boundary points can satisfy this for several touching zones
    /// at once; the resolver's first-match rule settles which one wins.
    #[inline]
    pub fn covers(&self, point: Point<f64>) -> bool {
        self.shape.intersects(&point)
    }

    /// Anchor for cluster layout: the area-weighted centroid, or an interior
    /// point when the centroid of a concave or ring-shaped zone lands
    /// outside its own shape. `None` only for empty geometry.
    pub fn anchor(&self) -> Option<Point<f64>> {
        let centroid = self.shape.centroid()?;
        if self.shape.intersects(&centroid) { Some(centroid) } else { self.shape.interior_point() }
    }

    /// Axis-aligned bounding rectangle, `None` for empty geometry.
    #[inline]
    pub fn bounding_rect(&self) -> Option<Rect<f64>> {
        self.shape.bounding_rect()
    }

    /// Copy of the zone with its flags replaced.
    pub fn with_flags(&self, flags: ZoneFlags) -> Zone {
        Zone { flags, ..self.clone() }
    }
}
