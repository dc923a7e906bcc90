use std::sync::Arc;

use geo::Point;

use super::category::PoiKind;

/// One point-of-interest record, supplied fresh on every computation pass.
#[derive(Debug, Clone)]
pub struct Poi {
    pub id: Arc<str>,
    pub kind: PoiKind,
    /// Longitude in degrees. NaN when the source record had no coordinates.
    pub lon: f64,
    /// Latitude in degrees. NaN when the source record had no coordinates.
    pub lat: f64,
    /// Ids of the agencies associated with the point.
    pub agencies: Vec<Arc<str>>,
}

impl Poi {
    pub fn new(id: &str, kind: PoiKind, lon: f64, lat: f64) -> Self {
        Self { id: Arc::from(id), kind, lon, lat, agencies: Vec::new() }
    }

    /// Same point with an agency list attached.
    pub fn with_agencies(mut self, agencies: &[&str]) -> Self {
        self.agencies = agencies.iter().map(|&agency| Arc::from(agency)).collect();
        self
    }

    /// Position as a planar point, x = longitude, y = latitude.
    #[inline]
    pub fn position(&self) -> Point<f64> {
        Point::new(self.lon, self.lat)
    }

    /// A point is affiliated when it carries at least one agency. The list
    /// on the record is authoritative for the pass; affiliation is never
    /// cached across passes.
    #[inline]
    pub fn affiliated(&self) -> bool {
        !self.agencies.is_empty()
    }
}
