use geo::LineString;
use sha2::{Digest, Sha256};

use crate::poi::Poi;
use crate::zone::Zone;

/// Hex digest of a zone set: ids, order, and every shape coordinate.
///
/// The host compares fingerprints across passes to decide whether cached
/// render layers built from a zone set are still valid. Equal sets produce
/// equal digests; any change to ids, ordering, or geometry changes it.
pub fn fingerprint_zones(zones: &[Zone]) -> String {
    let mut hasher = Sha256::new();
    for zone in zones {
        hasher.update(zone.id.level.to_str().as_bytes());
        hasher.update([0xff]);
        hasher.update(zone.id.id.as_bytes());
        hasher.update([0xff]);
        for polygon in &zone.shape.0 {
            update_ring(&mut hasher, polygon.exterior());
            for hole in polygon.interiors() {
                update_ring(&mut hasher, hole);
            }
            hasher.update([0xfe]);
        }
        hasher.update([0xfc]);
    }
    hex::encode(hasher.finalize())
}

/// Hex digest of a point set: ids, kinds, coordinates, and agency lists.
pub fn fingerprint_points(points: &[Poi]) -> String {
    let mut hasher = Sha256::new();
    for point in points {
        hasher.update(point.id.as_bytes());
        hasher.update([0xff, point.kind as u8]);
        hasher.update(point.lon.to_le_bytes());
        hasher.update(point.lat.to_le_bytes());
        for agency in &point.agencies {
            hasher.update(agency.as_bytes());
            hasher.update([0xff]);
        }
        hasher.update([0xfe]);
    }
    hex::encode(hasher.finalize())
}

fn update_ring(hasher: &mut Sha256, ring: &LineString<f64>) {
    for coord in &ring.0 {
        hasher.update(coord.x.to_le_bytes());
        hasher.update(coord.y.to_le_bytes());
    }
    hasher.update([0xfd]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::{Coord, Geometry, LineString, Polygon};

    use crate::poi::PoiKind;
    use crate::zone::{Fragment, FragmentAttrs, ZoneLevel, aggregate};

    fn square_fragment(key: &str, x0: f64, y0: f64, size: f64) -> Fragment {
        let (x1, y1) = (x0 + size, y0 + size);
        Fragment {
            key: key.into(),
            geometry: Geometry::Polygon(Polygon::new(
                LineString(vec![
                    Coord { x: x0, y: y0 },
                    Coord { x: x1, y: y0 },
                    Coord { x: x1, y: y1 },
                    Coord { x: x0, y: y1 },
                    Coord { x: x0, y: y0 },
                ]),
                vec![],
            )),
            attrs: FragmentAttrs::default(),
        }
    }

    fn zones(fragments: Vec<Fragment>) -> Vec<crate::zone::Zone> {
        aggregate(ZoneLevel::Region, fragments).zones
    }

    #[test]
    fn equal_zone_sets_share_a_fingerprint() {
        let a = zones(vec![square_fragment("A", 0.0, 0.0, 1.0), square_fragment("B", 2.0, 0.0, 1.0)]);
        let b = zones(vec![square_fragment("A", 0.0, 0.0, 1.0), square_fragment("B", 2.0, 0.0, 1.0)]);
        assert_eq!(fingerprint_zones(&a), fingerprint_zones(&b));
    }

    #[test]
    fn zone_order_changes_the_fingerprint() {
        let ab = zones(vec![square_fragment("A", 0.0, 0.0, 1.0), square_fragment("B", 2.0, 0.0, 1.0)]);
        let ba = zones(vec![square_fragment("B", 2.0, 0.0, 1.0), square_fragment("A", 0.0, 0.0, 1.0)]);
        assert_ne!(fingerprint_zones(&ab), fingerprint_zones(&ba));
    }

    #[test]
    fn geometry_nudges_change_the_fingerprint() {
        let base = zones(vec![square_fragment("A", 0.0, 0.0, 1.0)]);
        let nudged = zones(vec![square_fragment("A", 0.0, 0.0, 1.000_1)]);
        assert_ne!(fingerprint_zones(&base), fingerprint_zones(&nudged));
    }

    #[test]
    fn point_fingerprints_react_to_agencies_and_coordinates() {
        let base = vec![Poi::new("s1", PoiKind::DrivingSchool, -6.8, 34.0)];
        let tied = vec![Poi::new("s1", PoiKind::DrivingSchool, -6.8, 34.0).with_agencies(&["a1"])];
        let moved = vec![Poi::new("s1", PoiKind::DrivingSchool, -6.7, 34.0)];
        let fingerprint = fingerprint_points(&base);
        assert_eq!(fingerprint, fingerprint_points(&base));
        assert_ne!(fingerprint, fingerprint_points(&tied));
        assert_ne!(fingerprint, fingerprint_points(&moved));
    }

    #[test]
    fn empty_sets_still_fingerprint() {
        assert_eq!(fingerprint_zones(&[]).len(), 64);
        assert_eq!(fingerprint_points(&[]).len(), 64);
    }
}
