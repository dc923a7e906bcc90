use geo::{BoundingRect, Coord, MultiPolygon, Rect};

use crate::zone::Zone;

/// Axis-aligned bounds of a single shape, or `fallback` when the shape is
/// absent, has no rings, or carries unusable coordinates.
///
/// This feeds camera-fit calls on the rendering surface, so it never fails;
/// the fallback is whatever default viewport the host considers sane.
pub fn bounds_of(shape: Option<&MultiPolygon<f64>>, fallback: Rect<f64>) -> Rect<f64> {
    shape.and_then(|multi| multi.bounding_rect()).filter(finite).unwrap_or(fallback)
}

/// Combined bounds of a whole zone set, for level-wide camera fits.
///
/// Zones without a usable rectangle are skipped; when none remain the
/// fallback is returned.
pub fn bounds_of_all(zones: &[Zone], fallback: Rect<f64>) -> Rect<f64> {
    zones
        .iter()
        .filter_map(|zone| zone.bounding_rect())
        .filter(finite)
        .reduce(|a, b| {
            Rect::new(
                Coord { x: a.min().x.min(b.min().x), y: a.min().y.min(b.min().y) },
                Coord { x: a.max().x.max(b.max().x), y: a.max().y.max(b.max().y) },
            )
        })
        .unwrap_or(fallback)
}

fn finite(rect: &Rect<f64>) -> bool {
    rect.min().x.is_finite()
        && rect.min().y.is_finite()
        && rect.max().x.is_finite()
        && rect.max().y.is_finite()
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::{LineString, Polygon};

    use crate::zone::{BilingualName, ParentRefs, ZoneFlags, ZoneId, ZoneLevel};

    fn fallback() -> Rect<f64> {
        Rect::new(Coord { x: -13.0, y: 21.0 }, Coord { x: -1.0, y: 36.0 })
    }

    fn square(x0: f64, y0: f64, x1: f64, y1: f64) -> MultiPolygon<f64> {
        MultiPolygon(vec![Polygon::new(
            LineString(vec![
                Coord { x: x0, y: y0 },
                Coord { x: x1, y: y0 },
                Coord { x: x1, y: y1 },
                Coord { x: x0, y: y1 },
                Coord { x: x0, y: y0 },
            ]),
            vec![],
        )])
    }

    fn zone(id: &str, shape: MultiPolygon<f64>) -> Zone {
        Zone::new(
            ZoneId::new(ZoneLevel::Region, id),
            BilingualName::default(),
            ParentRefs::default(),
            ZoneFlags::default(),
            shape,
        )
    }

    #[test]
    fn bounds_cover_the_shape() {
        let shape = square(-2.0, 1.0, 3.0, 4.0);
        let rect = bounds_of(Some(&shape), fallback());
        assert_eq!(rect.min(), Coord { x: -2.0, y: 1.0 });
        assert_eq!(rect.max(), Coord { x: 3.0, y: 4.0 });
    }

    #[test]
    fn missing_shape_falls_back() {
        assert_eq!(bounds_of(None, fallback()), fallback());
    }

    #[test]
    fn empty_shape_falls_back() {
        let shape = MultiPolygon::<f64>(vec![]);
        assert_eq!(bounds_of(Some(&shape), fallback()), fallback());
    }

    #[test]
    fn non_finite_shape_falls_back() {
        let shape = MultiPolygon(vec![Polygon::new(
            LineString(vec![
                Coord { x: 0.0, y: 0.0 },
                Coord { x: f64::INFINITY, y: 0.0 },
                Coord { x: 1.0, y: 1.0 },
                Coord { x: 0.0, y: 0.0 },
            ]),
            vec![],
        )]);
        assert_eq!(bounds_of(Some(&shape), fallback()), fallback());
    }

    #[test]
    fn combined_bounds_span_every_zone() {
        let zones = vec![
            zone("a", square(0.0, 0.0, 1.0, 1.0)),
            zone("b", square(4.0, -2.0, 6.0, 3.0)),
            zone("empty", MultiPolygon(vec![])),
        ];
        let rect = bounds_of_all(&zones, fallback());
        assert_eq!(rect.min(), Coord { x: 0.0, y: -2.0 });
        assert_eq!(rect.max(), Coord { x: 6.0, y: 3.0 });
    }

    #[test]
    fn empty_zone_set_falls_back() {
        assert_eq!(bounds_of_all(&[], fallback()), fallback());
    }
}
