use geo::{Coord, Geometry, LineString, MultiPolygon, Polygon};

use crate::report::InvalidGeometry;

/// Decimal digits kept when rounding coordinates (about 0.11 m of longitude
/// at the equator).
pub const COORD_DECIMALS: u32 = 6;

/// Rounding scale derived from [`COORD_DECIMALS`].
const SCALE: f64 = 10u64.pow(COORD_DECIMALS) as f64;

/// Convert a raw boundary geometry into the canonical multi-polygon form.
///
/// A bare polygon is promoted to a one-element multi-polygon so downstream
/// consumers see a single representation. Coordinates are snapped to the
/// [`COORD_DECIMALS`] grid to absorb floating-point noise from upstream
/// exports, consecutive duplicates introduced by the snap are dropped, and
/// every ring is closed. A ring left with fewer than four coordinate pairs
/// no longer encloses area and fails the whole geometry, as does any
/// coordinate that is not finite once snapped.
pub fn normalize(raw: &Geometry<f64>) -> Result<MultiPolygon<f64>, InvalidGeometry> {
    match raw {
        Geometry::Polygon(polygon) => Ok(MultiPolygon(vec![clean_polygon(polygon, 0)?])),
        Geometry::MultiPolygon(multi) => {
            let polygons = multi
                .0
                .iter()
                .enumerate()
                .map(|(idx, polygon)| clean_polygon(polygon, idx))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(MultiPolygon(polygons))
        }
        other => Err(InvalidGeometry::NotAreal { kind: kind_of(other) }),
    }
}

fn clean_polygon(polygon: &Polygon<f64>, idx: usize) -> Result<Polygon<f64>, InvalidGeometry> {
    let exterior = clean_ring(polygon.exterior(), idx, 0)?;
    let interiors = polygon
        .interiors()
        .iter()
        .enumerate()
        .map(|(i, ring)| clean_ring(ring, idx, i + 1))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Polygon::new(exterior, interiors))
}

/// Snap one ring to the rounding grid, drop consecutive duplicates, and
/// close it. Ring 0 is the exterior; holes count from 1.
fn clean_ring(
    ring: &LineString<f64>,
    polygon: usize,
    ring_no: usize,
) -> Result<LineString<f64>, InvalidGeometry> {
    let mut coords: Vec<Coord<f64>> = Vec::with_capacity(ring.0.len() + 1);
    for &coord in &ring.0 {
        let snapped = snap(coord);
        // The scale multiply can overflow, so the finiteness check runs on
        // the snapped value.
        if !snapped.x.is_finite() || !snapped.y.is_finite() {
            return Err(InvalidGeometry::NonFinite { polygon, ring: ring_no });
        }
        if coords.last() != Some(&snapped) {
            coords.push(snapped);
        }
    }

    if let Some(&first) = coords.first() {
        if coords.last() != Some(&first) {
            coords.push(first);
        }
    }

    if coords.len() < 4 {
        return Err(InvalidGeometry::ShortRing { polygon, ring: ring_no, coords: coords.len() });
    }
    Ok(LineString(coords))
}

#[inline]
fn snap(coord: Coord<f64>) -> Coord<f64> {
    Coord { x: (coord.x * SCALE).round() / SCALE, y: (coord.y * SCALE).round() / SCALE }
}

fn kind_of(geometry: &Geometry<f64>) -> &'static str {
    match geometry {
        Geometry::Point(_) => "a point",
        Geometry::Line(_) => "a line",
        Geometry::LineString(_) => "a line string",
        Geometry::MultiPoint(_) => "a multi-point",
        Geometry::MultiLineString(_) => "a multi-line-string",
        Geometry::GeometryCollection(_) => "a geometry collection",
        Geometry::Rect(_) => "a rectangle",
        Geometry::Triangle(_) => "a triangle",
        Geometry::Polygon(_) => "a polygon",
        Geometry::MultiPolygon(_) => "a multi-polygon",
    }
}
