use std::sync::Arc;

use anyhow::{Context, Result, anyhow, bail};
use geo::{Coord, Geometry, LineString, MultiPolygon, Polygon, Rect};
use serde::Deserialize;
use serde_json::{Map, Value, json};

use crate::cluster::Cluster;
use crate::poi::{Poi, PoiKind};
use crate::zone::{BilingualName, Fragment, FragmentAttrs, Zone, ZoneFlags};

/// Property block of one boundary-fragment feature.
#[derive(Debug, Deserialize)]
struct FragmentProps {
    id: String,
    #[serde(default)]
    name_ar: String,
    #[serde(default)]
    name_fr: String,
    #[serde(default)]
    region_id: Option<String>,
    #[serde(default)]
    sub_region_id: Option<String>,
    #[serde(default)]
    has_agencies: bool,
    #[serde(default)]
    has_descendant_agencies: bool,
}

/// One point-of-interest record as delivered by the data layer.
#[derive(Debug, Deserialize)]
struct PoiRecord {
    id: String,
    category: PoiKind,
    #[serde(default = "missing_coordinate")]
    latitude: f64,
    #[serde(default = "missing_coordinate")]
    longitude: f64,
    #[serde(default)]
    agencies: Vec<String>,
}

/// Absent coordinates become NaN, which the resolver maps to no assignment.
fn missing_coordinate() -> f64 {
    f64::NAN
}

/// Read boundary fragments from a GeoJSON FeatureCollection.
///
/// Only the document structure is validated here. Geometry content stays
/// raw: normalization and per-fragment failure reporting happen inside
/// [`aggregate`](crate::aggregate), where bad fragments are scoped issues
/// instead of a failed parse.
pub fn fragments_from_geojson(bytes: &[u8]) -> Result<Vec<Fragment>> {
    let document: Value =
        serde_json::from_slice(bytes).context("failed to parse boundary GeoJSON")?;
    let features = document["features"]
        .as_array()
        .ok_or_else(|| anyhow!("boundary GeoJSON has no features array"))?;

    let mut fragments = Vec::with_capacity(features.len());
    for (idx, feature) in features.iter().enumerate() {
        let props: FragmentProps = serde_json::from_value(feature["properties"].clone())
            .with_context(|| format!("invalid properties on boundary feature {idx}"))?;
        let geometry = geometry_from_value(&feature["geometry"])
            .with_context(|| format!("invalid geometry on boundary feature {idx} ({})", props.id))?;

        fragments.push(Fragment {
            key: Arc::from(props.id.as_str()),
            geometry,
            attrs: FragmentAttrs {
                name: BilingualName::new(&props.name_ar, &props.name_fr),
                region: props.region_id.as_deref().map(Arc::from),
                sub_region: props.sub_region_id.as_deref().map(Arc::from),
                flags: ZoneFlags {
                    has_agencies: props.has_agencies,
                    has_descendant_agencies: props.has_descendant_agencies,
                },
            },
        });
    }
    Ok(fragments)
}

/// Read point-of-interest records from a JSON array.
pub fn pois_from_json(bytes: &[u8]) -> Result<Vec<Poi>> {
    let records: Vec<PoiRecord> =
        serde_json::from_slice(bytes).context("failed to parse point-of-interest records")?;

    Ok(records
        .into_iter()
        .map(|record| Poi {
            id: Arc::from(record.id.as_str()),
            kind: record.category,
            lon: record.longitude,
            lat: record.latitude,
            agencies: record.agencies.iter().map(|agency| Arc::from(agency.as_str())).collect(),
        })
        .collect())
}

fn geometry_from_value(value: &Value) -> Result<Geometry<f64>> {
    let kind = value["type"].as_str().ok_or_else(|| anyhow!("geometry has no type"))?;
    let coords =
        value["coordinates"].as_array().ok_or_else(|| anyhow!("geometry has no coordinates"))?;
    match kind {
        "Polygon" => Ok(Geometry::Polygon(parse_polygon(coords)?)),
        "MultiPolygon" => {
            let polygons = coords
                .iter()
                .map(|rings| {
                    rings
                        .as_array()
                        .ok_or_else(|| anyhow!("multi-polygon member is not an array"))
                        .and_then(|rings| parse_polygon(rings))
                })
                .collect::<Result<Vec<_>>>()?;
            Ok(Geometry::MultiPolygon(MultiPolygon(polygons)))
        }
        other => bail!("unsupported geometry type {other:?}"),
    }
}

/// Parse one GeoJSON polygon: an exterior ring followed by hole rings.
fn parse_polygon(rings: &[Value]) -> Result<Polygon<f64>> {
    let mut parsed = rings
        .iter()
        .map(|ring| {
            ring.as_array()
                .ok_or_else(|| anyhow!("ring is not an array"))
                .and_then(|coords| parse_ring(coords))
        })
        .collect::<Result<Vec<_>>>()?;
    if parsed.is_empty() {
        bail!("polygon has no rings");
    }
    let exterior = parsed.remove(0);
    Ok(Polygon::new(exterior, parsed))
}

/// Parse a ring of `[lon, lat]` pairs.
fn parse_ring(coords: &[Value]) -> Result<LineString<f64>> {
    let points = coords
        .iter()
        .map(|pair| {
            let pair = pair.as_array().ok_or_else(|| anyhow!("coordinate is not a pair"))?;
            let x = pair
                .first()
                .and_then(Value::as_f64)
                .ok_or_else(|| anyhow!("longitude must be a number"))?;
            let y = pair
                .get(1)
                .and_then(Value::as_f64)
                .ok_or_else(|| anyhow!("latitude must be a number"))?;
            Ok(Coord { x, y })
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(LineString(points))
}

/// Zone set as a GeoJSON FeatureCollection for the rendering surface.
pub fn zones_to_geojson(zones: &[Zone]) -> Value {
    let features: Vec<Value> = zones
        .iter()
        .map(|zone| {
            let mut properties = Map::new();
            properties.insert("id".into(), json!(&*zone.id.id));
            properties.insert("level".into(), json!(zone.level().to_str()));
            properties.insert("name_ar".into(), json!(&*zone.name.ar));
            properties.insert("name_fr".into(), json!(&*zone.name.fr));
            if let Some(region) = &zone.parents.region {
                properties.insert("region_id".into(), json!(&*region.id));
            }
            if let Some(sub_region) = &zone.parents.sub_region {
                properties.insert("sub_region_id".into(), json!(&*sub_region.id));
            }
            properties.insert("has_agencies".into(), json!(zone.flags.has_agencies));
            properties.insert(
                "has_descendant_agencies".into(),
                json!(zone.flags.has_descendant_agencies),
            );

            json!({
                "type": "Feature",
                "id": &*zone.id.id,
                "geometry": multipolygon_to_geojson(&zone.shape),
                "properties": properties,
            })
        })
        .collect();

    json!({ "type": "FeatureCollection", "features": features })
}

/// GeoJSON geometry object for a multi-polygon. Each polygon is its
/// exterior ring followed by its hole rings.
fn multipolygon_to_geojson(multi: &MultiPolygon<f64>) -> Value {
    let polygons: Vec<Value> = multi
        .0
        .iter()
        .map(|polygon| {
            let mut rings = vec![ring_coords(polygon.exterior())];
            rings.extend(polygon.interiors().iter().map(ring_coords));
            json!(rings)
        })
        .collect();
    json!({ "type": "MultiPolygon", "coordinates": polygons })
}

fn ring_coords(ring: &LineString<f64>) -> Value {
    let coords: Vec<Value> = ring.coords().map(|coord| json!([coord.x, coord.y])).collect();
    json!(coords)
}

/// Cluster set as a GeoJSON FeatureCollection of marker points.
///
/// Member ids ride along in the properties so the host can hit-test a
/// marker back to its individual records without another resolve pass.
pub fn clusters_to_geojson(clusters: &[Cluster]) -> Value {
    let features: Vec<Value> = clusters
        .iter()
        .map(|cluster| {
            json!({
                "type": "Feature",
                "id": cluster.id(),
                "geometry": {
                    "type": "Point",
                    "coordinates": [cluster.position.lon, cluster.position.lat],
                },
                "properties": {
                    "zone_id": &*cluster.zone.id,
                    "zone_level": cluster.zone.level.to_str(),
                    "category": cluster.category.to_str(),
                    "count": cluster.count(),
                    "members": cluster.members.iter().map(|id| json!(&**id)).collect::<Vec<_>>(),
                    "name_ar": &*cluster.zone_name.ar,
                    "name_fr": &*cluster.zone_name.fr,
                    "anchor": [cluster.anchor.lon, cluster.anchor.lat],
                },
            })
        })
        .collect();

    json!({ "type": "FeatureCollection", "features": features })
}

/// Bounding box in the `[min_lon, min_lat, max_lon, max_lat]` form that
/// camera-fit calls take.
pub fn bbox_array(rect: Rect<f64>) -> [f64; 4] {
    [rect.min().x, rect.min().y, rect.max().x, rect.max().y]
}
