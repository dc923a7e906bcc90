// Ingest-to-export flow over the JSON codecs: boundary GeoJSON in, zone
// and cluster FeatureCollections out, with fingerprints over the results.

use zonemap::{
    DEFAULT_SPACING, ZoneLevel, aggregate, bbox_array, bounds_of_all, build_clusters,
    clusters_to_geojson, fingerprint_points, fingerprint_zones, fragments_from_geojson,
    pois_from_json, zones_to_geojson,
};

use geo::{Coord, Rect};

const BOUNDARIES: &str = r#"{
    "type": "FeatureCollection",
    "features": [
        {
            "type": "Feature",
            "properties": {
                "id": "16", "name_ar": "مقاطعة", "name_fr": "Prefecture",
                "region_id": "7", "has_agencies": false, "has_descendant_agencies": true
            },
            "geometry": {
                "type": "Polygon",
                "coordinates": [[[0.0, 0.0], [2.0, 0.0], [2.0, 2.0], [0.0, 2.0], [0.0, 0.0]]]
            }
        },
        {
            "type": "Feature",
            "properties": { "id": "16", "region_id": "7" },
            "geometry": {
                "type": "Polygon",
                "coordinates": [[[2.0, 0.0], [4.0, 0.0], [4.0, 2.0], [2.0, 2.0], [2.0, 0.0]]]
            }
        },
        {
            "type": "Feature",
            "properties": { "id": "17", "name_fr": "Province", "region_id": "7" },
            "geometry": {
                "type": "Polygon",
                "coordinates": [[[5.0, 0.0], [7.0, 0.0], [7.0, 2.0], [5.0, 2.0], [5.0, 0.0]]]
            }
        }
    ]
}"#;

const POINTS: &str = r#"[
    { "id": "s1", "category": "driving_school", "latitude": 1.0, "longitude": 1.0,
      "agencies": ["agency-4"] },
    { "id": "s2", "category": "driving_school", "latitude": 1.0, "longitude": 3.0 },
    { "id": "e1", "category": "exam_center", "latitude": 1.0, "longitude": 6.0 },
    { "id": "lost", "category": "exam_center" }
]"#;

#[test]
fn boundary_collections_become_zone_collections() {
    let fragments = fragments_from_geojson(BOUNDARIES.as_bytes()).unwrap();
    let result = aggregate(ZoneLevel::SubRegion, fragments);
    assert!(result.is_clean());
    assert_eq!(result.zones.len(), 2);

    let doc = zones_to_geojson(&result.zones);
    let features = doc["features"].as_array().unwrap();
    assert_eq!(features.len(), 2);
    assert_eq!(features[0]["properties"]["id"], "16");
    assert_eq!(features[0]["properties"]["name_fr"], "Prefecture");
    assert_eq!(features[0]["properties"]["region_id"], "7");
    assert_eq!(features[0]["properties"]["has_descendant_agencies"], true);
    assert_eq!(features[0]["properties"]["level"], "sub-region");
    assert_eq!(features[1]["properties"]["id"], "17");
}

#[test]
fn point_records_cluster_and_export_with_membership() {
    let fragments = fragments_from_geojson(BOUNDARIES.as_bytes()).unwrap();
    let zones = aggregate(ZoneLevel::SubRegion, fragments).zones;
    let points = pois_from_json(POINTS.as_bytes()).unwrap();

    let clustering = build_clusters(&points, &zones, DEFAULT_SPACING);
    // Zone 16: an affiliated and an independent school. Zone 17: one exam
    // center. The record without coordinates joins nothing.
    assert_eq!(clustering.clusters.len(), 3);
    assert_eq!(clustering.unassigned.len(), 1);
    assert_eq!(&*clustering.unassigned[0], "lost");
    assert_eq!(
        clustering.member_count() + clustering.unassigned.len() + clustering.skipped.len(),
        points.len()
    );

    let doc = clusters_to_geojson(&clustering.clusters);
    let features = doc["features"].as_array().unwrap();
    assert_eq!(features.len(), 3);
    assert_eq!(features[0]["id"], "16:affiliated_school");
    assert_eq!(features[0]["properties"]["members"][0], "s1");
    assert_eq!(features[1]["id"], "16:independent_school");
    assert_eq!(features[2]["id"], "17:exam_center");
    assert_eq!(features[2]["properties"]["count"], 1);
}

#[test]
fn fingerprints_are_stable_across_reingestion() {
    let first = aggregate(
        ZoneLevel::SubRegion,
        fragments_from_geojson(BOUNDARIES.as_bytes()).unwrap(),
    );
    let second = aggregate(
        ZoneLevel::SubRegion,
        fragments_from_geojson(BOUNDARIES.as_bytes()).unwrap(),
    );
    assert_eq!(fingerprint_zones(&first.zones), fingerprint_zones(&second.zones));

    let points = pois_from_json(POINTS.as_bytes()).unwrap();
    let reread = pois_from_json(POINTS.as_bytes()).unwrap();
    assert_eq!(fingerprint_points(&points), fingerprint_points(&reread));
}

#[test]
fn camera_bbox_spans_the_ingested_zones() {
    let fragments = fragments_from_geojson(BOUNDARIES.as_bytes()).unwrap();
    let zones = aggregate(ZoneLevel::SubRegion, fragments).zones;
    let fallback = Rect::new(Coord { x: -1.0, y: -1.0 }, Coord { x: 1.0, y: 1.0 });

    let bbox = bbox_array(bounds_of_all(&zones, fallback));
    assert!((bbox[0] - 0.0).abs() < 1e-6);
    assert!((bbox[1] - 0.0).abs() < 1e-6);
    assert!((bbox[2] - 7.0).abs() < 1e-6);
    assert!((bbox[3] - 2.0).abs() < 1e-6);

    assert_eq!(bbox_array(bounds_of_all(&[], fallback)), [-1.0, -1.0, 1.0, 1.0]);
}
