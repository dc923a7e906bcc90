mod fingerprint;
mod geojson;

pub use fingerprint::{fingerprint_points, fingerprint_zones};
pub use geojson::{
    bbox_array, clusters_to_geojson, fragments_from_geojson, pois_from_json, zones_to_geojson,
};
