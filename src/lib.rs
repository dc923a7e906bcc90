#![doc = "Zonemap public API"]
mod cluster;
mod common;
mod geom;
mod poi;
mod report;
mod zone;

#[doc(inline)]
pub use zone::{
    Aggregation, BilingualName, Fragment, FragmentAttrs, ParentRefs, Zone, ZoneFlags, ZoneId,
    ZoneLevel, aggregate,
};

#[doc(inline)]
pub use poi::{MarkerCategory, Poi, PoiKind};

#[doc(inline)]
pub use cluster::{
    Cluster, Clustering, DEFAULT_SPACING, LatLon, ZoneAssignment, assign_zones, build_clusters,
    resolve_zone,
};

#[doc(inline)]
pub use geom::{COORD_DECIMALS, bounds_of, bounds_of_all, normalize};

#[doc(inline)]
pub use report::{InvalidGeometry, Issue};

#[doc(inline)]
pub use common::{
    bbox_array, clusters_to_geojson, fingerprint_points, fingerprint_zones,
    fragments_from_geojson, pois_from_json, zones_to_geojson,
};
