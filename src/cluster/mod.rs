mod build;
mod layout;
mod resolve;

pub use build::{Cluster, Clustering, LatLon, build_clusters};
pub use layout::DEFAULT_SPACING;
pub use resolve::{ZoneAssignment, assign_zones, resolve_zone};
