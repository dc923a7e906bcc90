use std::sync::Arc;

use ahash::AHashMap;
use geo::Point;
use smallvec::SmallVec;

use crate::poi::{MarkerCategory, Poi};
use crate::report::Issue;
use crate::zone::{BilingualName, Zone, ZoneId, ZoneIndex};

use super::layout::slot_offset;

/// Geographic position in the latitude-first orientation the rendering
/// surface expects.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLon {
    pub lat: f64,
    pub lon: f64,
}

impl From<Point<f64>> for LatLon {
    fn from(point: Point<f64>) -> Self {
        Self { lat: point.y(), lon: point.x() }
    }
}

/// A renderable marker: every point of one category inside one zone.
#[derive(Debug, Clone, PartialEq)]
pub struct Cluster {
    pub zone: ZoneId,
    pub category: MarkerCategory,
    /// Ids of the member points, in input order.
    pub members: Vec<Arc<str>>,
    /// Anchor the zone's markers are laid out around.
    pub anchor: LatLon,
    /// Where this marker renders: the anchor shifted along the layout line.
    pub position: LatLon,
    /// Zone display names, carried so the host needs no second lookup.
    pub zone_name: BilingualName,
}

impl Cluster {
    /// Stable identifier: zone id text plus category tag.
    pub fn id(&self) -> String {
        format!("{}:{}", self.zone.id, self.category.to_str())
    }

    #[inline]
    pub fn count(&self) -> usize {
        self.members.len()
    }
}

/// Output of [`build_clusters`]: the markers plus the bookkeeping that makes
/// every input point accountable.
#[derive(Debug, Clone)]
pub struct Clustering {
    pub clusters: Vec<Cluster>,
    /// Points outside every zone, in input order. The host may still render
    /// them from their raw coordinates; they belong to no cluster.
    pub unassigned: Vec<Arc<str>>,
    /// Points whose zone had no computable anchor, in input order.
    pub skipped: Vec<Arc<str>>,
    pub issues: Vec<Issue>,
}

impl Clustering {
    /// Total members across all clusters.
    pub fn member_count(&self) -> usize {
        self.clusters.iter().map(Cluster::count).sum()
    }
}

type CategoryBuckets = [Vec<Arc<str>>; MarkerCategory::ALL.len()];

/// Group points by zone and category and lay one marker per populated
/// category on a horizontal line around the zone anchor.
///
/// Output order is deterministic: zones in slice order, categories in
/// canonical order, members in input order. Rebuilding from equal inputs
/// yields identical output, so the rendering surface can diff marker sets
/// by [`Cluster::id`].
pub fn build_clusters(points: &[Poi], zones: &[Zone], spacing: f64) -> Clustering {
    let index = ZoneIndex::new(zones);
    let mut buckets: AHashMap<usize, CategoryBuckets> = AHashMap::new();
    let mut unassigned = Vec::new();

    for point in points {
        match index.locate(point.position()) {
            Some(zone_idx) => {
                let slot = MarkerCategory::of(point).slot();
                buckets.entry(zone_idx).or_default()[slot].push(point.id.clone());
            }
            None => unassigned.push(point.id.clone()),
        }
    }

    let mut populated: Vec<usize> = buckets.keys().copied().collect();
    populated.sort_unstable();

    let mut clusters = Vec::new();
    let mut skipped = Vec::new();
    let mut issues = Vec::new();

    for zone_idx in populated {
        let Some(slots) = buckets.remove(&zone_idx) else { continue };
        let zone = &zones[zone_idx];

        let categories: SmallVec<[(MarkerCategory, Vec<Arc<str>>); MarkerCategory::ALL.len()]> =
            MarkerCategory::ALL
                .iter()
                .copied()
                .zip(slots)
                .filter(|(_, members)| !members.is_empty())
                .collect();

        let Some(anchor) = zone.anchor() else {
            issues.push(Issue::DegenerateZone { zone: zone.id.clone() });
            for (_, members) in categories {
                skipped.extend(members);
            }
            continue;
        };

        let total = categories.len();
        for (i, (category, members)) in categories.into_iter().enumerate() {
            clusters.push(Cluster {
                zone: zone.id.clone(),
                category,
                members,
                anchor: anchor.into(),
                position: LatLon {
                    lat: anchor.y(),
                    lon: anchor.x() + slot_offset(i, total, spacing),
                },
                zone_name: zone.name.clone(),
            });
        }
    }

    Clustering { clusters, unassigned, skipped, issues }
}
