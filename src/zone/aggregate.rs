use std::sync::Arc;

use ahash::AHashMap;
use geo::{BooleanOps, Geometry, MultiPolygon, Polygon};

use crate::geom::normalize;
use crate::report::Issue;

use super::attrs::{BilingualName, ParentRefs, ZoneFlags};
use super::feature::Zone;
use super::id::ZoneId;
use super::level::ZoneLevel;

/// One raw boundary record as delivered by the source data: a grouping key,
/// a raw geometry, and the attributes that came with it. The source splits
/// many zones into several rows with the same key; fragments sharing a key
/// merge into one zone.
#[derive(Debug, Clone)]
pub struct Fragment {
    pub key: Arc<str>,
    pub geometry: Geometry<f64>,
    pub attrs: FragmentAttrs,
}

/// Attributes carried on a boundary fragment.
#[derive(Debug, Clone, Default)]
pub struct FragmentAttrs {
    pub name: BilingualName,
    /// Id of the enclosing region, set on sub-region and locality rows.
    pub region: Option<Arc<str>>,
    /// Id of the enclosing sub-region, set on locality rows.
    pub sub_region: Option<Arc<str>>,
    pub flags: ZoneFlags,
}

/// Output of [`aggregate`]: merged zones plus every scoped failure met
/// along the way. Issues and zones are not exclusive; a run can produce
/// both.
#[derive(Debug, Clone)]
pub struct Aggregation {
    /// One zone per key, ordered by first appearance of the key.
    pub zones: Vec<Zone>,
    pub issues: Vec<Issue>,
}

impl Aggregation {
    /// True when every fragment made it into a zone.
    #[inline]
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    /// Zone whose id text matches, if any.
    pub fn zone(&self, id: &str) -> Option<&Zone> {
        self.zones.iter().find(|zone| &*zone.id.id == id)
    }
}

struct Group {
    key: Arc<str>,
    /// Attributes of the first fragment seen for the key.
    attrs: FragmentAttrs,
    /// Flags OR-reduced over every fragment of the key.
    flags: ZoneFlags,
    polygons: Vec<Polygon<f64>>,
}

/// Merge raw boundary fragments into one zone per key at the given level.
///
/// Groups come out in the order their key first appeared. A fragment whose
/// geometry fails normalization is dropped and recorded; the rest of its
/// group, and every other group, still aggregates. Names and parent ids are
/// taken from the first fragment of each group, flags are OR-reduced over
/// all of them.
pub fn aggregate(level: ZoneLevel, fragments: Vec<Fragment>) -> Aggregation {
    let mut groups: Vec<Group> = Vec::new();
    let mut slots: AHashMap<Arc<str>, usize> = AHashMap::new();
    let mut issues = Vec::new();

    for (position, fragment) in fragments.into_iter().enumerate() {
        let slot = *slots.entry(fragment.key.clone()).or_insert_with(|| {
            groups.push(Group {
                key: fragment.key.clone(),
                attrs: fragment.attrs.clone(),
                flags: ZoneFlags::default(),
                polygons: Vec::new(),
            });
            groups.len() - 1
        });

        let group = &mut groups[slot];
        group.flags = group.flags.merge(fragment.attrs.flags);

        match normalize(&fragment.geometry) {
            Ok(shape) => group.polygons.extend(shape.0),
            Err(error) => {
                issues.push(Issue::InvalidFragment { key: fragment.key.clone(), position, error })
            }
        }
    }

    let mut zones = Vec::with_capacity(groups.len());
    for group in groups {
        let Some(shape) = merge_polygons(&group.polygons) else {
            issues.push(if group.polygons.is_empty() {
                Issue::EmptyGroup { key: group.key }
            } else {
                Issue::UnionFailure { key: group.key }
            });
            continue;
        };

        zones.push(Zone::new(
            ZoneId::new(level, &group.key),
            group.attrs.name.clone(),
            parent_refs(level, &group.attrs),
            group.flags,
            shape,
        ));
    }

    Aggregation { zones, issues }
}

/// Union a group's polygons into one multi-polygon.
///
/// A single polygon needs no union; several merge pairwise. `None` when the
/// group holds nothing or the merge collapses to an empty shape.
fn merge_polygons(polygons: &[Polygon<f64>]) -> Option<MultiPolygon<f64>> {
    let merged = match polygons {
        [] => return None,
        [single] => MultiPolygon(vec![single.clone()]),
        many => many
            .iter()
            .map(|polygon| MultiPolygon(vec![polygon.clone()]))
            .reduce(|a, b| a.union(&b))?,
    };
    (!merged.0.is_empty()).then_some(merged)
}

/// Parent references applicable at the aggregated level. Ids named by the
/// attributes but not applicable at the level are discarded.
fn parent_refs(level: ZoneLevel, attrs: &FragmentAttrs) -> ParentRefs {
    let region = attrs.region.as_deref().map(|id| ZoneId::new(ZoneLevel::Region, id));
    let sub_region = attrs.sub_region.as_deref().map(|id| ZoneId::new(ZoneLevel::SubRegion, id));

    match level {
        ZoneLevel::Region => ParentRefs::default(),
        ZoneLevel::SubRegion => ParentRefs { region, sub_region: None },
        ZoneLevel::Locality => ParentRefs { region, sub_region },
    }
}
