use std::sync::Arc;

use super::id::ZoneId;
use super::level::ZoneLevel;

/// Display name of a zone in both supported locales.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BilingualName {
    pub ar: Arc<str>,
    pub fr: Arc<str>,
}

impl BilingualName {
    pub fn new(ar: &str, fr: &str) -> Self {
        Self { ar: Arc::from(ar), fr: Arc::from(fr) }
    }
}

/// Presence flags carried on a zone, used by the host for styling and for
/// pruning empty drill-down branches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ZoneFlags {
    /// At least one agency sits directly in the zone.
    pub has_agencies: bool,
    /// Some zone below this one has an agency.
    pub has_descendant_agencies: bool,
}

impl ZoneFlags {
    /// OR-combine, used when reducing flags across a fragment group.
    pub fn merge(self, other: ZoneFlags) -> ZoneFlags {
        ZoneFlags {
            has_agencies: self.has_agencies || other.has_agencies,
            has_descendant_agencies: self.has_descendant_agencies
                || other.has_descendant_agencies,
        }
    }
}

/// References to the zones enclosing this one. A region has none, a
/// sub-region knows its region, a locality knows both.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParentRefs {
    pub region: Option<ZoneId>,
    pub sub_region: Option<ZoneId>,
}

impl ParentRefs {
    /// Parent reference at the given level. Localities cannot be parents,
    /// so asking for one always yields `None`.
    pub fn get(&self, level: ZoneLevel) -> Option<&ZoneId> {
        match level {
            ZoneLevel::Region => self.region.as_ref(),
            ZoneLevel::SubRegion => self.sub_region.as_ref(),
            ZoneLevel::Locality => None,
        }
    }
}
