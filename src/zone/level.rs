/// The three nested administrative granularities, outermost first.
///
/// The drill-down surface walks one level at a time: the country view shows
/// regions, a region opens into sub-regions, a sub-region into localities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ZoneLevel {
    Region,
    SubRegion,
    Locality,
}

impl ZoneLevel {
    /// All levels in drill-down order.
    pub const ALL: [ZoneLevel; 3] = [ZoneLevel::Region, ZoneLevel::SubRegion, ZoneLevel::Locality];

    pub fn to_str(&self) -> &'static str {
        match self {
            ZoneLevel::Region => "region",
            ZoneLevel::SubRegion => "sub-region",
            ZoneLevel::Locality => "locality",
        }
    }

    /// The enclosing level, `None` at the top.
    pub fn parent(&self) -> Option<ZoneLevel> {
        match self {
            ZoneLevel::Region => None,
            ZoneLevel::SubRegion => Some(ZoneLevel::Region),
            ZoneLevel::Locality => Some(ZoneLevel::SubRegion),
        }
    }

    /// The level one drill-down step deeper, `None` at the bottom.
    pub fn child(&self) -> Option<ZoneLevel> {
        match self {
            ZoneLevel::Region => Some(ZoneLevel::SubRegion),
            ZoneLevel::SubRegion => Some(ZoneLevel::Locality),
            ZoneLevel::Locality => None,
        }
    }
}
