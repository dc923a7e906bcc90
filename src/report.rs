use std::fmt;
use std::sync::Arc;

use crate::zone::ZoneId;

/// Why a raw geometry was rejected by [`normalize`](crate::normalize).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidGeometry {
    /// The input is neither a polygon nor a multi-polygon.
    NotAreal { kind: &'static str },
    /// A coordinate is NaN or infinite.
    NonFinite { polygon: usize, ring: usize },
    /// A ring kept fewer than four coordinate pairs after rounding.
    ShortRing { polygon: usize, ring: usize, coords: usize },
}

impl fmt::Display for InvalidGeometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAreal { kind } => {
                write!(f, "geometry is {kind}, expected a polygon or multi-polygon")
            }
            Self::NonFinite { polygon, ring } => {
                write!(f, "non-finite coordinate in ring {ring} of polygon {polygon}")
            }
            Self::ShortRing { polygon, ring, coords } => {
                write!(
                    f,
                    "ring {ring} of polygon {polygon} has {coords} coordinates, at least 4 required"
                )
            }
        }
    }
}

impl std::error::Error for InvalidGeometry {}

/// A scoped failure collected during an engine pass.
///
/// Issues never abort sibling work: the operation that produced them still
/// returns its successful output, with the issues alongside as a side list.
/// "Point outside every zone" is not an issue but a defined outcome,
/// reported through `None` assignments and the unassigned list instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    /// A fragment's geometry failed normalization; the fragment was dropped.
    InvalidFragment {
        key: Arc<str>,
        /// Position of the fragment in the input sequence.
        position: usize,
        error: InvalidGeometry,
    },
    /// Every fragment of a group was dropped; the group produced no zone.
    EmptyGroup { key: Arc<str> },
    /// The polygon merge for a group produced nothing; the zone was omitted.
    UnionFailure { key: Arc<str> },
    /// A zone's anchor could not be computed; its clusters were skipped.
    DegenerateZone { zone: ZoneId },
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFragment { key, position, error } => {
                write!(f, "fragment {position} of group {key:?} dropped: {error}")
            }
            Self::EmptyGroup { key } => {
                write!(f, "group {key:?} has no valid geometry")
            }
            Self::UnionFailure { key } => {
                write!(f, "polygon merge produced no shape for group {key:?}")
            }
            Self::DegenerateZone { zone } => {
                write!(f, "no anchor for zone {zone}; its clusters were skipped")
            }
        }
    }
}
