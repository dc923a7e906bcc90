use serde::Deserialize;

use super::point::Poi;

/// Category tag on a point-of-interest record, as tagged by the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PoiKind {
    DrivingSchool,
    ExamCenter,
    TrainingTrack,
}

/// Render category of a cluster marker.
///
/// Driving schools split on agency affiliation; the other kinds map one to
/// one. `ALL` fixes the canonical layout order, so marker slots never depend
/// on the order points happened to arrive in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MarkerCategory {
    AffiliatedSchool,
    IndependentSchool,
    ExamCenter,
    TrainingTrack,
}

impl MarkerCategory {
    /// Every category, in canonical layout order.
    pub const ALL: [MarkerCategory; 4] = [
        MarkerCategory::AffiliatedSchool,
        MarkerCategory::IndependentSchool,
        MarkerCategory::ExamCenter,
        MarkerCategory::TrainingTrack,
    ];

    /// Render category of a point, applying the driving-school split.
    pub fn of(point: &Poi) -> MarkerCategory {
        match point.kind {
            PoiKind::DrivingSchool if point.affiliated() => MarkerCategory::AffiliatedSchool,
            PoiKind::DrivingSchool => MarkerCategory::IndependentSchool,
            PoiKind::ExamCenter => MarkerCategory::ExamCenter,
            PoiKind::TrainingTrack => MarkerCategory::TrainingTrack,
        }
    }

    /// Position in [`MarkerCategory::ALL`].
    #[inline]
    pub(crate) fn slot(&self) -> usize {
        *self as usize
    }

    pub fn to_str(&self) -> &'static str {
        match self {
            MarkerCategory::AffiliatedSchool => "affiliated_school",
            MarkerCategory::IndependentSchool => "independent_school",
            MarkerCategory::ExamCenter => "exam_center",
            MarkerCategory::TrainingTrack => "training_track",
        }
    }
}
