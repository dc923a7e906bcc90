/// Default spacing between category markers, in degrees of longitude.
pub const DEFAULT_SPACING: f64 = 0.05;

/// Longitude offset of slot `i` among `total` markers laid out on one
/// horizontal line centered on the anchor.
///
/// A single marker sits exactly on the anchor. Odd counts keep the middle
/// marker there; even counts straddle it. Offsets are symmetric either way.
#[inline]
pub(crate) fn slot_offset(i: usize, total: usize, spacing: f64) -> f64 {
    spacing * (i as f64 - (total as f64 - 1.0) / 2.0)
}
