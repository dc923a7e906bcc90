use geo::Rect;
use rstar::{AABB, RTreeObject};

/// R-tree leaf: the bounding rectangle of one zone, tagged with the zone's
/// position in the slice the index was built over.
#[derive(Debug, Clone)]
pub(crate) struct ZoneBounds {
    idx: usize,
    rect: Rect<f64>,
}

impl ZoneBounds {
    pub(crate) fn new(idx: usize, rect: Rect<f64>) -> Self {
        Self { idx, rect }
    }

    /// Position of the zone in the indexed slice.
    #[inline]
    pub(crate) fn idx(&self) -> usize {
        self.idx
    }
}

impl RTreeObject for ZoneBounds {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners(self.rect.min().into(), self.rect.max().into())
    }
}
