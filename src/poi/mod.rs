mod category;
mod point;

pub use category::{MarkerCategory, PoiKind};
pub use point::Poi;
