mod bbox;
mod bounds;
mod normalize;

pub use bounds::{bounds_of, bounds_of_all};
pub use normalize::{COORD_DECIMALS, normalize};
pub(crate) use bbox::ZoneBounds;
