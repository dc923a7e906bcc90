mod aggregate;
mod attrs;
mod feature;
mod id;
mod index;
mod level;

pub use aggregate::{Aggregation, Fragment, FragmentAttrs, aggregate};
pub use attrs::{BilingualName, ParentRefs, ZoneFlags};
pub use feature::Zone;
pub use id::ZoneId;
pub use level::ZoneLevel;
pub(crate) use index::ZoneIndex;
