use std::fmt;
use std::sync::Arc;

use super::level::ZoneLevel;

/// Stable key of a zone: its level plus the id text the source data uses at
/// that level. The text is shared, not copied, when ids fan out into
/// assignments and clusters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ZoneId {
    pub level: ZoneLevel,
    pub id: Arc<str>,
}

impl ZoneId {
    pub fn new(level: ZoneLevel, id: &str) -> Self {
        Self { level, id: Arc::from(id) }
    }
}

impl fmt::Display for ZoneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.level.to_str(), self.id)
    }
}
