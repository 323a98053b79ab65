//! Sort-order vocabulary: the values the sort control can put in the URL.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Selection value meaning "no sort": the default relevance ranking.
/// It never appears in the URL; selecting it removes the sort key.
pub const RELEVANCE: &str = "relevance";

/// A selectable sort order, tagged exactly as it appears in the query string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOrder {
    /// Most recent first (`sort=date`).
    #[serde(rename = "date")]
    Newest,
    /// Oldest first (`sort=-date`).
    #[serde(rename = "-date")]
    Oldest,
    /// Alphabetical by name (`sort=name`).
    #[serde(rename = "name")]
    Alphabetical,
}

impl SortOrder {
    /// Every recognized sort order, in control display order.
    pub const ALL: [SortOrder; 3] = [SortOrder::Newest, SortOrder::Oldest, SortOrder::Alphabetical];

    /// The query-parameter value tag for this order.
    pub fn as_param_value(&self) -> &'static str {
        match self {
            SortOrder::Newest => "date",
            SortOrder::Oldest => "-date",
            SortOrder::Alphabetical => "name",
        }
    }

    /// Parses a query-parameter value tag. Unknown tags (including the
    /// relevance sentinel) yield `None`.
    pub fn from_param_value(value: &str) -> Option<SortOrder> {
        match value {
            "date" => Some(SortOrder::Newest),
            "-date" => Some(SortOrder::Oldest),
            "name" => Some(SortOrder::Alphabetical),
            _ => None,
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_param_value())
    }
}
