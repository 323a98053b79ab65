use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::sort::RELEVANCE;

fn default_sort_param() -> String {
    "sort".to_string()
}

fn default_sentinel() -> String {
    RELEVANCE.to_string()
}

/// Synchronization settings, supplied by the host (embedded or via TOML).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncConfig {
    /// Query parameter that carries the sort order.
    #[serde(default = "default_sort_param")]
    pub sort_param: String,
    /// Selection value meaning "no sort"; selecting it removes the parameter.
    #[serde(default = "default_sentinel")]
    pub sentinel: String,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            sort_param: default_sort_param(),
            sentinel: default_sentinel(),
        }
    }
}

impl SyncConfig {
    /// Parses a TOML fragment, e.g. a table the host carved out of its own
    /// config file. Missing fields fall back to the defaults.
    pub fn from_toml_str(doc: &str) -> Result<Self> {
        Ok(toml::from_str(doc)?)
    }
}
