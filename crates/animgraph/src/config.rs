use crate::Result;
use animgraph_core::{DEFAULT_MAX_DEPTH, ExtractOptions};
use animgraph_layout::LayoutOptions;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Everything [`crate::load`] can be tuned with.
///
/// Deserializes from partial JSON, e.g. `{"extract": {"allRoots": true}}`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    pub extract: ExtractConfig,
    pub layout: LayoutOptions,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExtractConfig {
    pub max_depth: usize,
    pub all_roots: bool,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            all_roots: false,
        }
    }
}

impl ExtractConfig {
    pub fn to_options(&self) -> ExtractOptions {
        ExtractOptions::default()
            .with_max_depth(self.max_depth)
            .with_all_roots(self.all_roots)
    }
}

impl Config {
    pub fn from_value(value: Value) -> Result<Self> {
        Ok(serde_json::from_value(value)?)
    }

    pub fn from_json_str(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }
}
