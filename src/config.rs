use crate::consts::{DEFAULT_CONTAINER_BLOCK, DEFAULT_PLACEHOLDER};
use crate::error::{KeyLegendError, KlResult};
use clap::Args;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

#[derive(Args, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Name of the block that holds every layer.
    #[arg(long, default_value = DEFAULT_CONTAINER_BLOCK)]
    pub container_block: String,

    /// Symbol used for grid cells with no binding.
    #[arg(long, default_value = DEFAULT_PLACEHOLDER)]
    pub placeholder: String,

    // Raw layer name -> display name. File-only; takes precedence over the built-ins.
    // A `display_names` map in a file replaces these defaults rather than merging.
    #[arg(skip = default_display_names())]
    pub display_names: BTreeMap<String, String>,
}

fn default_display_names() -> BTreeMap<String, String> {
    BTreeMap::from([("layer_6".to_string(), "Settings".to_string())])
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            container_block: DEFAULT_CONTAINER_BLOCK.to_string(),
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            display_names: default_display_names(),
        }
    }
}

impl LayoutConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> KlResult<Self> {
        let content = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> KlResult<()> {
        if self.container_block.trim().is_empty() {
            return Err(KeyLegendError::Config(
                "container_block must not be empty".to_string(),
            ));
        }
        if !self
            .container_block
            .chars()
            .all(|c| c.is_alphanumeric() || c == '_')
        {
            return Err(KeyLegendError::Config(format!(
                "container_block '{}' is not an identifier",
                self.container_block
            )));
        }
        if self.placeholder.is_empty() {
            return Err(KeyLegendError::Config(
                "placeholder must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    pub fn with_display_name(mut self, layer: &str, display: &str) -> Self {
        self.display_names
            .insert(layer.to_string(), display.to_string());
        self
    }
}
