use crate::grid::{Grid, Row};
use serde::{Deserialize, Serialize};

/// Transient per-layer record: a discovered name and its raw bindings text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayerDescriptor<'a> {
    pub name: String,
    pub raw_bindings: &'a str,
}

/// One fully translated layer, ready for a renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Layer {
    pub name: String,
    pub display_name: String,
    pub description: String,
    pub grid: Grid,
    /// Tokens found in the source, before packing.
    pub binding_count: usize,
}

impl Layer {
    pub fn rows(&self) -> &[Row] {
        &self.grid.rows
    }

    pub fn thumb_row(&self) -> Option<&[String]> {
        self.grid.thumb_row.as_deref()
    }

    pub fn discarded(&self) -> usize {
        self.grid.discarded
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
