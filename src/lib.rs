pub mod config;
pub mod consts;
pub mod diagnostics;
pub mod discovery;
pub mod error;
pub mod grid;
pub mod layer;
pub mod naming;
pub mod parser;
pub mod scanner;
pub mod tokenizer;
pub mod translate;

// Re-export the pipeline surface so callers can use keylegend::* directly
pub use crate::config::LayoutConfig;
pub use crate::diagnostics::{Diagnostic, DiagnosticSink, FnSink, NullSink, SkipReason, TracingSink};
pub use crate::error::{KeyLegendError, KlResult};
pub use crate::grid::Grid;
pub use crate::layer::{Layer, LayerDescriptor};
pub use crate::parser::{parse_keymap, KeymapParser};
