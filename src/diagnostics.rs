//! Structured diagnostics emitted while a keymap is parsed.
//!
//! Nothing in the parsing core is fatal. Every condition worth reporting is
//! turned into a [`Diagnostic`] and handed to a caller-supplied
//! [`DiagnosticSink`], so the host decides where (or whether) it ends up.

use strum_macros::Display;
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "snake_case")]
pub enum SkipReason {
    /// `<name> {` could not be found again when isolating the layer span.
    BlockNotFound,
    /// The layer span has no `bindings = < ... >` construct.
    BindingsNotFound,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    ContainerMissing { block: String },
    LayerDiscovered { name: String },
    DuplicateLayerName { name: String },
    LayerSkipped { name: String, reason: SkipReason },
    BindingOverflow { layer: String, discarded: usize },
}

pub trait DiagnosticSink {
    fn emit(&mut self, diagnostic: Diagnostic);
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn emit(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

/// Adapts a closure into a sink.
pub struct FnSink<F>(pub F);

impl<F> DiagnosticSink for FnSink<F>
where
    F: FnMut(&Diagnostic),
{
    fn emit(&mut self, diagnostic: Diagnostic) {
        (self.0)(&diagnostic);
    }
}

/// Drops everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn emit(&mut self, _diagnostic: Diagnostic) {}
}

/// Forwards diagnostics to `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn emit(&mut self, diagnostic: Diagnostic) {
        match diagnostic {
            Diagnostic::ContainerMissing { block } => {
                warn!("No '{}' block found, no layers to extract", block)
            }
            Diagnostic::LayerDiscovered { name } => info!("Layer discovered: {}", name),
            Diagnostic::DuplicateLayerName { name } => {
                warn!("Layer name '{}' appears more than once", name)
            }
            Diagnostic::LayerSkipped { name, reason } => {
                warn!("Layer '{}' skipped: {}", name, reason)
            }
            Diagnostic::BindingOverflow { layer, discarded } => {
                warn!("Layer '{}': {} bindings past the thumb row ignored", layer, discarded)
            }
        }
    }
}
