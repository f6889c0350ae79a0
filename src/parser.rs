use crate::config::LayoutConfig;
use crate::diagnostics::{Diagnostic, DiagnosticSink, SkipReason, TracingSink};
use crate::discovery::{discover_layer_names, LayerLocator};
use crate::error::KlResult;
use crate::grid::Grid;
use crate::layer::{Layer, LayerDescriptor};
use crate::naming::{describe, display_name};
use crate::scanner::find_block_body;
use crate::tokenizer::{extract_bindings_text, tokenize};
use crate::translate::translate_binding;
use std::collections::HashSet;
use tracing::debug;

/// Runs the whole pipeline: container block, layer names, layer spans,
/// tokens, symbols, grid.
///
/// Holds no state between calls; parsing the same text twice yields equal
/// output.
#[derive(Debug, Clone, Default)]
pub struct KeymapParser {
    config: LayoutConfig,
}

impl KeymapParser {
    pub fn new(config: LayoutConfig) -> KlResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Finds every layer that has a bindings list, in document order.
    /// Layers that cannot be isolated are reported and skipped.
    pub fn descriptors<'a>(
        &self,
        text: &'a str,
        sink: &mut dyn DiagnosticSink,
    ) -> Vec<LayerDescriptor<'a>> {
        let Some(container) = find_block_body(text, &self.config.container_block) else {
            sink.emit(Diagnostic::ContainerMissing {
                block: self.config.container_block.clone(),
            });
            return Vec::new();
        };
        debug!(
            "Container '{}': {} bytes",
            self.config.container_block,
            container.len()
        );

        let names = discover_layer_names(container);
        let locator = LayerLocator::new(container, &names);
        let mut seen = HashSet::new();
        let mut descriptors = Vec::with_capacity(names.len());

        for name in names {
            if !seen.insert(name.clone()) {
                sink.emit(Diagnostic::DuplicateLayerName { name: name.clone() });
            }
            sink.emit(Diagnostic::LayerDiscovered { name: name.clone() });

            let Some(span) = locator.span(&name) else {
                sink.emit(Diagnostic::LayerSkipped {
                    name,
                    reason: SkipReason::BlockNotFound,
                });
                continue;
            };
            let Some(raw_bindings) = extract_bindings_text(span) else {
                sink.emit(Diagnostic::LayerSkipped {
                    name,
                    reason: SkipReason::BindingsNotFound,
                });
                continue;
            };
            debug!(
                "Layer '{}': span {} bytes, bindings {} bytes",
                name,
                span.len(),
                raw_bindings.len()
            );

            descriptors.push(LayerDescriptor { name, raw_bindings });
        }

        descriptors
    }

    pub fn parse(&self, text: &str, sink: &mut dyn DiagnosticSink) -> Vec<Layer> {
        self.descriptors(text, sink)
            .into_iter()
            .map(|descriptor| self.build_layer(descriptor, sink))
            .collect()
    }

    fn build_layer(&self, descriptor: LayerDescriptor<'_>, sink: &mut dyn DiagnosticSink) -> Layer {
        let tokens = tokenize(descriptor.raw_bindings);
        debug!("Layer '{}': {} tokens", descriptor.name, tokens.len());

        let symbols: Vec<String> = tokens.iter().map(|t| translate_binding(t)).collect();
        let grid = Grid::assemble(&symbols, &self.config.placeholder);

        if grid.discarded > 0 {
            sink.emit(Diagnostic::BindingOverflow {
                layer: descriptor.name.clone(),
                discarded: grid.discarded,
            });
        }

        let display = display_name(&descriptor.name, &self.config.display_names);
        let cells: Vec<&str> = grid.cells().map(String::as_str).collect();
        let description = describe(&descriptor.name, &display, &cells);

        Layer {
            name: descriptor.name,
            display_name: display,
            description,
            grid,
            binding_count: tokens.len(),
        }
    }
}

/// Parses with the default configuration, logging diagnostics via `tracing`.
pub fn parse_keymap(text: &str) -> Vec<Layer> {
    KeymapParser::default().parse(text, &mut TracingSink)
}
