#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

/// Builder for keymap source text to keep tests readable.
pub struct KeymapBuilder {
    container: String,
    layers: Vec<(String, Vec<String>)>,
}

impl KeymapBuilder {
    pub fn new() -> Self {
        Self {
            container: "keymap".to_string(),
            layers: Vec::new(),
        }
    }

    pub fn container(mut self, name: &str) -> Self {
        self.container = name.to_string();
        self
    }

    pub fn layer(mut self, name: &str, bindings: &[&str]) -> Self {
        self.layers.push((
            name.to_string(),
            bindings.iter().map(|b| b.to_string()).collect(),
        ));
        self
    }

    /// A layer of `count` distinct key presses: `&kp K0`, `&kp K1`, ...
    pub fn numbered_layer(mut self, name: &str, count: usize) -> Self {
        self.layers
            .push((name.to_string(), numbered_bindings(count)));
        self
    }

    pub fn build(self) -> String {
        let mut out = String::from("#include <behaviors.dtsi>\n\n/ {\n");
        out.push_str(&format!("    {} {{\n", self.container));
        out.push_str("        compatible = \"zmk,keymap\";\n\n");
        for (name, bindings) in &self.layers {
            out.push_str(&format!("        {} {{\n", name));
            out.push_str("            bindings = <\n");
            for row in bindings.chunks(10) {
                out.push_str(&row.join("  "));
                out.push('\n');
            }
            out.push_str("            >;\n        };\n\n");
        }
        out.push_str("    };\n};\n");
        out
    }
}

pub fn numbered_bindings(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("&kp K{}", i)).collect()
}

/// The symbols `numbered_bindings` translate to (unknown names pass through).
pub fn numbered_symbols(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("K{}", i)).collect()
}

pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

pub fn load_fixture(name: &str) -> String {
    fs::read_to_string(fixture_path(name)).expect("fixture should exist")
}
