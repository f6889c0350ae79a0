use crate::consts::BINDINGS_MARKER;
use crate::scanner::balanced_end;
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

static BLOCK_HEAD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\w+)\s*\{").expect("block head pattern"));

/// Lists layer names inside the container body, in scan order.
///
/// Every `identifier {` anywhere in the text is a candidate (nested ones
/// included). A candidate is accepted when its balanced body mentions
/// `bindings` somewhere. Duplicates are kept.
pub fn discover_layer_names(container: &str) -> Vec<String> {
    let mut names = Vec::new();

    for caps in BLOCK_HEAD.captures_iter(container) {
        let (Some(head), Some(name)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        let body_start = head.end();
        let body_end = balanced_end(container, body_start);
        let body = &container[body_start..body_end];

        if body.contains(BINDINGS_MARKER) {
            debug!("Candidate '{}' accepted ({} bytes)", name.as_str(), body.len());
            names.push(name.as_str().to_string());
        }
    }

    names
}

/// Cuts the container text into per-layer spans.
///
/// A layer's span runs from its own `<name> {` to the nearest `{`-headed
/// occurrence of any other discovered name that follows it, or to the end of
/// the text.
pub struct LayerLocator<'a> {
    text: &'a str,
    heads: Vec<(String, Regex)>,
}

impl<'a> LayerLocator<'a> {
    pub fn new(text: &'a str, names: &[String]) -> Self {
        let mut heads: Vec<(String, Regex)> = Vec::with_capacity(names.len());
        for name in names {
            if heads.iter().any(|(seen, _)| seen == name) {
                continue;
            }
            if let Ok(re) = Regex::new(&format!(r"{}\s*\{{", regex::escape(name))) {
                heads.push((name.clone(), re));
            }
        }
        Self { text, heads }
    }

    pub fn span(&self, name: &str) -> Option<&'a str> {
        let (_, head) = self.heads.iter().find(|(n, _)| n == name)?;
        let start_match = head.find(self.text)?;
        let start = start_match.start();
        let search_from = start_match.end();

        let end = self
            .heads
            .iter()
            .filter(|(other, _)| other != name)
            .filter_map(|(_, re)| re.find_at(self.text, search_from).map(|m| m.start()))
            .min()
            .unwrap_or(self.text.len());

        Some(&self.text[start..end])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_blocks_without_bindings_are_ignored() {
        let container = "compatible = \"zmk,keymap\"; base { bindings = <&kp A>; }; \
                         meta { label = \"x\"; };";
        assert_eq!(discover_layer_names(container), vec!["base".to_string()]);
    }

    #[test]
    fn test_span_stops_at_next_layer() {
        let container = "one { bindings = <&kp A>; }; two { bindings = <&kp B>; };";
        let names = discover_layer_names(container);
        let locator = LayerLocator::new(container, &names);
        assert_eq!(locator.span("one"), Some("one { bindings = <&kp A>; }; "));
        assert_eq!(locator.span("two"), Some("two { bindings = <&kp B>; };"));
    }

    #[test]
    fn test_span_of_unknown_name() {
        let locator = LayerLocator::new("a { bindings }", &["a".to_string()]);
        assert!(locator.span("b").is_none());
    }
}
