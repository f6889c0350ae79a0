use std::collections::BTreeMap;

const SPECIAL_NAMES: &[(&str, &str)] = &[
    ("default_layer", "Default"),
    ("FUNCTION", "Function"),
    ("NUM", "Number"),
    ("ARROW", "Arrow"),
    ("MOUSE", "Mouse"),
    ("SCROLL", "Scroll"),
];

/// Human-readable name for a layer identifier.
pub fn display_name(name: &str, overrides: &BTreeMap<String, String>) -> String {
    if let Some(custom) = overrides.get(name) {
        return custom.clone();
    }
    if let Some((_, display)) = SPECIAL_NAMES.iter().find(|(raw, _)| *raw == name) {
        return display.to_string();
    }
    if let Some(number) = name.strip_prefix("layer_") {
        return format!("Layer {}", number);
    }

    // snake_case -> Title Words; only the first letter of each word changes.
    let spaced = name.replace('_', " ");
    let mut out = String::with_capacity(spaced.len());
    let mut at_word_start = true;
    for c in spaced.chars() {
        if at_word_start && c.is_alphanumeric() {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        at_word_start = !c.is_alphanumeric();
    }
    out
}

fn any_cell(cells: &[&str], pred: impl Fn(&str) -> bool) -> bool {
    cells.iter().any(|c| pred(c))
}

/// One-line summary of what a layer is for, guessed from its symbols.
pub fn describe(name: &str, display: &str, cells: &[&str]) -> String {
    if name == "default_layer" {
        return "Main typing layer".to_string();
    }
    if any_cell(cells, |c| matches!(c, "F1" | "F2" | "F3" | "F4")) {
        return "Function keys (F1-F12)".to_string();
    }
    if any_cell(cells, |c| {
        c.starts_with("BT_SEL(") || c == "BT_CLR" || c == "BT_CLR_ALL" || c == "BOOTLOADER"
    }) {
        return "Bluetooth and system".to_string();
    }
    if any_cell(cells, |c| c.contains(['↑', '↓', '←', '→'])) {
        return "Arrow keys and navigation".to_string();
    }
    if any_cell(cells, |c| c.starts_with("M_") && c.ends_with("Click")) {
        return "Mouse control".to_string();
    }
    if any_cell(cells, |c| {
        c.len() == 2 && c.starts_with('K') && c.as_bytes()[1].is_ascii_digit()
    }) {
        return "Numbers and symbols".to_string();
    }
    if name.to_lowercase().contains("scroll") {
        return "Scroll control".to_string();
    }
    format!("{} layer", display)
}
