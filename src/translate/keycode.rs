use super::modifier::ModifierFamily;
use std::collections::HashMap;
use std::sync::LazyLock;

/// Opening tokens of the modifier-wrapper call syntax, e.g. `LS(` in `LS(A)`.
pub const MODIFIER_WRAPPERS: [(&str, ModifierFamily); 8] = [
    ("LS(", ModifierFamily::Shift),
    ("RS(", ModifierFamily::Shift),
    ("LC(", ModifierFamily::Ctrl),
    ("RC(", ModifierFamily::Ctrl),
    ("LA(", ModifierFamily::Alt),
    ("RA(", ModifierFamily::Alt),
    ("LG(", ModifierFamily::Gui),
    ("RG(", ModifierFamily::Gui),
];

#[rustfmt::skip]
const KEY_SYMBOLS: &[(&str, &str)] = &[
    // Modifiers
    ("LEFT_SHIFT", "⇧"), ("RIGHT_SHIFT", "⇧"), ("LSHIFT", "⇧"), ("RSHIFT", "⇧"),
    ("LEFT_CTRL", "⌃"), ("RIGHT_CTRL", "⌃"), ("LCTRL", "⌃"), ("RCTRL", "⌃"),
    ("LEFT_ALT", "⌥"), ("RIGHT_ALT", "⌥"), ("LALT", "⌥"), ("RALT", "⌥"),
    ("LEFT_WIN", "⌘"), ("RIGHT_WIN", "⌘"), ("LGUI", "⌘"), ("RGUI", "⌘"),
    ("LEFT_GUI", "⌘"), ("RIGHT_GUI", "⌘"),

    // Whitespace / editing
    ("SPACE", "Space"), ("ENTER", "Enter"), ("BACKSPACE", "Bksp"), ("DELETE", "Del"),
    ("TAB", "Tab"), ("ESCAPE", "Esc"), ("ESC", "Esc"),

    // Navigation
    ("UP_ARROW", "↑"), ("DOWN_ARROW", "↓"), ("LEFT_ARROW", "←"), ("RIGHT_ARROW", "→"),
    ("PAGE_UP", "PgUp"), ("PAGE_DOWN", "PgDn"), ("HOME", "Home"), ("END", "End"),

    // Digits
    ("NUMBER_1", "1"), ("NUMBER_2", "2"), ("NUMBER_3", "3"), ("NUMBER_4", "4"),
    ("NUMBER_5", "5"), ("NUMBER_6", "6"), ("NUMBER_7", "7"), ("NUMBER_8", "8"),
    ("NUMBER_9", "9"), ("NUMBER_0", "0"),
    ("KP_NUMBER_1", "K1"), ("KP_NUMBER_2", "K2"), ("KP_NUMBER_3", "K3"), ("KP_NUMBER_4", "K4"),
    ("KP_NUMBER_5", "K5"), ("KP_NUMBER_6", "K6"), ("KP_NUMBER_7", "K7"), ("KP_NUMBER_8", "K8"),
    ("KP_NUMBER_9", "K9"), ("KP_NUMBER_0", "K0"),

    // Punctuation / symbols
    ("MINUS", "-"), ("EQUAL", "="), ("PLUS", "+"), ("ASTERISK", "*"), ("SLASH", "/"),
    ("SEMICOLON", ";"), ("COLON", ":"), ("SINGLE_QUOTE", "'"), ("DOUBLE_QUOTES", "\""),
    ("LEFT_BRACKET", "["), ("RIGHT_BRACKET", "]"), ("LEFT_BRACE", "{"), ("RIGHT_BRACE", "}"),
    ("LEFT_PARENTHESIS", "("), ("RIGHT_PARENTHESIS", ")"), ("BACKSLASH", "\\"), ("PIPE", "|"),
    ("COMMA", ","), ("PERIOD", "."), ("DOT", "."), ("UNDERSCORE", "_"),
    ("EXCLAMATION", "!"), ("AT_SIGN", "@"), ("HASH", "#"), ("DOLLAR", "$"), ("PERCENT", "%"),
    ("CARET", "^"), ("AMPERSAND", "&"), ("TILDE", "~"),

    // Function row
    ("F1", "F1"), ("F2", "F2"), ("F3", "F3"), ("F4", "F4"), ("F5", "F5"), ("F6", "F6"),
    ("F7", "F7"), ("F8", "F8"), ("F9", "F9"), ("F10", "F10"), ("F11", "F11"), ("F12", "F12"),
    ("F13", "F13"),

    // IME
    ("LANG1", "Kana"), ("LANG2", "Eisu"), ("INT_MUHENKAN", "無変換"),
];

static KEY_TABLE: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| KEY_SYMBOLS.iter().copied().collect());

/// Symbol for a bare key name, if the table knows it.
pub fn key_symbol(name: &str) -> Option<&'static str> {
    KEY_TABLE.get(name).copied()
}

/// Translates a key-code expression such as `LS(LG(S))` into `⇧⌘S`.
///
/// Wrapper openings are replaced textually, one glyph each, then every `)`
/// is dropped. Whatever follows the glyph prefix is looked up in the key
/// table; unknown names pass through.
pub fn translate_keycode(expr: &str) -> String {
    let mut collapsed = expr.to_string();
    for (wrapper, family) in MODIFIER_WRAPPERS {
        collapsed = collapsed.replace(wrapper, family.glyph());
    }
    collapsed.retain(|c| c != ')');

    let base_start = collapsed
        .char_indices()
        .find(|(_, c)| !ModifierFamily::is_glyph(*c))
        .map(|(i, _)| i)
        .unwrap_or(collapsed.len());
    let (prefix, base) = collapsed.split_at(base_start);

    match key_symbol(base) {
        Some(symbol) => format!("{}{}", prefix, symbol),
        None => collapsed,
    }
}
