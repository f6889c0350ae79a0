use strum_macros::{EnumIter, EnumString};

/// The four modifier families, each drawn as a single glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModifierFamily {
    Shift,
    Ctrl,
    Alt,
    Gui,
}

impl ModifierFamily {
    pub fn glyph(&self) -> &'static str {
        match self {
            Self::Shift => "⇧",
            Self::Ctrl => "⌃",
            Self::Alt => "⌥",
            Self::Gui => "⌘",
        }
    }

    pub fn is_glyph(c: char) -> bool {
        matches!(c, '⇧' | '⌃' | '⌥' | '⌘')
    }
}

/// A sided modifier as spelled in hold-tap arguments (`&mt LEFT_SHIFT Z`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, EnumIter)]
pub enum Modifier {
    #[strum(serialize = "LEFT_SHIFT", serialize = "LSHIFT")]
    LeftShift,
    #[strum(serialize = "RIGHT_SHIFT", serialize = "RSHIFT")]
    RightShift,
    #[strum(serialize = "LEFT_CTRL", serialize = "LCTRL")]
    LeftCtrl,
    #[strum(serialize = "RIGHT_CTRL", serialize = "RCTRL")]
    RightCtrl,
    #[strum(serialize = "LEFT_ALT", serialize = "LALT")]
    LeftAlt,
    #[strum(serialize = "RIGHT_ALT", serialize = "RALT")]
    RightAlt,
    #[strum(serialize = "LEFT_WIN", serialize = "LEFT_GUI", serialize = "LGUI")]
    LeftGui,
    #[strum(serialize = "RIGHT_WIN", serialize = "RIGHT_GUI", serialize = "RGUI")]
    RightGui,
}

impl Modifier {
    pub fn abbrev(&self) -> &'static str {
        match self {
            Self::LeftShift => "LSft",
            Self::RightShift => "RSft",
            Self::LeftCtrl => "LCtl",
            Self::RightCtrl => "RCtl",
            Self::LeftAlt => "LAlt",
            Self::RightAlt => "RAlt",
            Self::LeftGui => "LCmd",
            Self::RightGui => "RCmd",
        }
    }
}

/// `LEFT_SHIFT` -> `LSft`. Unknown names come back unchanged.
pub fn translate_modifier(name: &str) -> String {
    match name.parse::<Modifier>() {
        Ok(modifier) => modifier.abbrev().to_string(),
        Err(_) => name.to_string(),
    }
}
