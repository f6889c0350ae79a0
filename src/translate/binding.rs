use super::keycode::translate_keycode;
use super::modifier::translate_modifier;
use crate::consts::TRANSPARENT_GLYPH;
use regex::Regex;
use std::sync::LazyLock;
use strum_macros::{Display, EnumIter};

/// Which dispatch rule produced a symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum BindingKind {
    Transparent,
    LayerTap,
    ModTap,
    KeyPress,
    ToLayer,
    Momentary,
    Bluetooth,
    MouseClick,
    Scroll,
    System,
    ToBase,
    LayerTapToBase,
    Passthrough,
}

#[derive(Debug, Clone, Copy)]
enum Guard {
    Exact(&'static str),
    Prefix(&'static str),
    Contains(&'static str),
}

impl Guard {
    fn matches(&self, body: &str) -> bool {
        match self {
            Guard::Exact(s) => body == *s,
            Guard::Prefix(s) => body.starts_with(s),
            Guard::Contains(s) => body.contains(s),
        }
    }
}

/// A guard selects the rule; `render` may still decline (return `None`), in
/// which case dispatch moves on to the next rule.
struct Rule {
    kind: BindingKind,
    guard: Guard,
    render: fn(&str) -> Option<String>,
}

macro_rules! pattern {
    ($name:ident, $re:expr) => {
        static $name: LazyLock<Regex> = LazyLock::new(|| Regex::new($re).expect($re));
    };
}

pattern!(LAYER_TAP, r"(?s)^lt\s+(\d+)\s+(.+)");
pattern!(MOD_TAP, r"(?s)^mt\s+(\S+)\s+(.+)");
pattern!(KEY_PRESS, r"(?s)^kp\s+(.+)");
pattern!(TO_LAYER, r"^to\s+(\d+)");
pattern!(MOMENTARY, r"^mo\s+(\d+)");
pattern!(BT_SELECT, r"BT_SEL\s+(\d+)");
pattern!(SCROLL, r"inc_dec_kp\s+(\S+)\s+(\S+)");
pattern!(TO_BASE, r"(?s)^to_layer_0\s+(.+)");
pattern!(LAYER_TAP_TO_BASE, r"(?s)^lt_to_layer_0\s+(\d+)\s+(.+)");

fn render_transparent(_: &str) -> Option<String> {
    Some(TRANSPARENT_GLYPH.to_string())
}

fn render_layer_tap(body: &str) -> Option<String> {
    let caps = LAYER_TAP.captures(body)?;
    Some(format!("LT{}({})", &caps[1], translate_keycode(caps[2].trim())))
}

fn render_mod_tap(body: &str) -> Option<String> {
    let caps = MOD_TAP.captures(body)?;
    Some(format!(
        "MT({},{})",
        translate_modifier(&caps[1]),
        translate_keycode(caps[2].trim())
    ))
}

fn render_key_press(body: &str) -> Option<String> {
    let caps = KEY_PRESS.captures(body)?;
    Some(translate_keycode(caps[1].trim()))
}

fn render_to_layer(body: &str) -> Option<String> {
    let caps = TO_LAYER.captures(body)?;
    Some(format!("TO({})", &caps[1]))
}

fn render_momentary(body: &str) -> Option<String> {
    let caps = MOMENTARY.captures(body)?;
    Some(format!("MO({})", &caps[1]))
}

fn render_bluetooth(body: &str) -> Option<String> {
    if body.contains("BT_SEL") {
        if let Some(caps) = BT_SELECT.captures(body) {
            return Some(format!("BT_SEL({})", &caps[1]));
        }
    }
    if body.contains("BT_CLR_ALL") {
        return Some("BT_CLR_ALL".to_string());
    }
    if body.contains("BT_CLR") {
        return Some("BT_CLR".to_string());
    }
    None
}

fn render_mouse_click(body: &str) -> Option<String> {
    [("MB1", "M_LClick"), ("MB2", "M_RClick"), ("MB3", "M_MClick")]
        .into_iter()
        .find(|(button, _)| body.contains(button))
        .map(|(_, symbol)| symbol.to_string())
}

fn render_scroll(body: &str) -> Option<String> {
    let caps = SCROLL.captures(body)?;
    Some(format!(
        "SCROLL({}/{})",
        translate_keycode(&caps[1]),
        translate_keycode(&caps[2])
    ))
}

fn render_bootloader(_: &str) -> Option<String> {
    Some("BOOTLOADER".to_string())
}

fn render_reset(_: &str) -> Option<String> {
    Some("RESET".to_string())
}

fn render_to_base(body: &str) -> Option<String> {
    let caps = TO_BASE.captures(body)?;
    Some(format!("TO0({})", translate_keycode(caps[1].trim())))
}

fn render_layer_tap_to_base(body: &str) -> Option<String> {
    let caps = LAYER_TAP_TO_BASE.captures(body)?;
    Some(format!(
        "LT_TO0({},{})",
        &caps[1],
        translate_keycode(caps[2].trim())
    ))
}

// Order is significant: first match wins.
#[rustfmt::skip]
const RULES: &[Rule] = &[
    Rule { kind: BindingKind::Transparent, guard: Guard::Exact("trans"), render: render_transparent },
    Rule { kind: BindingKind::LayerTap, guard: Guard::Prefix("lt"), render: render_layer_tap },
    Rule { kind: BindingKind::ModTap, guard: Guard::Prefix("mt"), render: render_mod_tap },
    Rule { kind: BindingKind::KeyPress, guard: Guard::Prefix("kp"), render: render_key_press },
    Rule { kind: BindingKind::ToLayer, guard: Guard::Prefix("to"), render: render_to_layer },
    Rule { kind: BindingKind::Momentary, guard: Guard::Prefix("mo"), render: render_momentary },
    Rule { kind: BindingKind::Bluetooth, guard: Guard::Contains("bt"), render: render_bluetooth },
    Rule { kind: BindingKind::MouseClick, guard: Guard::Contains("mkp"), render: render_mouse_click },
    Rule { kind: BindingKind::Scroll, guard: Guard::Contains("inc_dec_kp"), render: render_scroll },
    Rule { kind: BindingKind::System, guard: Guard::Contains("bootloader"), render: render_bootloader },
    Rule { kind: BindingKind::System, guard: Guard::Contains("reset"), render: render_reset },
    Rule { kind: BindingKind::ToBase, guard: Guard::Prefix("to_layer_0"), render: render_to_base },
    Rule { kind: BindingKind::LayerTapToBase, guard: Guard::Prefix("lt_to_layer_0"), render: render_layer_tap_to_base },
];

/// Classifies and translates one raw binding token.
pub fn dispatch(token: &str) -> (BindingKind, String) {
    let body = token.strip_prefix('&').unwrap_or(token);

    RULES
        .iter()
        .filter(|rule| rule.guard.matches(body))
        .find_map(|rule| (rule.render)(body).map(|symbol| (rule.kind, symbol)))
        .unwrap_or_else(|| (BindingKind::Passthrough, token.to_string()))
}

/// `&mt LEFT_SHIFT Z` -> `MT(LSft,Z)`. Unrecognized tokens come back verbatim.
pub fn translate_binding(token: &str) -> String {
    dispatch(token).1
}

pub fn classify(token: &str) -> BindingKind {
    dispatch(token).0
}
