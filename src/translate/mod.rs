pub mod binding;
pub mod keycode;
pub mod modifier;

pub use self::binding::{classify, dispatch, translate_binding, BindingKind};
pub use self::keycode::{key_symbol, translate_keycode};
pub use self::modifier::{translate_modifier, Modifier, ModifierFamily};
