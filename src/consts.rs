/// Number of full-width rows in the main grid.
pub const ROW_COUNT: usize = 3;

/// Keys per main row (five per half on a split board).
pub const ROW_WIDTH: usize = 10;

/// Maximum number of keys in the thumb cluster.
pub const THUMB_CAPACITY: usize = 10;

/// Bindings that fit in the main grid before the thumb row starts.
pub const MAIN_GRID_KEYS: usize = ROW_COUNT * ROW_WIDTH;

/// Bindings that fit on the board at all. Anything past this is dropped.
pub const MAX_BINDINGS: usize = MAIN_GRID_KEYS + THUMB_CAPACITY;

/// Symbol for a transparent (fall-through) key.
pub const TRANSPARENT_GLYPH: &str = "▽";

/// Default symbol for a grid cell with no source binding.
pub const DEFAULT_PLACEHOLDER: &str = "---";

/// Default name of the block holding every layer.
pub const DEFAULT_CONTAINER_BLOCK: &str = "keymap";

/// Literal that marks a nested block as a layer.
pub const BINDINGS_MARKER: &str = "bindings";
