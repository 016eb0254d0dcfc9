//! Shared defaults for layout and card styling.

// ── Auto-layout grid ────────────────────────────────────────────

/// Left edge of the first grid column, in board pixels.
pub const START_X: f64 = 50.0;

/// Top edge of the first grid row, in board pixels.
pub const START_Y: f64 = 50.0;

/// Horizontal distance between grid columns.
pub const GRID_SPACING_X: f64 = 350.0;

/// Vertical distance between grid rows.
pub const GRID_SPACING_Y: f64 = 450.0;

/// Cards per grid row before wrapping.
pub const GRID_COLUMNS: usize = 5;

// ── Card style ──────────────────────────────────────────────────

/// Card background when the script sets no `bg_color`.
pub const DEFAULT_BG_COLOR: &str = "#FF2DD1";

/// Front face font size in pixels.
pub const DEFAULT_FONT_SIZE_FRONT: f64 = 24.0;

/// Back face font size in pixels.
pub const DEFAULT_FONT_SIZE_BACK: f64 = 20.0;

// ── Field names ─────────────────────────────────────────────────

pub const FIELD_FRONT: &str = "front";
pub const FIELD_BACK: &str = "back";
pub const FIELD_X: &str = "x";
pub const FIELD_Y: &str = "y";
pub const FIELD_BG_COLOR: &str = "bg_color";
pub const FIELD_FONT_SIZE_FRONT: &str = "fontSize_front";
pub const FIELD_FONT_SIZE_BACK: &str = "fontSize_back";
