//! Application-level configuration constants.

// Gesture mapping
pub const DEGREES_PER_MINUTE: f64 = 3.6;
pub const MIN_MINUTES: u32 = 0;
pub const MAX_MINUTES: u32 = 999;

// UI Behavior
pub const DEBOUNCE_MS: u32 = 50;
pub const TOAST_DURATION_MS: u32 = 4_000;
pub const MAX_VISIBLE_TOASTS: usize = 3;

// Dial face
pub const TICK_COUNT: usize = 60;
pub const MAJOR_TICK_EVERY: usize = 5;
pub const TICK_RADIUS_PX: f64 = 128.0;
pub const MAJOR_TICK_SIZE_PX: (f64, f64) = (3.0, 14.0);
pub const MINOR_TICK_SIZE_PX: (f64, f64) = (2.0, 8.0);

// Readout
pub const DISPLAY_PAD_WIDTH: usize = 2;
