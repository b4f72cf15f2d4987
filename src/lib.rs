//! Timer knob: a rotary control that picks a number of minutes from a
//! circular drag gesture and announces the choice.
//!
//! Apart from `drag`, everything here is free of DOM access so it can be
//! exercised natively; the Yew view lives in the binary.

pub mod config;
pub mod debounce;
pub mod dial;
pub mod drag;
pub mod face;
pub mod geometry;
pub mod scheduler;
pub mod toast;
pub mod utils;

pub use dial::{DialAction, DialState, MoveOutcome};
pub use geometry::{Point, Rect};
