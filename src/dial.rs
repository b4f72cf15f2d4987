//! Dial gesture state machine.
//!
//! Maps a circular drag around the knob to a bounded number of minutes.
//! Every transition is a plain method on [`DialState`], so the gesture can be
//! driven and inspected without a browser. The Yew view plugs in through the
//! [`Reducible`] impl at the bottom of the file.

use crate::config::{DEGREES_PER_MINUTE, MAX_MINUTES, MIN_MINUTES};
use crate::geometry::{angular_delta, pointer_angle, Point};
use crate::utils::{confirmation_message, minutes_label};
use log::{debug, info};
use std::rc::Rc;
use yew::Reducible;

/// Current knob position and drag tracking.
#[derive(Debug, Clone, PartialEq)]
pub struct DialState {
    /// Selected minutes, always within `[MIN_MINUTES, MAX_MINUTES]`.
    pub value: u32,
    /// Visual rotation of the knob. Kept equal to `value * DEGREES_PER_MINUTE`.
    pub rotation_degrees: f64,
    pub is_dragging: bool,
    /// Pointer angle of the last accepted sample, in `[0, 360)`.
    pub last_pointer_angle_degrees: f64,
}

impl Default for DialState {
    fn default() -> Self {
        Self {
            value: MIN_MINUTES,
            rotation_degrees: 0.0,
            is_dragging: false,
            last_pointer_angle_degrees: 0.0,
        }
    }
}

/// Events the dial reacts to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DialAction {
    BeginDrag { pointer: Point, center: Point },
    PointerMove { pointer: Point, center: Point },
    EndDrag,
}

/// What a pointer-move sample did to the dial.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MoveOutcome {
    /// No drag in progress; the sample was ignored.
    NotDragging,
    /// Already at the floor and moving counter-clockwise; the sample was
    /// rejected and the stored angle kept.
    FloorLocked,
    /// The sample was accepted.
    Updated { delta: f64, value: u32 },
}

impl DialState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start tracking a drag from `pointer`.
    pub fn begin_drag(&mut self, pointer: Point, center: Point) {
        let angle = pointer_angle(pointer, center);
        debug!("drag start at {:.1}° (value {})", angle, self.value);
        self.last_pointer_angle_degrees = angle;
        self.is_dragging = true;
    }

    /// Feed one pointer sample into an active drag.
    pub fn on_pointer_move(&mut self, pointer: Point, center: Point) -> MoveOutcome {
        if !self.is_dragging {
            return MoveOutcome::NotDragging;
        }

        let angle = pointer_angle(pointer, center);
        let delta = angular_delta(self.last_pointer_angle_degrees, angle);

        // Checked against the value before this sample; the clamp below still
        // catches large negative steps from a nonzero value.
        if self.value <= MIN_MINUTES && delta < 0.0 {
            debug!("move rejected at floor (delta {:.2}°)", delta);
            return MoveOutcome::FloorLocked;
        }

        let tentative_rotation = self.rotation_degrees + delta;
        let tentative_value = (tentative_rotation / DEGREES_PER_MINUTE).round();
        let value = tentative_value.clamp(MIN_MINUTES as f64, MAX_MINUTES as f64) as u32;

        self.value = value;
        self.rotation_degrees = rotation_for(value);
        self.last_pointer_angle_degrees = angle;

        debug!("move delta {:.2}° -> value {}", delta, value);
        MoveOutcome::Updated { delta, value }
    }

    pub fn end_drag(&mut self) {
        info!("drag end at {} {}", self.value, minutes_label(self.value));
        self.is_dragging = false;
    }

    /// Message announcing the current selection. Does not touch the state.
    pub fn commit(&self) -> String {
        confirmation_message(self.value)
    }

    /// Pure transition: the state after `action`, or `None` if the action
    /// leaves it untouched.
    pub fn transition(&self, action: DialAction) -> Option<DialState> {
        let mut next = self.clone();
        match action {
            DialAction::BeginDrag { pointer, center } => next.begin_drag(pointer, center),
            DialAction::PointerMove { pointer, center } => {
                match next.on_pointer_move(pointer, center) {
                    MoveOutcome::Updated { .. } => {}
                    MoveOutcome::NotDragging | MoveOutcome::FloorLocked => return None,
                }
            }
            DialAction::EndDrag => {
                if !next.is_dragging {
                    return None;
                }
                next.end_drag();
            }
        }
        Some(next)
    }
}

/// Knob rotation that corresponds to `value` minutes.
pub fn rotation_for(value: u32) -> f64 {
    value as f64 * DEGREES_PER_MINUTE
}

impl Reducible for DialState {
    type Action = DialAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match self.transition(action) {
            Some(next) => Rc::new(next),
            // Same Rc keeps Yew from re-rendering on ignored samples.
            None => self,
        }
    }
}
