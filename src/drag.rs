//! Browser glue for the knob drag: window listeners scoped to one gesture and
//! reading the knob's center off the DOM.

use crate::geometry::{Point, Rect};
use gloo_events::EventListener;
use std::fmt;
use wasm_bindgen::JsCast;
use web_sys::{Element, MouseEvent, PointerEvent};
use yew::{Callback, NodeRef};

/// Failures reading the knob out of the DOM.
#[derive(Debug)]
pub enum KnobError {
    /// The knob element is not mounted (or not an `Element`).
    Unmounted,
}

impl fmt::Display for KnobError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KnobError::Unmounted => write!(f, "Knob element is not mounted"),
        }
    }
}

impl std::error::Error for KnobError {}

/// Center of the knob element in client coordinates.
pub fn knob_center(knob_ref: &NodeRef) -> Result<Point, KnobError> {
    let element = knob_ref.cast::<Element>().ok_or(KnobError::Unmounted)?;
    let rect = element.get_bounding_client_rect();
    Ok(Rect {
        left: rect.left(),
        top: rect.top(),
        width: rect.width(),
        height: rect.height(),
    }
    .center())
}

pub fn client_point(event: &MouseEvent) -> Point {
    Point::new(event.client_x() as f64, event.client_y() as f64)
}

/// Window listeners that live exactly as long as one drag.
///
/// Pointer moves anywhere on the page keep steering the knob; pointer-up and
/// pointer-cancel both end the gesture. Dropping the value detaches all
/// three listeners.
pub struct DragListeners {
    _move: EventListener,
    _up: EventListener,
    _cancel: EventListener,
}

impl DragListeners {
    pub fn attach(on_move: Callback<Point>, on_release: Callback<()>) -> Self {
        let window = gloo_utils::window();

        let move_listener = EventListener::new(&window, "pointermove", move |event| {
            if let Some(event) = event.dyn_ref::<PointerEvent>() {
                on_move.emit(client_point(event));
            }
        });
        let up_listener = {
            let on_release = on_release.clone();
            EventListener::new(&window, "pointerup", move |_| on_release.emit(()))
        };
        let cancel_listener =
            EventListener::new(&window, "pointercancel", move |_| on_release.emit(()));

        Self {
            _move: move_listener,
            _up: up_listener,
            _cancel: cancel_listener,
        }
    }
}
