use log::warn;
use timer_knob::debounce::Debouncer;
use timer_knob::drag::{client_point, knob_center, DragListeners};
use timer_knob::scheduler::TimeoutScheduler;
use timer_knob::{DialAction, DialState, Point};
use web_sys::PointerEvent;
use yew::prelude::*;

/// Dial state plus the handler to wire onto the knob element.
pub struct UseDial {
    pub state: UseReducerHandle<DialState>,
    pub on_pointer_down: Callback<PointerEvent>,
}

/// Drive a [`DialState`] from pointer input on the element behind `knob_ref`.
///
/// Move/up listeners are attached to the window only while a drag is active
/// and are released when it ends or the component unmounts.
#[hook]
pub fn use_dial(knob_ref: NodeRef) -> UseDial {
    let state = use_reducer(DialState::new);

    let on_pointer_down = {
        let dispatcher = state.dispatcher();
        let knob_ref = knob_ref.clone();
        Callback::from(move |e: PointerEvent| match knob_center(&knob_ref) {
            Ok(center) => {
                e.prevent_default();
                dispatcher.dispatch(DialAction::BeginDrag {
                    pointer: client_point(&e),
                    center,
                });
            }
            Err(err) => warn!("drag not started: {}", err),
        })
    };

    {
        let dispatcher = state.dispatcher();
        use_effect_with(state.is_dragging, move |&dragging| {
            let listeners = dragging.then(|| {
                let on_move = {
                    let dispatcher = dispatcher.clone();
                    Callback::from(move |pointer: Point| match knob_center(&knob_ref) {
                        Ok(center) => dispatcher.dispatch(DialAction::PointerMove { pointer, center }),
                        Err(err) => {
                            warn!("drag aborted: {}", err);
                            dispatcher.dispatch(DialAction::EndDrag);
                        }
                    })
                };
                let on_release = Callback::from(move |_| dispatcher.dispatch(DialAction::EndDrag));
                DragListeners::attach(on_move, on_release)
            });
            move || drop(listeners)
        });
    }

    UseDial {
        state,
        on_pointer_down,
    }
}

/// Mirror `value`, but only after it has stayed unchanged for `delay_ms`.
#[hook]
pub fn use_debounced_value<T>(value: T, delay_ms: u32) -> T
where
    T: Clone + PartialEq + 'static,
{
    let settled = use_state_eq(|| value.clone());
    // Dropped with the component, which cancels any pending timer.
    let debouncer = {
        let settled = settled.clone();
        use_mut_ref(move || Debouncer::new(TimeoutScheduler, delay_ms, move |v: T| settled.set(v)))
    };

    {
        let debouncer = debouncer.clone();
        use_effect_with(value, move |value| {
            debouncer.borrow_mut().push(value.clone());
            || ()
        });
    }

    (*settled).clone()
}
