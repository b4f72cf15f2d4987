//! Timer knob page built with Yew.
//! Wires the dial gesture, the debounced readout and the save toast.

use log::info;
use timer_knob::config::DEBOUNCE_MS;
use timer_knob::toast::{ToastAction, ToastKind, ToastQueue};
use yew::prelude::*;

mod components;
mod hooks;

use components::{DialFace, FlipButton, Knob, Readout, Toaster};
use hooks::{use_debounced_value, use_dial};

/// The timer card: knob, readout and save button.
#[function_component]
fn App() -> Html {
    let knob_ref = use_node_ref();
    let dial = use_dial(knob_ref.clone());
    // The knob follows the pointer immediately; the readout settles after a pause.
    let display_value = use_debounced_value(dial.state.value, DEBOUNCE_MS);
    let toasts = use_reducer(ToastQueue::new);

    let on_save = {
        let state = dial.state.clone();
        let toasts = toasts.dispatcher();
        Callback::from(move |_: MouseEvent| {
            let message = state.commit();
            info!("commit: {}", message);
            toasts.dispatch(ToastAction::Push(ToastKind::Success, message));
        })
    };

    html! {
        <main class="page">
            <div class="card">
                <h1 class="title">{ "Timer" }</h1>

                <div class="dial">
                    <div class="dial-rim" />
                    <DialFace />
                    <Knob
                        knob_ref={knob_ref}
                        value={dial.state.value}
                        rotation_degrees={dial.state.rotation_degrees}
                        is_dragging={dial.state.is_dragging}
                        onpointerdown={dial.on_pointer_down.clone()}
                    />
                </div>

                <Readout value={display_value} />

                <div class="actions">
                    <FlipButton front_text="Save" back_text="Me!" onclick={on_save} />
                </div>
            </div>
            <Toaster queue={toasts} />
        </main>
    }
}

/// Entry point: installs the panic hook and console logger, then mounts the app.
fn main() {
    console_error_panic_hook::set_once();
    // Gesture detail at debug; release builds stop at info.
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    wasm_logger::init(wasm_logger::Config::new(level));
    yew::Renderer::<App>::new().render();
}
