//! Yew view components for the timer page.
//!
//! Apart from the toasts, these are stateless and render from props only.

use std::rc::Rc;
use timer_knob::config::TOAST_DURATION_MS;
use timer_knob::face::ticks;
use timer_knob::scheduler::{Scheduler, TimeoutScheduler};
use timer_knob::toast::{Toast, ToastAction, ToastId, ToastQueue};
use timer_knob::utils::{format_display, knob_glow, knob_transform};
use yew::prelude::*;

/// Ring of tick marks around the knob.
#[function_component(DialFace)]
pub fn dial_face() -> Html {
    html! {
        <div class="dial-face">
            { ticks().into_iter().map(|tick| {
                let class = if tick.major { "tick tick-major" } else { "tick" };
                html! { <div key={tick.index} {class} style={tick.style()} /> }
            }).collect::<Html>() }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct KnobProps {
    pub knob_ref: NodeRef,
    pub value: u32,
    pub rotation_degrees: f64,
    pub is_dragging: bool,
    pub onpointerdown: Callback<PointerEvent>,
}

/// The rotating knob itself.
#[function_component(Knob)]
pub fn knob(props: &KnobProps) -> Html {
    let style = format!(
        "transform: {}; box-shadow: {};",
        knob_transform(props.rotation_degrees),
        knob_glow(props.value)
    );
    html! {
        <div ref={props.knob_ref.clone()}
            class={classes!("knob", props.is_dragging.then_some("dragging"))}
            style={style}
            onpointerdown={props.onpointerdown.clone()}
        >
            if props.is_dragging {
                <div class="knob-halo" />
            }
            <div class="knob-indicator" />
            <div class="knob-core">
                <span class="knob-hint">{ "⟳" }</span>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ReadoutProps {
    pub value: u32,
}

/// Zero-padded minutes readout. Each digit is its own keyed span so the
/// stylesheet can slide digits independently.
#[function_component(Readout)]
pub fn readout(props: &ReadoutProps) -> Html {
    let text = format_display(props.value);
    let width = text.len();
    html! {
        <div class="readout">
            <span class="sliding-number">
                { text.chars().enumerate().map(|(i, digit)| {
                    // Keyed from the right so units stay put when a digit is added.
                    let key = width - i;
                    html! { <span key={key} class="digit">{ digit.to_string() }</span> }
                }).collect::<Html>() }
            </span>
            <span class="unit">{ "minutes" }</span>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct FlipButtonProps {
    pub front_text: AttrValue,
    pub back_text: AttrValue,
    pub onclick: Callback<MouseEvent>,
}

/// Two-faced button; the stylesheet flips to the back face on hover.
#[function_component(FlipButton)]
pub fn flip_button(props: &FlipButtonProps) -> Html {
    html! {
        <button class="flip-button" onclick={props.onclick.clone()}>
            <span class="flip-front">{ props.front_text.clone() }</span>
            <span class="flip-back">{ props.back_text.clone() }</span>
        </button>
    }
}

#[derive(Properties, PartialEq)]
pub struct ToasterProps {
    pub queue: UseReducerHandle<ToastQueue>,
}

/// Stack of active toasts at the bottom of the page.
#[function_component(Toaster)]
pub fn toaster(props: &ToasterProps) -> Html {
    let on_dismiss = {
        let dispatcher = props.queue.dispatcher();
        Callback::from(move |id: ToastId| dispatcher.dispatch(ToastAction::Dismiss(id)))
    };
    html! {
        <ol class="toaster">
            { props.queue.toasts().iter().map(|toast| html! {
                <ToastItem key={toast.id} toast={Rc::new(toast.clone())} on_dismiss={on_dismiss.clone()} />
            }).collect::<Html>() }
        </ol>
    }
}

#[derive(Properties, PartialEq)]
struct ToastItemProps {
    toast: Rc<Toast>,
    on_dismiss: Callback<ToastId>,
}

/// One toast. Dismisses itself after `TOAST_DURATION_MS` or on click.
#[function_component(ToastItem)]
fn toast_item(props: &ToastItemProps) -> Html {
    let id = props.toast.id;
    {
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with(id, move |&id| {
            let timer = TimeoutScheduler.schedule(
                TOAST_DURATION_MS,
                Box::new(move || on_dismiss.emit(id)),
            );
            move || drop(timer)
        });
    }
    let onclick = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| on_dismiss.emit(id))
    };
    html! {
        <li class={classes!("toast", props.toast.kind.css_class())} {onclick}>
            { props.toast.message.clone() }
        </li>
    }
}
