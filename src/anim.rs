//! Minimal requestAnimationFrame tween helpers
//!
//! The journey needs four animation primitives: a value tween with a
//! completion callback (overlay fades, path draws), a timed class pulse
//! (value-change flashes), a one-shot delay (effect teardown), and a
//! scroll-position trigger (content reveals). Each frame re-registers
//! itself with a one-shot closure; completion callbacks are one-shot
//! continuations, not resumable.

use wasm_bindgen::prelude::*;
use web_sys::{Element, HtmlElement};

use crate::lerp;
use crate::motion::ease_in_out;

/// An in-flight tween
struct Tween {
    from: f32,
    to: f32,
    start: f64,
    duration_ms: f64,
    apply: Box<dyn Fn(f32)>,
    on_complete: Option<Box<dyn FnOnce()>>,
}

/// Drive a value from `from` to `to` over `duration_ms` with ease-in-out,
/// feeding each frame's value to `apply`, then invoke `on_complete`
/// exactly once. The final value is applied before the callback runs.
pub fn tween(
    from: f32,
    to: f32,
    duration_ms: f64,
    apply: impl Fn(f32) + 'static,
    on_complete: impl FnOnce() + 'static,
) {
    schedule(Tween {
        from,
        to,
        start: 0.0,
        duration_ms,
        apply: Box::new(apply),
        on_complete: Some(Box::new(on_complete)),
    });
}

/// Tween an element's opacity
pub fn tween_opacity(
    el: HtmlElement,
    from: f32,
    to: f32,
    duration_ms: f64,
    on_complete: impl FnOnce() + 'static,
) {
    let style = el.style();
    tween(
        from,
        to,
        duration_ms,
        move |value| {
            let _ = style.set_property("opacity", &value.to_string());
        },
        on_complete,
    );
}

fn schedule(tween: Tween) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let closure = Closure::once(move |time: f64| step(tween, time));
    let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
    closure.forget();
}

fn step(mut tween: Tween, time: f64) {
    if tween.start == 0.0 {
        tween.start = time;
    }
    let t = ((time - tween.start) / tween.duration_ms).clamp(0.0, 1.0) as f32;
    (tween.apply)(lerp(tween.from, tween.to, ease_in_out(t)));

    if t >= 1.0 {
        if let Some(on_complete) = tween.on_complete.take() {
            on_complete();
        }
    } else {
        schedule(tween);
    }
}

/// Run a callback once after `ms` milliseconds
pub fn delay(ms: i32, f: impl FnOnce() + 'static) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let closure = Closure::once(f);
    let _ = window
        .set_timeout_with_callback_and_timeout_and_arguments_0(closure.as_ref().unchecked_ref(), ms);
    closure.forget();
}

/// Flash a class on an element for the standard pulse duration
pub fn pulse_class(el: &Element, class: &str) {
    let list = el.class_list();
    if list.add_1(class).is_err() {
        return;
    }
    let el = el.clone();
    let class = class.to_string();
    delay(crate::consts::PULSE_MS, move || {
        let _ = el.class_list().remove_1(&class);
    });
}

/// Fraction of the viewport height content must cross before it reveals
const REVEAL_VIEWPORT_FRACTION: f64 = 0.8;

/// Reveal `.interactive-content` blocks once they scroll into the top 80%
/// of the viewport. Each block reveals once and stays revealed.
pub fn setup_scroll_reveal(document: &web_sys::Document) {
    reveal_visible(document);

    let document = document.clone();
    let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
        reveal_visible(&document);
    });
    if let Some(window) = web_sys::window() {
        let _ = window
            .add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn reveal_visible(document: &web_sys::Document) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(viewport_h) = window.inner_height().ok().and_then(|v| v.as_f64()) else {
        return;
    };
    let threshold = viewport_h * REVEAL_VIEWPORT_FRACTION;

    let Ok(nodes) = document.query_selector_all(".interactive-content:not(.revealed)") else {
        return;
    };
    for i in 0..nodes.length() {
        let Some(el) = nodes.get(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
            continue;
        };
        if el.get_bounding_client_rect().top() < threshold {
            let _ = el.class_list().add_1("revealed");
        }
    }
}
