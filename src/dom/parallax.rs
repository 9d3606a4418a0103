//! Parallax backdrop: hero layers that trail the cursor, and section
//! backgrounds scrubbed by scroll position. The offset math is pure
//! (`crate::motion`).

use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlElement, MouseEvent};

use crate::motion::{parallax_shift, scroll_progress};

const HERO_LAYER_COUNT: usize = 3;
/// Background travel across a section's full scroll range (px)
const SECTION_BG_SHIFT_PX: f64 = 50.0;

pub fn setup(document: &Document) {
    setup_hero_layers(document);
    setup_section_scrub(document);
}

/// Inject the hero's parallax layers and shift them with the cursor
fn setup_hero_layers(document: &Document) {
    let Some(hero) = document.get_element_by_id("hero") else {
        return;
    };
    for i in 1..=HERO_LAYER_COUNT {
        if let Ok(layer) = document.create_element("div") {
            layer.set_class_name(&format!("parallax-layer layer-{i}"));
            let _ = hero.append_child(&layer);
        }
    }

    let hero_el = hero.clone();
    let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
        let Some(window) = web_sys::window() else {
            return;
        };
        let (Some(w), Some(h)) = (
            window.inner_width().ok().and_then(|v| v.as_f64()),
            window.inner_height().ok().and_then(|v| v.as_f64()),
        ) else {
            return;
        };
        if w <= 0.0 || h <= 0.0 {
            return;
        }
        let x_frac = event.client_x() as f64 / w;
        let y_frac = event.client_y() as f64 / h;

        let Ok(layers) = hero_el.query_selector_all(".parallax-layer") else {
            return;
        };
        for i in 0..layers.length() {
            let Some(layer) = layers.get(i).and_then(|n| n.dyn_into::<HtmlElement>().ok())
            else {
                continue;
            };
            let (dx, dy) = parallax_shift(i as usize, x_frac, y_frac);
            let _ = layer
                .style()
                .set_property("transform", &format!("translate({dx}px, {dy}px)"));
        }
    });
    let _ = hero.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Scrub each step section's background position as it crosses the
/// viewport
fn setup_section_scrub(document: &Document) {
    scrub_sections(document);

    let document = document.clone();
    let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
        scrub_sections(&document);
    });
    if let Some(window) = web_sys::window() {
        let _ = window.add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn scrub_sections(document: &Document) {
    let Some(viewport_h) = web_sys::window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|v| v.as_f64())
    else {
        return;
    };
    let Ok(sections) = document.query_selector_all(".step-section") else {
        return;
    };
    for i in 0..sections.length() {
        let Some(section) = sections.get(i).and_then(|n| n.dyn_into::<HtmlElement>().ok())
        else {
            continue;
        };
        let rect = section.get_bounding_client_rect();
        let progress = scroll_progress(rect.top(), rect.height(), viewport_h);
        let _ = section.style().set_property(
            "background-position-y",
            &format!("{}px", progress * SECTION_BG_SHIFT_PX),
        );
    }
}
