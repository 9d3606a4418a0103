//! Per-step interactive widgets: blueprint hotspots, the scenario
//! selector, and drag-and-drop resource selection
//!
//! All lookups tolerate missing markup; a page without a given widget
//! simply doesn't get that behavior.

use wasm_bindgen::prelude::*;
use web_sys::{Document, DragEvent, Element, HtmlElement};

/// Hotspot anchor points as fractions of the blueprint container
const HOTSPOT_POSITIONS: [(&str, f64, f64); 3] = [
    ("door", 0.3, 0.4),
    ("pulley", 0.7, 0.2),
    ("control-panel", 0.8, 0.5),
];

pub fn setup(document: &Document) {
    position_hotspots(document);
    setup_resize(document);
    setup_drag_and_drop(document);
}

/// Pin each hotspot to its fractional coordinates on the blueprint
pub fn position_hotspots(document: &Document) {
    let Some(container) = document
        .query_selector(".blueprint-container")
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    else {
        return;
    };
    let width = container.offset_width() as f64;
    let height = container.offset_height() as f64;

    for (target, fx, fy) in HOTSPOT_POSITIONS {
        let selector = format!(".hotspot[data-target=\"{target}\"]");
        let Some(hotspot) = document
            .query_selector(&selector)
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        else {
            continue;
        };
        let style = hotspot.style();
        let _ = style.set_property("left", &format!("{}px", width * fx));
        let _ = style.set_property("top", &format!("{}px", height * fy));
    }
}

/// Hotspots are positioned in pixels, so they track container resizes
fn setup_resize(document: &Document) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let document = document.clone();
    let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
        position_hotspots(&document);
    });
    let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Show one scenario's detail panel and mark its button active
pub fn select_scenario(document: &Document, button: &Element, scenario: &str) {
    if let Ok(buttons) = document.query_selector_all(".scenario-btn") {
        for i in 0..buttons.length() {
            if let Some(el) = buttons.get(i).and_then(|n| n.dyn_into::<Element>().ok()) {
                let _ = el.class_list().remove_1("active");
            }
        }
    }
    let _ = button.class_list().add_1("active");

    if let Ok(panels) = document.query_selector_all(".scenario-details") {
        for i in 0..panels.length() {
            if let Some(el) = panels.get(i).and_then(|n| n.dyn_into::<HtmlElement>().ok()) {
                let _ = el.style().set_property("display", "none");
            }
        }
    }
    if let Some(selected) = document
        .get_element_by_id(&format!("{scenario}-scenario"))
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    {
        let _ = selected.style().set_property("display", "block");
    }
}

/// Wire drag sources (delegated on the document) and the dropzone
fn setup_drag_and_drop(document: &Document) {
    // Drag start: stash the resource tag, mark the item
    {
        let closure = Closure::<dyn FnMut(_)>::new(move |event: DragEvent| {
            let Some(item) = drag_source(&event) else {
                return;
            };
            let Some(resource) = item.get_attribute("data-resource") else {
                return;
            };
            if let Some(transfer) = event.data_transfer() {
                let _ = transfer.set_data("text/plain", &resource);
            }
            let _ = item.class_list().add_1("dragging");
        });
        let _ =
            document.add_event_listener_with_callback("dragstart", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // Drag end: unmark
    {
        let closure = Closure::<dyn FnMut(_)>::new(move |event: DragEvent| {
            if let Some(item) = drag_source(&event) {
                let _ = item.class_list().remove_1("dragging");
            }
        });
        let _ =
            document.add_event_listener_with_callback("dragend", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    let Some(dropzone) = document.query_selector(".resource-dropzone").ok().flatten() else {
        return;
    };

    // Drag over: accept the drop, highlight the zone
    {
        let zone = dropzone.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: DragEvent| {
            event.prevent_default();
            let _ = zone.class_list().add_1("drag-over");
        });
        let _ =
            dropzone.add_event_listener_with_callback("dragover", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // Drag leave: drop the highlight
    {
        let zone = dropzone.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: DragEvent| {
            let _ = zone.class_list().remove_1("drag-over");
        });
        let _ = dropzone
            .add_event_listener_with_callback("dragleave", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // Drop: append a deduplicated selected-resource entry
    {
        let zone = dropzone.clone();
        let document = document.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: DragEvent| {
            event.prevent_default();
            let _ = zone.class_list().remove_1("drag-over");

            let Some(resource) = event
                .data_transfer()
                .and_then(|t| t.get_data("text/plain").ok())
                .filter(|r| !r.is_empty())
            else {
                return;
            };
            add_selected_resource(&document, &resource);
        });
        let _ = dropzone.add_event_listener_with_callback("drop", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

fn drag_source(event: &DragEvent) -> Option<Element> {
    event
        .target()
        .and_then(|t| t.dyn_into::<Element>().ok())?
        .closest("[data-resource]")
        .ok()
        .flatten()
}

/// Append a resource to the selected list unless it's already there
fn add_selected_resource(document: &Document, resource: &str) {
    let Some(selected) = document.query_selector(".selected-resources").ok().flatten() else {
        return;
    };
    let already = selected
        .query_selector(&format!("[data-resource=\"{resource}\"]"))
        .ok()
        .flatten()
        .is_some();
    if already {
        return;
    }

    let Ok(item) = document.create_element("div") else {
        return;
    };
    item.set_class_name("resource-item");
    let _ = item.set_attribute("data-resource", resource);
    item.set_text_content(Some(&capitalize(resource)));

    if let Ok(remove) = document.create_element("span") {
        remove.set_class_name("remove-resource");
        remove.set_text_content(Some("\u{d7}"));
        let _ = item.append_child(&remove);
    }

    let _ = selected.append_child(&item);
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
