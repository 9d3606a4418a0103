//! Delegated event dispatch
//!
//! One listener per event type on the document/window; the handler
//! resolves a declarative `Action` from the target's nearest
//! data-attributed ancestor. No per-element listener registration for
//! clicks or slider input.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlInputElement};

use crate::nav::{NavKey, Step};
use crate::tradeoff::TradeoffCategory;

use super::{JourneyApp, widgets};

/// What a click resolved to
#[derive(Debug, Clone)]
enum Action {
    /// Jump straight to a step (tracker entries, prev buttons, hero CTA)
    Navigate(Step),
    /// Advance behind the overlay transition (next buttons)
    Advance(Step),
    /// Swap the visible scenario panel (step 2)
    SelectScenario(Element, String),
    /// Remove a dropped resource item (step 3)
    RemoveResource(Element),
    /// Expand or collapse an abstraction layer (step 5)
    ToggleLayer(Element),
}

/// Selector covering every click target the journey reacts to
const CLICK_TARGETS: &str = "\
    .progress-tracker li[data-step], [data-next], [data-prev], \
    #start-journey, .scenario-btn[data-scenario], .remove-resource, \
    .abstraction-layer";

fn resolve_click(target: &Element) -> Option<Action> {
    let el = target.closest(CLICK_TARGETS).ok()??;

    if el.class_list().contains("remove-resource") {
        return Some(Action::RemoveResource(el));
    }
    if el.class_list().contains("abstraction-layer") {
        return Some(Action::ToggleLayer(el));
    }
    if let Some(scenario) = el.get_attribute("data-scenario") {
        return Some(Action::SelectScenario(el, scenario));
    }
    if el.id() == "start-journey" {
        return Some(Action::Navigate(Step::new(1)?));
    }
    if let Some(step) = el.get_attribute("data-next").and_then(parse_step) {
        return Some(Action::Advance(step));
    }
    if let Some(step) = el.get_attribute("data-prev").and_then(parse_step) {
        return Some(Action::Navigate(step));
    }
    if let Some(step) = el.get_attribute("data-step").and_then(parse_step) {
        return Some(Action::Navigate(step));
    }
    None
}

fn parse_step(attr: String) -> Option<Step> {
    attr.parse().ok().and_then(Step::new)
}

/// Wire the three delegated listeners: click, keydown, slider input
pub fn setup(document: &Document, app: Rc<RefCell<JourneyApp>>) {
    setup_click(document, app.clone());
    setup_keyboard(app.clone());
    setup_slider_input(document, app);
}

fn setup_click(document: &Document, app: Rc<RefCell<JourneyApp>>) {
    let doc = document.clone();
    let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::MouseEvent| {
        let Some(target) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
            return;
        };
        match resolve_click(&target) {
            Some(Action::Navigate(step)) => super::navigate(&doc, &app, step),
            Some(Action::Advance(step)) => super::navigate_with_transition(&doc, &app, step),
            Some(Action::SelectScenario(btn, scenario)) => {
                widgets::select_scenario(&doc, &btn, &scenario);
            }
            Some(Action::RemoveResource(btn)) => {
                if let Ok(Some(item)) = btn.closest(".resource-item") {
                    item.remove();
                }
            }
            Some(Action::ToggleLayer(layer)) => {
                let _ = layer.class_list().toggle("expanded");
            }
            None => {}
        }
    });
    let _ = document.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn setup_keyboard(app: Rc<RefCell<JourneyApp>>) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
        let Some(key) = NavKey::from_key(&event.key()) else {
            return;
        };
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        // Re-resolve from the document each press: the fragment is the
        // source of truth and can change under us (back button, manual
        // edit). Boundary presses resolve to no target and fall through.
        let current = super::read_current_step(&document);
        if let Some(target) = key.target(current) {
            super::navigate(&document, &app, target);
        }
    });
    let _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn setup_slider_input(document: &Document, app: Rc<RefCell<JourneyApp>>) {
    let doc = document.clone();
    let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::Event| {
        let Some(input) = event
            .target()
            .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
        else {
            return;
        };
        let Some(category) = input
            .get_attribute("data-tradeoff")
            .as_deref()
            .and_then(TradeoffCategory::from_attr)
        else {
            return;
        };
        // The range input clamps to 1..=100 for us
        let Ok(value) = input.value().parse::<u8>() else {
            return;
        };
        super::on_slider_input(&doc, &app, category, value);
    });
    let _ = document.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref());
    closure.forget();
}
