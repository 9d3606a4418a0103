//! Browser glue: projecting journey state onto the document
//!
//! The markup is a collaborator, not something we own: every lookup that
//! can miss degrades to a silent no-op. State transitions happen on owned
//! values (`Step`, `SliderBank`, `TransitionState`); this module only
//! reads events in and writes classes/styles/the URL fragment out.

pub mod events;
pub mod feedback;
pub mod parallax;
pub mod puzzle;
pub mod widgets;

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, ScrollBehavior, ScrollIntoViewOptions};

use crate::anim;
use crate::consts::TRANSITION_FADE_MS;
use crate::nav::{ProgressStatus, Step, TransitionState, resolve_current};
use crate::tradeoff::{SliderBank, TradeoffCategory, VisualProjection, copy};

/// Application state shared across event closures
pub struct JourneyApp {
    pub current: Step,
    pub transition: TransitionState,
    pub sliders: SliderBank,
}

impl JourneyApp {
    fn new(current: Step) -> Self {
        Self {
            current,
            transition: TransitionState::new(),
            sliders: SliderBank::default(),
        }
    }
}

/// Boot the journey: logging, initial section, overlay, event wiring,
/// first tradeoff paint.
pub fn run() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    log::info!("Elevator Design Journey starting...");

    let window = web_sys::window().expect("no window");
    let document = window.document().expect("no document");

    ensure_overlay(&document);

    // Deep link: a valid #stepN hash navigates there on load; otherwise
    // the hero section is the landing view.
    let initial = match fragment(&document).as_deref().and_then(crate::nav::parse_fragment) {
        Some(step) => {
            apply_step(&document, step);
            step
        }
        None => {
            if let Some(hero) = document.get_element_by_id("hero") {
                let _ = hero.class_list().add_1("active");
            }
            Step::HERO
        }
    };

    let app = Rc::new(RefCell::new(JourneyApp::new(initial)));

    events::setup(&document, app.clone());
    widgets::setup(&document);
    puzzle::setup(&document);
    feedback::setup(&document);
    parallax::setup(&document);
    anim::setup_scroll_reveal(&document);

    render_tradeoffs(&document, &app.borrow().sliders);
    for category in TradeoffCategory::ALL {
        render_slider_fill(&document, &app.borrow().sliders, category);
    }

    log::info!("Elevator Design Journey running (initial step {})", initial.get());
}

/// Current URL fragment, if any (with its leading `#`)
fn fragment(document: &Document) -> Option<String> {
    let hash = document.location()?.hash().ok()?;
    (!hash.is_empty()).then_some(hash)
}

/// Step declared by the section the DOM currently marks active
fn dom_active_step(document: &Document) -> Option<Step> {
    let section = document.query_selector(".step-section.active").ok()??;
    let n: u8 = section.get_attribute("data-step")?.parse().ok()?;
    if n == 0 { Some(Step::HERO) } else { Step::new(n) }
}

/// Resolve the current step from the document: fragment, then the active
/// section, then step 1.
pub fn read_current_step(document: &Document) -> Step {
    resolve_current(fragment(document).as_deref(), dom_active_step(document))
}

/// Apply a navigation: rewrite the fragment, retag every tracker entry,
/// activate exactly the target section, and smooth-scroll to it.
pub fn apply_step(document: &Document, step: Step) {
    if let Some(location) = document.location() {
        let _ = location.set_hash(&step.fragment());
    }

    update_progress_tracker(document, step);

    if let Ok(sections) = document.query_selector_all(".step-section") {
        for i in 0..sections.length() {
            if let Some(el) = sections.get(i).and_then(|n| n.dyn_into::<Element>().ok()) {
                let _ = el.class_list().remove_1("active");
            }
        }
    }

    if let Some(target) = document.get_element_by_id(&step.section_id()) {
        let _ = target.class_list().add_1("active");
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        target.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

/// Recompute every tracker entry's status against the current step
fn update_progress_tracker(document: &Document, current: Step) {
    let Ok(items) = document.query_selector_all(".progress-tracker li") else {
        return;
    };
    for i in 0..items.length() {
        let Some(item) = items.get(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
            continue;
        };
        let Some(entry) = item
            .get_attribute("data-step")
            .and_then(|s| s.parse().ok())
            .and_then(Step::new)
        else {
            continue;
        };

        let list = item.class_list();
        let _ = list.remove_2("active", "completed");
        if let Some(class) = ProgressStatus::derive(entry, current).class() {
            let _ = list.add_1(class);
        }
    }
}

/// Direct navigation (tracker clicks, prev buttons, keyboard): no overlay.
pub fn navigate(document: &Document, app: &Rc<RefCell<JourneyApp>>, target: Step) {
    apply_step(document, target);
    app.borrow_mut().current = target;
}

/// Navigation behind the overlay transition (next buttons). The step
/// switch happens only once the overlay reaches full opacity; a request
/// while a fade is in flight is dropped by the transition machine. With
/// no overlay node in the document the transition degrades to a direct
/// navigation.
pub fn navigate_with_transition(document: &Document, app: &Rc<RefCell<JourneyApp>>, target: Step) {
    if app.borrow_mut().transition.request(target).is_none() {
        return;
    }

    let overlay = document
        .query_selector(".transition-overlay")
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok());

    let Some(overlay) = overlay else {
        let mut state = app.borrow_mut();
        if let Some((step, _)) = state.transition.fade_in_complete() {
            drop(state);
            navigate(document, app, step);
            app.borrow_mut().transition.fade_out_complete();
        }
        return;
    };

    let app = app.clone();
    let document = document.clone();
    let overlay_out = overlay.clone();
    anim::tween_opacity(overlay, 0.0, 1.0, TRANSITION_FADE_MS, move || {
        // Overlay is opaque: safe to switch without revealing the new
        // section mid-fade.
        let Some((step, _)) = app.borrow_mut().transition.fade_in_complete() else {
            return;
        };
        navigate(&document, &app, step);

        anim::tween_opacity(overlay_out, 1.0, 0.0, TRANSITION_FADE_MS, move || {
            app.borrow_mut().transition.fade_out_complete();
        });
    });
}

/// Create the fullscreen transition overlay if the markup doesn't carry one
fn ensure_overlay(document: &Document) {
    let exists = document
        .query_selector(".transition-overlay")
        .ok()
        .flatten()
        .is_some();
    if exists {
        return;
    }
    let (Ok(overlay), Some(body)) = (document.create_element("div"), document.body()) else {
        return;
    };
    overlay.set_class_name("transition-overlay");
    if let Some(el) = overlay.dyn_ref::<HtmlElement>() {
        let _ = el.style().set_property("opacity", "0");
    }
    let _ = body.append_child(&overlay);
}

/// One slider moved: repaint its fill and copy, then recompute the whole
/// representation from all three values.
pub fn on_slider_input(
    document: &Document,
    app: &Rc<RefCell<JourneyApp>>,
    category: TradeoffCategory,
    value: u8,
) {
    app.borrow_mut().sliders.set(category, value);
    let sliders = app.borrow().sliders;

    render_slider_fill(document, &sliders, category);
    render_effect_description(document, &sliders, category);
    render_tradeoffs(document, &sliders);
}

/// Proportional two-stop gradient on the slider track
fn render_slider_fill(document: &Document, sliders: &SliderBank, category: TradeoffCategory) {
    let selector = format!(".trade-slider[data-tradeoff=\"{}\"]", category.attr());
    let Some(slider) = document
        .query_selector(&selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    else {
        return;
    };
    let pct = sliders.fill_percent(category);
    let gradient = format!(
        "linear-gradient(to right, var(--accent-teal) 0%, var(--accent-teal) {pct}%, \
         var(--highlight-orange) {pct}%, var(--highlight-orange) 100%)"
    );
    let _ = slider.style().set_property("background", &gradient);
}

/// Swap in the effect copy next to a slider, with the update pulse
fn render_effect_description(document: &Document, sliders: &SliderBank, category: TradeoffCategory) {
    let selector = format!(".trade-slider[data-tradeoff=\"{}\"]", category.attr());
    let Some(slider) = document.query_selector(&selector).ok().flatten() else {
        return;
    };
    let Some(container) = slider
        .parent_element()
        .and_then(|p| p.query_selector(".effect-description").ok().flatten())
    else {
        return;
    };
    anim::pulse_class(&container, "update-animation");
    if let Some(text) = container.query_selector("p").ok().flatten() {
        text.set_text_content(Some(copy::effect_description(category, sliders.get(category))));
    }
}

/// Repaint the indicators and the elevator representation from all three
/// current values
pub fn render_tradeoffs(document: &Document, sliders: &SliderBank) {
    for category in TradeoffCategory::ALL {
        render_indicator(document, category, sliders.get(category));
    }
    render_representation(document, sliders.projection());
}

fn render_indicator(document: &Document, category: TradeoffCategory, value: u8) {
    let Some(indicator) = document
        .query_selector(copy::indicator_selector(category))
        .ok()
        .flatten()
    else {
        return;
    };
    anim::pulse_class(&indicator, "update-animation");
    indicator.set_text_content(Some(copy::indicator_label(category, value)));
}

fn render_representation(document: &Document, projection: VisualProjection) {
    let Some(el) = document
        .query_selector(".elevator-representation")
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    else {
        return;
    };

    let style = el.style();
    let _ = style.set_property("border-width", &format!("{}px", projection.border_width));
    let _ = style.set_property("border-color", &projection.border_color.css());
    let _ = style.set_property(
        "background-color",
        &format!("rgba(26, 75, 105, {})", projection.background_opacity),
    );
    let _ = style.set_property(
        "box-shadow",
        &format!(
            "0 0 {}px rgba(57, 194, 215, {})",
            projection.shadow_blur, projection.shadow_opacity
        ),
    );

    let list = el.class_list();
    let _ = list.remove_3("design-speed", "design-features", "design-reliability");
    if let Some(dominant) = projection.dominant {
        let _ = list.add_1(dominant.class());
    }
}
