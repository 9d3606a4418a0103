//! Draggable puzzle pieces (step 7)
//!
//! Pieces drag with pointer events, constrained to the puzzle container,
//! and snap onto their `.puzzle-target` when dropped close enough. Snap
//! geometry and completion tracking are pure (`crate::puzzle`); this
//! module only moves elements and fires the connection effects.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement, PointerEvent};

use crate::anim;
use crate::consts::TRANSITION_FADE_MS;
use crate::puzzle::{self, PuzzleBoard, Rect};

/// Connection flash lifetime (ms)
const CONNECTION_EFFECT_MS: f64 = 500.0;
/// Completion burst fade-in, hold, and fade-out (ms)
const COMPLETION_IN_MS: f64 = 1000.0;
const COMPLETION_HOLD_MS: i32 = 2000;
const COMPLETION_OUT_MS: f64 = 1000.0;

/// One drag in progress
struct ActiveDrag {
    piece: HtmlElement,
    /// Pointer position at pointerdown
    start: (f64, f64),
    /// Piece rect at pointerdown (already includes the base translation)
    origin: Rect,
    /// Container rect, when the markup provides one to clamp against
    bounds: Option<Rect>,
    /// Committed translation from earlier drags
    base: (f64, f64),
    /// Translation including this drag's clamped delta
    current: (f64, f64),
}

pub fn setup(document: &Document) {
    let Some(step) = document.get_element_by_id("step7") else {
        return;
    };
    let total = step
        .query_selector_all(".puzzle-piece")
        .map(|pieces| pieces.length() as usize)
        .unwrap_or(0);
    if total == 0 {
        return;
    }

    let board = Rc::new(RefCell::new(PuzzleBoard::new(total)));
    let drag: Rc<RefCell<Option<ActiveDrag>>> = Rc::new(RefCell::new(None));

    // Pointer down on a piece starts a drag
    {
        let drag = drag.clone();
        let doc = document.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: PointerEvent| {
            let Some(piece) = event
                .target()
                .and_then(|t| t.dyn_into::<Element>().ok())
                .and_then(|el| el.closest(".puzzle-piece").ok().flatten())
                .and_then(|el| el.dyn_into::<HtmlElement>().ok())
            else {
                return;
            };
            let bounds = doc
                .query_selector(".puzzle-container")
                .ok()
                .flatten()
                .map(|el| rect_of(&el));
            let _ = piece.class_list().add_1("dragging");
            let origin = rect_of(&piece);
            let base = stored_translation(&piece);
            *drag.borrow_mut() = Some(ActiveDrag {
                piece,
                start: (event.client_x() as f64, event.client_y() as f64),
                origin,
                bounds,
                base,
                current: base,
            });
        });
        let _ = document
            .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // Pointer move drags the active piece, clamped to the container
    {
        let drag = drag.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: PointerEvent| {
            let mut drag = drag.borrow_mut();
            let Some(active) = drag.as_mut() else {
                return;
            };
            let dx = event.client_x() as f64 - active.start.0;
            let dy = event.client_y() as f64 - active.start.1;
            let (dx, dy) = match &active.bounds {
                Some(bounds) => puzzle::clamp_translation(&active.origin, bounds, dx, dy),
                None => (dx, dy),
            };
            active.current = (active.base.0 + dx, active.base.1 + dy);
            apply_translation(&active.piece, active.current);
        });
        let _ = document
            .add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // Pointer up drops the piece and checks for a snap
    {
        let doc = document.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: PointerEvent| {
            let Some(active) = drag.borrow_mut().take() else {
                return;
            };
            let _ = active.piece.class_list().remove_1("dragging");
            commit_translation(&active.piece, active.current);
            check_drop(&doc, &board, &active.piece, active.current);
        });
        let _ = document
            .add_event_listener_with_callback("pointerup", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

fn rect_of(el: &Element) -> Rect {
    let rect = el.get_bounding_client_rect();
    Rect::new(rect.left(), rect.top(), rect.width(), rect.height())
}

/// Translation committed by earlier drags, stored on the element
fn stored_translation(piece: &Element) -> (f64, f64) {
    let read = |attr: &str| {
        piece
            .get_attribute(attr)
            .and_then(|v| v.parse().ok())
            .unwrap_or(0.0)
    };
    (read("data-tx"), read("data-ty"))
}

fn apply_translation(piece: &HtmlElement, (tx, ty): (f64, f64)) {
    let _ = piece
        .style()
        .set_property("transform", &format!("translate({tx}px, {ty}px)"));
}

fn commit_translation(piece: &Element, (tx, ty): (f64, f64)) {
    let _ = piece.set_attribute("data-tx", &tx.to_string());
    let _ = piece.set_attribute("data-ty", &ty.to_string());
}

/// Snap the dropped piece onto its target if it landed close enough,
/// then fire the connection and completion effects.
fn check_drop(
    document: &Document,
    board: &Rc<RefCell<PuzzleBoard>>,
    piece: &HtmlElement,
    translation: (f64, f64),
) {
    let Some(target_id) = piece.get_attribute("data-target") else {
        return;
    };
    let selector = format!(".puzzle-target[data-id=\"{target_id}\"]");
    let Some(target) = document.query_selector(&selector).ok().flatten() else {
        return;
    };

    let target_rect = rect_of(&target);
    let Some((dx, dy)) = puzzle::snap(&rect_of(piece), &target_rect) else {
        return;
    };

    let snapped = (translation.0 + dx, translation.1 + dy);
    apply_translation(piece, snapped);
    commit_translation(piece, snapped);
    let _ = piece.class_list().add_1("connected");
    let _ = target.class_list().add_1("connected");

    // Re-drops onto an already-connected target don't re-fire effects
    if !board.borrow_mut().connect(&target_id) {
        return;
    }
    play_connection_effect(document, &target_rect);
    if board.borrow().is_complete() {
        play_completion(document);
    }
}

/// Brief flash at the connection point, removed once it fades
fn play_connection_effect(document: &Document, at: &Rect) {
    let (Ok(effect), Some(body)) = (document.create_element("div"), document.body()) else {
        return;
    };
    effect.set_class_name("connection-effect");
    let (cx, cy) = at.center();
    if let Some(el) = effect.dyn_ref::<HtmlElement>() {
        let style = el.style();
        let _ = style.set_property("left", &format!("{cx}px"));
        let _ = style.set_property("top", &format!("{cy}px"));
    }
    let _ = body.append_child(&effect);

    let Some(el) = effect.dyn_ref::<HtmlElement>().cloned() else {
        return;
    };
    let remove = effect.clone();
    anim::tween_opacity(el, 1.0, 0.0, CONNECTION_EFFECT_MS, move || {
        remove.remove();
    });
}

/// Every piece found its target: burst effect plus the completion message
fn play_completion(document: &Document) {
    let Some(step) = document.get_element_by_id("step7") else {
        return;
    };

    if let Ok(effect) = document.create_element("div") {
        effect.set_class_name("completion-effect");
        let _ = step.append_child(&effect);
        if let Some(el) = effect.dyn_ref::<HtmlElement>().cloned() {
            let fade_out = el.clone();
            let remove = effect.clone();
            anim::tween_opacity(el, 0.0, 1.0, COMPLETION_IN_MS, move || {
                anim::delay(COMPLETION_HOLD_MS, move || {
                    anim::tween_opacity(fade_out, 1.0, 0.0, COMPLETION_OUT_MS, move || {
                        remove.remove();
                    });
                });
            });
        }
    }

    if let Some(message) = step
        .query_selector(".completion-message")
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    {
        anim::tween_opacity(message, 0.0, 1.0, TRANSITION_FADE_MS * 2.0, || {});
    }
}
