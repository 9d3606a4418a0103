//! Feedback-loop diagram (step 9)
//!
//! Builds an SVG loop inside `.feedback-loop-animation`, draws the path
//! in with a dash-offset tween, then orbits staggered data points along
//! it forever. Orbit timing is pure (`crate::motion::orbit_fraction`).

use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, SvgPathElement};

use crate::anim;
use crate::motion::orbit_fraction;

const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Two cubic arcs forming the closed-looking feedback loop
const LOOP_PATH: &str = "M100,200 C150,100 350,100 400,200 C450,300 650,300 700,200";
const VIEW_BOX: &str = "0 0 800 400";

const DRAW_MS: f64 = 3000.0;
const DATA_POINT_COUNT: usize = 5;
const DATA_POINT_RADIUS: &str = "8";
const ORBIT_PERIOD_MS: f64 = 8000.0;
const ORBIT_STAGGER_MS: f64 = 1500.0;

pub fn setup(document: &Document) {
    let Some(container) = document.query_selector(".feedback-loop-animation").ok().flatten()
    else {
        return;
    };

    let Ok(svg) = document.create_element_ns(Some(SVG_NS), "svg") else {
        return;
    };
    let _ = svg.set_attribute("width", "100%");
    let _ = svg.set_attribute("height", "100%");
    let _ = svg.set_attribute("viewBox", VIEW_BOX);
    let _ = container.append_child(&svg);

    let Ok(path_el) = document.create_element_ns(Some(SVG_NS), "path") else {
        return;
    };
    let _ = path_el.set_attribute("d", LOOP_PATH);
    let _ = path_el.set_attribute("stroke", "var(--accent-teal)");
    let _ = path_el.set_attribute("stroke-width", "4");
    let _ = path_el.set_attribute("fill", "none");
    path_el.set_class_name("feedback-path");
    let _ = svg.append_child(&path_el);

    let Ok(path) = path_el.dyn_into::<SvgPathElement>() else {
        return;
    };
    let length = path.get_total_length();

    // Draw the path in by retracting its dash offset
    let _ = path.set_attribute("stroke-dasharray", &length.to_string());
    let _ = path.set_attribute("stroke-dashoffset", &length.to_string());
    {
        let path = path.clone();
        anim::tween(
            length,
            0.0,
            DRAW_MS,
            move |offset| {
                let _ = path.set_attribute("stroke-dashoffset", &offset.to_string());
            },
            || {},
        );
    }

    let mut points = Vec::with_capacity(DATA_POINT_COUNT);
    for i in 0..DATA_POINT_COUNT {
        let Ok(circle) = document.create_element_ns(Some(SVG_NS), "circle") else {
            continue;
        };
        let _ = circle.set_attribute("r", DATA_POINT_RADIUS);
        let _ = circle.set_attribute("fill", "var(--highlight-orange)");
        let _ = circle.set_attribute("opacity", "0");
        circle.set_class_name("data-point");
        let _ = svg.append_child(&circle);
        points.push((circle, i as f64 * ORBIT_STAGGER_MS));
    }

    schedule_orbit(Orbit {
        path,
        length,
        points,
        start: 0.0,
    });
}

/// The perpetual orbit loop; re-registers itself every frame
struct Orbit {
    path: SvgPathElement,
    length: f32,
    points: Vec<(Element, f64)>,
    start: f64,
}

fn schedule_orbit(orbit: Orbit) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let closure = Closure::once(move |time: f64| step_orbit(orbit, time));
    let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
    closure.forget();
}

fn step_orbit(mut orbit: Orbit, time: f64) {
    if orbit.start == 0.0 {
        orbit.start = time;
    }
    let elapsed = time - orbit.start;

    for (circle, delay_ms) in &orbit.points {
        match orbit_fraction(elapsed, *delay_ms, ORBIT_PERIOD_MS) {
            // Still waiting out the stagger delay
            None => {
                let _ = circle.set_attribute("opacity", "0");
            }
            Some(fraction) => {
                if let Ok(point) = orbit.path.get_point_at_length(fraction as f32 * orbit.length)
                {
                    let _ = circle.set_attribute("cx", &point.x().to_string());
                    let _ = circle.set_attribute("cy", &point.y().to_string());
                    let _ = circle.set_attribute("opacity", "1");
                }
            }
        }
    }

    schedule_orbit(orbit);
}
