//! Elevator Design Journey entry point
//!
//! The journey only does anything useful in a browser; the native build is
//! a stub that exercises the pure core once so `cargo run` proves the
//! logic without a DOM.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    elevator_journey::dom::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use elevator_journey::nav::{ProgressStatus, Step, resolve_current};
    use elevator_journey::tradeoff::{SliderBank, TradeoffCategory};

    env_logger::init();
    log::info!("Elevator Design Journey (native) - the interactive journey runs in the browser");

    // Exercise the pure core once so `cargo run` shows it working
    let current = resolve_current(Some("#step4"), None);
    log::info!(
        "resolved step {} (step 2 reads as {:?})",
        current.get(),
        ProgressStatus::derive(Step::new(2).unwrap_or(current), current),
    );

    let mut bank = SliderBank::default();
    bank.set(TradeoffCategory::CostReliability, 90);
    let projection = bank.projection();
    println!(
        "step {} / border {}px {} / shadow {}px",
        current.get(),
        projection.border_width,
        projection.border_color.css(),
        projection.shadow_blur,
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
