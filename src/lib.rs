//! Elevator Design Journey - scroll-driven interactive walkthrough
//!
//! Core modules:
//! - `nav`: Step navigation state machine, progress derivation, transitions
//! - `tradeoff`: Trade-off sliders and the derived visual projection
//! - `motion`: Timing/geometry math for the widget animations
//! - `puzzle`: Puzzle-piece snap geometry and connection tracking
//! - `dom`: Browser DOM projection and event wiring (wasm only)
//! - `anim`: Minimal requestAnimationFrame tween helpers (wasm only)
//!
//! `nav`, `tradeoff`, `motion`, and `puzzle` are platform-free and
//! deterministic; everything that touches the document lives behind
//! `cfg(target_arch = "wasm32")`.

pub mod motion;
pub mod nav;
pub mod puzzle;
pub mod tradeoff;

#[cfg(target_arch = "wasm32")]
pub mod anim;
#[cfg(target_arch = "wasm32")]
pub mod dom;

pub use nav::{ProgressStatus, Step};
pub use tradeoff::{SliderBank, TradeoffCategory, VisualProjection};

/// Journey configuration constants
pub mod consts {
    /// First navigable journey step
    pub const FIRST_STEP: u8 = 1;
    /// Last journey step
    pub const LAST_STEP: u8 = 12;

    /// Trade-off slider range (the input control enforces this)
    pub const SLIDER_MIN: u8 = 1;
    pub const SLIDER_MAX: u8 = 100;

    /// Value-band edges for descriptions and indicator labels.
    /// Lower bound of each band is inclusive: 25 falls in the second band.
    pub const BAND_EDGES: [u8; 3] = [25, 50, 75];

    /// A trade-off axis dominates only when its emphasis exceeds the
    /// runner-up by more than this margin (out of 100). Keeps the
    /// elevator visualization from flapping between styles when the
    /// sliders sit close together.
    pub const DOMINANT_MARGIN: i16 = 15;

    /// Overlay fade duration for step transitions (ms, each direction)
    pub const TRANSITION_FADE_MS: f64 = 400.0;
    /// How long the `update-animation` pulse class stays applied (ms)
    pub const PULSE_MS: i32 = 500;
}

/// Linear interpolation between two values
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}
