//! Trade-off sliders and the derived elevator visualization
//!
//! Three independent 1-100 sliders; all derived values (copy, indicator
//! labels, visual projection) are pure functions of the current values and
//! are recomputed in full on every change.

pub mod copy;
pub mod projection;
pub mod state;

pub use projection::{DominantCategory, Rgb, VisualProjection, project};
pub use state::{Band, SliderBank, TradeoffCategory};
