//! Step navigation state machine
//!
//! Everything here is pure: the current step is an owned value, DOM/URL
//! synchronization is a projection applied elsewhere. No browser types.

pub mod progress;
pub mod step;
pub mod transition;

pub use progress::ProgressStatus;
pub use step::{NavKey, Step, parse_fragment, resolve_current};
pub use transition::{TransitionCmd, TransitionState};
