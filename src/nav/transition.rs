//! Two-phase overlay transition between steps
//!
//! The step switch must happen while the overlay is at full opacity so the
//! incoming section is never revealed mid-fade. The machine hands out fade
//! commands; the animation engine reports completions back. State mutation
//! happens strictly in the fade-in completion continuation.
//!
//! A navigation request that arrives while a transition is in flight is
//! dropped, not queued: the machine is single-flight.

use super::step::Step;

/// Fade command for the animation engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionCmd {
    /// Bring the overlay to full opacity
    FadeIn,
    /// Return the overlay to transparent
    FadeOut,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Idle,
    FadingIn { target: Step },
    FadingOut,
}

/// Overlay transition state machine
#[derive(Debug, Clone, Copy)]
pub struct TransitionState {
    phase: Phase,
}

impl Default for TransitionState {
    fn default() -> Self {
        Self::new()
    }
}

impl TransitionState {
    pub fn new() -> Self {
        Self { phase: Phase::Idle }
    }

    /// True while a fade is running in either direction
    pub fn in_flight(&self) -> bool {
        self.phase != Phase::Idle
    }

    /// Ask to switch to `target` behind the overlay. Returns the fade-in
    /// command to run, or `None` if a transition is already in flight
    /// (the request is dropped).
    pub fn request(&mut self, target: Step) -> Option<TransitionCmd> {
        match self.phase {
            Phase::Idle => {
                self.phase = Phase::FadingIn { target };
                Some(TransitionCmd::FadeIn)
            }
            _ => {
                log::debug!("transition in flight, dropping request for {target:?}");
                None
            }
        }
    }

    /// The overlay reached full opacity. Returns the step to switch to now
    /// plus the fade-out command to run afterward.
    pub fn fade_in_complete(&mut self) -> Option<(Step, TransitionCmd)> {
        match self.phase {
            Phase::FadingIn { target } => {
                self.phase = Phase::FadingOut;
                Some((target, TransitionCmd::FadeOut))
            }
            _ => None,
        }
    }

    /// The overlay returned to transparent; the machine is available again.
    pub fn fade_out_complete(&mut self) {
        if self.phase == Phase::FadingOut {
            self.phase = Phase::Idle;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step(n: u8) -> Step {
        Step::new(n).unwrap()
    }

    #[test]
    fn test_full_cycle() {
        let mut t = TransitionState::new();
        assert!(!t.in_flight());

        assert_eq!(t.request(step(3)), Some(TransitionCmd::FadeIn));
        assert!(t.in_flight());

        // Switch target is delivered only at full opacity
        let (target, cmd) = t.fade_in_complete().unwrap();
        assert_eq!(target, step(3));
        assert_eq!(cmd, TransitionCmd::FadeOut);
        assert!(t.in_flight());

        t.fade_out_complete();
        assert!(!t.in_flight());
    }

    #[test]
    fn test_single_flight_drops_overlap() {
        let mut t = TransitionState::new();
        assert!(t.request(step(2)).is_some());

        // Second request while fading in: dropped
        assert_eq!(t.request(step(9)), None);

        // Still fading toward the original target
        let (target, _) = t.fade_in_complete().unwrap();
        assert_eq!(target, step(2));

        // Requests during fade-out are dropped too
        assert_eq!(t.request(step(9)), None);
        t.fade_out_complete();

        // Available again afterward
        assert_eq!(t.request(step(9)), Some(TransitionCmd::FadeIn));
    }

    #[test]
    fn test_spurious_completions_are_noops() {
        let mut t = TransitionState::new();
        assert!(t.fade_in_complete().is_none());
        t.fade_out_complete();
        assert!(!t.in_flight());

        // fade_out_complete while fading in must not free the machine
        assert!(t.request(step(5)).is_some());
        t.fade_out_complete();
        assert!(t.in_flight());
        assert!(t.fade_in_complete().is_some());
    }
}
