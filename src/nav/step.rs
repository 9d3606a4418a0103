//! Step identifiers and current-step resolution
//!
//! A `Step` is always in range: 0 is the hero/landing view, 1..=12 are the
//! numbered journey sections. Out-of-range values are unrepresentable, so
//! navigation code never has to clamp.

use crate::consts::{FIRST_STEP, LAST_STEP};

/// One position in the guided journey. 0 = hero, 1..=12 = numbered steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Step(u8);

impl Step {
    /// The landing view. Reachable only as the initial default, never as a
    /// navigation target.
    pub const HERO: Step = Step(0);

    /// Construct a journey step. `None` unless `n` is in 1..=12.
    pub fn new(n: u8) -> Option<Step> {
        (FIRST_STEP..=LAST_STEP).contains(&n).then_some(Step(n))
    }

    /// Raw step number (0 for the hero)
    #[inline]
    pub fn get(self) -> u8 {
        self.0
    }

    #[inline]
    pub fn is_hero(self) -> bool {
        self.0 == 0
    }

    /// Next step, if any. From the hero this is step 1; `None` at step 12.
    pub fn next(self) -> Option<Step> {
        (self.0 < LAST_STEP).then(|| Step(self.0 + 1))
    }

    /// Previous step, if any. `None` at step 1 and at the hero.
    pub fn prev(self) -> Option<Step> {
        (self.0 > FIRST_STEP).then(|| Step(self.0 - 1))
    }

    /// URL fragment for this step (`step3`), without the leading `#`.
    pub fn fragment(self) -> String {
        format!("step{}", self.0)
    }

    /// Element id of the matching section (`step3`, or `hero`).
    pub fn section_id(self) -> String {
        if self.is_hero() {
            "hero".to_string()
        } else {
            format!("step{}", self.0)
        }
    }
}

/// Parse a URL fragment of the form `stepN` (leading `#` optional).
/// Anything malformed or outside 1..=12 is `None`.
pub fn parse_fragment(fragment: &str) -> Option<Step> {
    let raw = fragment.strip_prefix('#').unwrap_or(fragment);
    let digits = raw.strip_prefix("step")?;
    let n: u8 = digits.parse().ok()?;
    Step::new(n)
}

/// Resolve the current step with the three-tier fallback: a valid URL
/// fragment wins, else the section the DOM currently marks active, else
/// step 1. The DOM tier's value is supplied by the caller so this stays
/// pure and bookmark/deep-link behavior stays testable.
pub fn resolve_current(fragment: Option<&str>, dom_active: Option<Step>) -> Step {
    fragment
        .and_then(parse_fragment)
        .or(dom_active)
        .unwrap_or(Step(FIRST_STEP))
}

/// Keyboard navigation intents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    Advance,
    Retreat,
}

impl NavKey {
    /// Map a `KeyboardEvent::key` string to an intent.
    pub fn from_key(key: &str) -> Option<NavKey> {
        match key {
            "ArrowRight" | "ArrowDown" => Some(NavKey::Advance),
            "ArrowLeft" | "ArrowUp" => Some(NavKey::Retreat),
            _ => None,
        }
    }

    /// Apply the intent to the current step. Boundary presses are no-ops:
    /// no wraparound in either direction.
    pub fn target(self, current: Step) -> Option<Step> {
        match self {
            NavKey::Advance => current.next(),
            NavKey::Retreat => current.prev(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_range() {
        assert!(Step::new(0).is_none());
        assert!(Step::new(1).is_some());
        assert!(Step::new(12).is_some());
        assert!(Step::new(13).is_none());
        assert!(Step::new(255).is_none());
    }

    #[test]
    fn test_fragment_round_trip() {
        for n in 1..=12 {
            let step = Step::new(n).unwrap();
            assert_eq!(parse_fragment(&step.fragment()), Some(step));
            // With the leading # as the browser reports it
            assert_eq!(parse_fragment(&format!("#step{n}")), Some(step));
        }
    }

    #[test]
    fn test_parse_fragment_rejects_malformed() {
        assert_eq!(parse_fragment(""), None);
        assert_eq!(parse_fragment("#"), None);
        assert_eq!(parse_fragment("step"), None);
        assert_eq!(parse_fragment("step0"), None);
        assert_eq!(parse_fragment("step13"), None);
        assert_eq!(parse_fragment("step-1"), None);
        assert_eq!(parse_fragment("stepfour"), None);
        assert_eq!(parse_fragment("#intro"), None);
        assert_eq!(parse_fragment("step999999999999"), None);
    }

    #[test]
    fn test_resolve_current_tiers() {
        let five = Step::new(5).unwrap();
        let seven = Step::new(7).unwrap();

        // Tier 1: valid fragment wins even over a DOM-active section
        assert_eq!(resolve_current(Some("#step5"), Some(seven)), five);
        // Tier 2: bad fragment falls back to the DOM-active section
        assert_eq!(resolve_current(Some("#step99"), Some(seven)), seven);
        assert_eq!(resolve_current(Some("#bogus"), Some(seven)), seven);
        assert_eq!(resolve_current(None, Some(seven)), seven);
        // Tier 3: nothing active defaults to step 1
        assert_eq!(resolve_current(None, None), Step::new(1).unwrap());
        assert_eq!(resolve_current(Some("#nope"), None), Step::new(1).unwrap());
    }

    #[test]
    fn test_keyboard_boundaries() {
        let first = Step::new(1).unwrap();
        let last = Step::new(12).unwrap();

        assert_eq!(NavKey::Retreat.target(first), None);
        assert_eq!(NavKey::Advance.target(last), None);
        assert_eq!(NavKey::Advance.target(first), Step::new(2));
        assert_eq!(NavKey::Retreat.target(last), Step::new(11));

        // From the landing view the right arrow starts the journey
        assert_eq!(NavKey::Advance.target(Step::HERO), Step::new(1));
        assert_eq!(NavKey::Retreat.target(Step::HERO), None);
    }

    #[test]
    fn test_key_mapping() {
        assert_eq!(NavKey::from_key("ArrowRight"), Some(NavKey::Advance));
        assert_eq!(NavKey::from_key("ArrowDown"), Some(NavKey::Advance));
        assert_eq!(NavKey::from_key("ArrowLeft"), Some(NavKey::Retreat));
        assert_eq!(NavKey::from_key("ArrowUp"), Some(NavKey::Retreat));
        assert_eq!(NavKey::from_key("Enter"), None);
        assert_eq!(NavKey::from_key(" "), None);
    }

    #[test]
    fn test_section_ids() {
        assert_eq!(Step::HERO.section_id(), "hero");
        assert_eq!(Step::new(4).unwrap().section_id(), "step4");
    }
}
