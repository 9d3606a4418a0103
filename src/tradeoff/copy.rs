//! Fixed copy for slider effects and elevator indicators
//!
//! One four-entry table per category/indicator, selected by value band.
//! The strings are editorial content, not logic.

use super::state::{Band, TradeoffCategory};

const VELOCITY_SAFETY_EFFECTS: [&str; 4] = [
    "Prioritizing maximum elevator speed with standard safety features.",
    "Good balance with faster speed while maintaining important safety measures.",
    "Balanced approach with moderate speed and solid safety features.",
    "Maximizing safety features with reduced maximum speed.",
];

const SIMPLICITY_FEATURES_EFFECTS: [&str; 4] = [
    "Minimalist design with only essential controls for clarity and ease of use.",
    "Simple design with a few carefully selected additional features.",
    "Balanced approach with a moderate set of useful features.",
    "Feature-rich experience with many options and capabilities.",
];

const COST_RELIABILITY_EFFECTS: [&str; 4] = [
    "Budget-oriented approach with standard reliability components.",
    "Good value balance with selective investment in key reliability areas.",
    "Investing in quality components for better long-term reliability.",
    "Maximum reliability focus with premium components regardless of cost.",
];

const SPEED_LABELS: [&str; 4] = ["Maximum", "High", "Moderate", "Safety-Optimized"];
const FEATURES_LABELS: [&str; 4] = ["Minimal", "Essential", "Comprehensive", "Maximum"];
const RELIABILITY_LABELS: [&str; 4] = ["Basic", "Standard", "High", "Premium"];

/// Effect-description copy for a slider at the given value
pub fn effect_description(category: TradeoffCategory, value: u8) -> &'static str {
    let table = match category {
        TradeoffCategory::VelocitySafety => &VELOCITY_SAFETY_EFFECTS,
        TradeoffCategory::SimplicityFeatures => &SIMPLICITY_FEATURES_EFFECTS,
        TradeoffCategory::CostReliability => &COST_RELIABILITY_EFFECTS,
    };
    table[Band::of(value).index()]
}

/// Indicator label for a slider at the given value. Labels key off the
/// raw slider value: the speed indicator reads "Maximum" at the low end
/// of velocity-safety, where the design favors speed.
pub fn indicator_label(category: TradeoffCategory, value: u8) -> &'static str {
    let table = match category {
        TradeoffCategory::VelocitySafety => &SPEED_LABELS,
        TradeoffCategory::SimplicityFeatures => &FEATURES_LABELS,
        TradeoffCategory::CostReliability => &RELIABILITY_LABELS,
    };
    table[Band::of(value).index()]
}

/// CSS class of the indicator node this category's label lands in
pub fn indicator_selector(category: TradeoffCategory) -> &'static str {
    match category {
        TradeoffCategory::VelocitySafety => ".elevator-speed-indicator .indicator-value",
        TradeoffCategory::SimplicityFeatures => ".elevator-features-indicator .indicator-value",
        TradeoffCategory::CostReliability => ".elevator-reliability-indicator .indicator-value",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_selects_copy() {
        assert_eq!(
            effect_description(TradeoffCategory::VelocitySafety, 1),
            VELOCITY_SAFETY_EFFECTS[0]
        );
        // 25 is the lower edge of the second band
        assert_eq!(
            effect_description(TradeoffCategory::VelocitySafety, 25),
            VELOCITY_SAFETY_EFFECTS[1]
        );
        assert_eq!(
            effect_description(TradeoffCategory::CostReliability, 100),
            COST_RELIABILITY_EFFECTS[3]
        );
    }

    #[test]
    fn test_indicator_labels_use_raw_value() {
        // Low velocity-safety value means speed wins
        assert_eq!(indicator_label(TradeoffCategory::VelocitySafety, 10), "Maximum");
        assert_eq!(
            indicator_label(TradeoffCategory::VelocitySafety, 90),
            "Safety-Optimized"
        );
        assert_eq!(indicator_label(TradeoffCategory::SimplicityFeatures, 60), "Comprehensive");
        assert_eq!(indicator_label(TradeoffCategory::CostReliability, 30), "Standard");
    }
}
