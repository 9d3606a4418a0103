//! Slider identities, value bands, and the slider bank

use crate::consts::{BAND_EDGES, SLIDER_MAX, SLIDER_MIN};

use super::projection::{VisualProjection, project};

/// One design trade-off axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TradeoffCategory {
    /// Elevator speed versus safety margin
    VelocitySafety,
    /// Control simplicity versus feature count
    SimplicityFeatures,
    /// Build cost versus component reliability
    CostReliability,
}

impl TradeoffCategory {
    pub const ALL: [TradeoffCategory; 3] = [
        TradeoffCategory::VelocitySafety,
        TradeoffCategory::SimplicityFeatures,
        TradeoffCategory::CostReliability,
    ];

    /// The `data-tradeoff` attribute value identifying this slider
    pub fn attr(self) -> &'static str {
        match self {
            TradeoffCategory::VelocitySafety => "velocity-safety",
            TradeoffCategory::SimplicityFeatures => "simplicity-features",
            TradeoffCategory::CostReliability => "cost-reliability",
        }
    }

    pub fn from_attr(attr: &str) -> Option<TradeoffCategory> {
        match attr {
            "velocity-safety" => Some(TradeoffCategory::VelocitySafety),
            "simplicity-features" => Some(TradeoffCategory::SimplicityFeatures),
            "cost-reliability" => Some(TradeoffCategory::CostReliability),
            _ => None,
        }
    }
}

/// Quarter of the slider range a value falls in. Band edges sit at
/// 25/50/75 with the lower bound inclusive, so 25 is `MidLow`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Band {
    Low,
    MidLow,
    MidHigh,
    High,
}

impl Band {
    pub fn of(value: u8) -> Band {
        if value < BAND_EDGES[0] {
            Band::Low
        } else if value < BAND_EDGES[1] {
            Band::MidLow
        } else if value < BAND_EDGES[2] {
            Band::MidHigh
        } else {
            Band::High
        }
    }

    /// Index into a per-category table of four strings
    pub fn index(self) -> usize {
        match self {
            Band::Low => 0,
            Band::MidLow => 1,
            Band::MidHigh => 2,
            Band::High => 3,
        }
    }
}

/// The three current slider values. The range input pre-clamps to 1-100;
/// the bank only debug-asserts that contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliderBank {
    velocity_safety: u8,
    simplicity_features: u8,
    cost_reliability: u8,
}

impl Default for SliderBank {
    fn default() -> Self {
        // Range inputs start centered
        Self {
            velocity_safety: 50,
            simplicity_features: 50,
            cost_reliability: 50,
        }
    }
}

impl SliderBank {
    pub fn get(&self, category: TradeoffCategory) -> u8 {
        match category {
            TradeoffCategory::VelocitySafety => self.velocity_safety,
            TradeoffCategory::SimplicityFeatures => self.simplicity_features,
            TradeoffCategory::CostReliability => self.cost_reliability,
        }
    }

    pub fn set(&mut self, category: TradeoffCategory, value: u8) {
        debug_assert!(
            (SLIDER_MIN..=SLIDER_MAX).contains(&value),
            "slider value {value} outside {SLIDER_MIN}..={SLIDER_MAX}"
        );
        match category {
            TradeoffCategory::VelocitySafety => self.velocity_safety = value,
            TradeoffCategory::SimplicityFeatures => self.simplicity_features = value,
            TradeoffCategory::CostReliability => self.cost_reliability = value,
        }
    }

    /// Proportional fill of a slider's track, in percent. Purely a visual
    /// affordance for the gradient background.
    pub fn fill_percent(&self, category: TradeoffCategory) -> f32 {
        let value = self.get(category) as f32;
        (value - SLIDER_MIN as f32) / (SLIDER_MAX as f32 - SLIDER_MIN as f32) * 100.0
    }

    /// Full visual projection from all three current values. Always a
    /// complete recomputation, even when only one slider moved.
    pub fn projection(&self) -> VisualProjection {
        project(
            self.velocity_safety,
            self.simplicity_features,
            self.cost_reliability,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_edges_lower_inclusive() {
        assert_eq!(Band::of(1), Band::Low);
        assert_eq!(Band::of(24), Band::Low);
        // 25 belongs to the second band, not the first
        assert_eq!(Band::of(25), Band::MidLow);
        assert_eq!(Band::of(49), Band::MidLow);
        assert_eq!(Band::of(50), Band::MidHigh);
        assert_eq!(Band::of(74), Band::MidHigh);
        assert_eq!(Band::of(75), Band::High);
        assert_eq!(Band::of(100), Band::High);
    }

    #[test]
    fn test_attr_round_trip() {
        for category in TradeoffCategory::ALL {
            assert_eq!(TradeoffCategory::from_attr(category.attr()), Some(category));
        }
        assert_eq!(TradeoffCategory::from_attr("speed"), None);
    }

    #[test]
    fn test_bank_set_get() {
        let mut bank = SliderBank::default();
        assert_eq!(bank.get(TradeoffCategory::VelocitySafety), 50);

        bank.set(TradeoffCategory::VelocitySafety, 80);
        bank.set(TradeoffCategory::CostReliability, 90);
        assert_eq!(bank.get(TradeoffCategory::VelocitySafety), 80);
        assert_eq!(bank.get(TradeoffCategory::SimplicityFeatures), 50);
        assert_eq!(bank.get(TradeoffCategory::CostReliability), 90);
    }

    #[test]
    fn test_fill_percent() {
        let mut bank = SliderBank::default();
        bank.set(TradeoffCategory::VelocitySafety, 1);
        assert_eq!(bank.fill_percent(TradeoffCategory::VelocitySafety), 0.0);
        bank.set(TradeoffCategory::VelocitySafety, 100);
        assert_eq!(bank.fill_percent(TradeoffCategory::VelocitySafety), 100.0);
    }

    #[test]
    fn test_set_is_idempotent_for_projection() {
        let mut bank = SliderBank::default();
        bank.set(TradeoffCategory::SimplicityFeatures, 33);
        let first = bank.projection();
        bank.set(TradeoffCategory::SimplicityFeatures, 33);
        let second = bank.projection();
        assert_eq!(first, second);
    }
}
