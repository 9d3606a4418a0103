//! Visual projection of the three slider values onto the elevator
//! representation
//!
//! This is the one nontrivial computation in the journey. Low
//! velocity-safety means the design emphasizes speed, so that axis is
//! inverted before scoring; the other two read directly. Every output is
//! recomputed from scratch on any change.

use crate::consts::DOMINANT_MARGIN;
use crate::lerp;

/// Border color at quality 0 (cold teal)
pub const BORDER_COLD: Rgb = Rgb::new(0x39, 0xc2, 0xd7);
/// Border color at quality 1 (warm amber)
pub const BORDER_WARM: Rgb = Rgb::new(0xe6, 0xa6, 0x4d);

/// An sRGB color, 8 bits per channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Rgb {
        Rgb { r, g, b }
    }

    /// Per-channel linear interpolation toward `other`, each channel
    /// rounded independently
    pub fn lerp(self, other: Rgb, t: f32) -> Rgb {
        let channel = |a: u8, b: u8| lerp(a as f32, b as f32, t).round() as u8;
        Rgb {
            r: channel(self.r, other.r),
            g: channel(self.g, other.g),
            b: channel(self.b, other.b),
        }
    }

    /// CSS hex form, `#rrggbb`
    pub fn css(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// The axis a design leans into hard enough to get a styling class
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DominantCategory {
    Speed,
    Features,
    Reliability,
}

impl DominantCategory {
    /// CSS class applied to the elevator representation
    pub fn class(self) -> &'static str {
        match self {
            DominantCategory::Speed => "design-speed",
            DominantCategory::Features => "design-features",
            DominantCategory::Reliability => "design-reliability",
        }
    }

    pub const ALL: [DominantCategory; 3] = [
        DominantCategory::Speed,
        DominantCategory::Features,
        DominantCategory::Reliability,
    ];
}

/// Derived styling for the elevator representation. Stateless: a pure
/// function of the three slider values, never partially updated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisualProjection {
    /// Border width in px (2..=6, scales with quality)
    pub border_width: u8,
    /// Border color, cold teal at quality 0 through warm amber at 1
    pub border_color: Rgb,
    /// Background opacity (0.3..=0.7, scales with complexity)
    pub background_opacity: f32,
    /// Box-shadow blur radius in px (5..=20, scales with efficiency)
    pub shadow_blur: u8,
    /// Box-shadow opacity (0.2..=0.6, scales with efficiency)
    pub shadow_opacity: f32,
    /// Axis that dominates the design, if any does by more than the margin
    pub dominant: Option<DominantCategory>,
}

/// Compute the projection from the three raw slider values (each 1-100).
pub fn project(velocity_safety: u8, simplicity_features: u8, cost_reliability: u8) -> VisualProjection {
    // Invert velocity-safety: the low end of that slider is the fast end
    let speed_emphasis = 100 - velocity_safety as i16;
    let features_emphasis = simplicity_features as i16;
    let reliability_emphasis = cost_reliability as i16;

    let efficiency_score =
        (speed_emphasis as f32 * 0.6 + (100 - features_emphasis) as f32 * 0.4) / 100.0;
    let complexity_score = features_emphasis as f32 / 100.0;
    let quality_score = reliability_emphasis as f32 / 100.0;

    let border_width = 2 + (quality_score * 4.0).round() as u8;
    let border_color = BORDER_COLD.lerp(BORDER_WARM, quality_score);
    let background_opacity = 0.3 + complexity_score * 0.4;
    let shadow_blur = 5 + (efficiency_score * 15.0).round() as u8;
    let shadow_opacity = 0.2 + efficiency_score * 0.4;

    // Rank the emphases; an axis dominates only by a clear margin.
    // Stable sort keeps the speed/features/reliability order on ties,
    // though ties can never clear the margin anyway.
    let mut ranked = [
        (DominantCategory::Speed, speed_emphasis),
        (DominantCategory::Features, features_emphasis),
        (DominantCategory::Reliability, reliability_emphasis),
    ];
    ranked.sort_by_key(|&(_, emphasis)| std::cmp::Reverse(emphasis));
    let dominant = (ranked[0].1 > ranked[1].1 + DOMINANT_MARGIN).then_some(ranked[0].0);

    VisualProjection {
        border_width,
        border_color,
        background_opacity,
        shadow_blur,
        shadow_opacity,
        dominant,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const EPS: f32 = 1e-6;

    #[test]
    fn test_worked_example() {
        // velocity-safety 80, simplicity-features 20, cost-reliability 90
        let p = project(80, 20, 90);

        // quality 0.9 -> border 2 + round(3.6) = 6
        assert_eq!(p.border_width, 6);
        // complexity 0.2 -> background 0.38
        assert!((p.background_opacity - 0.38).abs() < EPS);
        // speed emphasis 20, features emphasis 20 -> efficiency 0.44
        assert_eq!(p.shadow_blur, 12);
        assert!((p.shadow_opacity - 0.376).abs() < EPS);
        // reliability 90 leads features/speed (20) by 70 > 15
        assert_eq!(p.dominant, Some(DominantCategory::Reliability));
    }

    #[test]
    fn test_border_color_endpoints() {
        // quality 0.01 rounds each channel to the cold end
        assert_eq!(project(50, 50, 1).border_color.css(), "#3bc2d6");
        assert_eq!(project(50, 50, 100).border_color, BORDER_WARM);
        // Midpoint quality 0.5
        let mid = project(50, 50, 50).border_color;
        assert_eq!(mid, BORDER_COLD.lerp(BORDER_WARM, 0.5));
    }

    #[test]
    fn test_dominant_margin_is_strict() {
        // Speed emphasis 90 (slider 10) vs features 75: gap of exactly 15
        // does not dominate
        assert_eq!(project(10, 75, 1).dominant, None);
        // Gap of 16 does
        assert_eq!(project(10, 74, 1).dominant, Some(DominantCategory::Speed));
    }

    #[test]
    fn test_dominant_features() {
        // features 95 vs speed 50 (slider 50) and reliability 40
        assert_eq!(project(50, 95, 40).dominant, Some(DominantCategory::Features));
    }

    #[test]
    fn test_no_dominance_when_balanced() {
        assert_eq!(project(50, 50, 50).dominant, None);
        assert_eq!(project(40, 55, 60).dominant, None);
    }

    #[test]
    fn test_rgb_css() {
        assert_eq!(Rgb::new(0x39, 0xc2, 0xd7).css(), "#39c2d7");
        assert_eq!(Rgb::new(0, 0, 0).css(), "#000000");
    }

    proptest! {
        #[test]
        fn prop_outputs_stay_in_declared_ranges(
            vs in 1u8..=100,
            sf in 1u8..=100,
            cr in 1u8..=100,
        ) {
            let p = project(vs, sf, cr);
            prop_assert!((2..=6).contains(&p.border_width));
            prop_assert!((0.3..=0.7 + EPS).contains(&p.background_opacity));
            prop_assert!((5..=20).contains(&p.shadow_blur));
            prop_assert!((0.2..=0.6 + EPS).contains(&p.shadow_opacity));
        }

        #[test]
        fn prop_projection_is_pure(
            vs in 1u8..=100,
            sf in 1u8..=100,
            cr in 1u8..=100,
        ) {
            prop_assert_eq!(project(vs, sf, cr), project(vs, sf, cr));
        }

        #[test]
        fn prop_dominant_clears_margin_over_both_rivals(
            vs in 1u8..=100,
            sf in 1u8..=100,
            cr in 1u8..=100,
        ) {
            let p = project(vs, sf, cr);
            if let Some(dominant) = p.dominant {
                let emphasis = |cat| match cat {
                    DominantCategory::Speed => 100 - vs as i16,
                    DominantCategory::Features => sf as i16,
                    DominantCategory::Reliability => cr as i16,
                };
                for rival in DominantCategory::ALL {
                    if rival != dominant {
                        prop_assert!(emphasis(dominant) > emphasis(rival) + 15);
                    }
                }
            }
        }
    }
}
