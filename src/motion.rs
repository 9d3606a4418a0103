//! Timing and geometry math behind the widget animations
//!
//! Pure functions only; the wasm `anim`/`dom` layers feed these from
//! requestAnimationFrame timestamps and bounding rects.

/// Quadratic ease-in-out over normalized time
pub fn ease_in_out(t: f32) -> f32 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        let u = -2.0 * t + 2.0;
        1.0 - u * u / 2.0
    }
}

/// Position of an orbiting data point along its looped path, as a
/// fraction of the path length. `None` until the point's stagger delay
/// has elapsed; after that the point loops forever.
pub fn orbit_fraction(elapsed_ms: f64, delay_ms: f64, period_ms: f64) -> Option<f64> {
    let active = elapsed_ms - delay_ms;
    (active >= 0.0 && period_ms > 0.0).then(|| (active % period_ms) / period_ms)
}

/// How far a section has scrolled through the viewport: 0 as its top
/// enters at the bottom edge, 1 as its bottom leaves at the top.
pub fn scroll_progress(top: f64, height: f64, viewport_h: f64) -> f64 {
    if viewport_h + height <= 0.0 {
        return 0.0;
    }
    ((viewport_h - top) / (viewport_h + height)).clamp(0.0, 1.0)
}

/// Parallax offset for a background layer. Deeper layers (higher index)
/// move further with the cursor; fractions are cursor position over the
/// viewport in 0..=1.
pub fn parallax_shift(layer_index: usize, x_frac: f64, y_frac: f64) -> (f64, f64) {
    let depth = (layer_index + 1) as f64 * 10.0;
    (x_frac * depth, y_frac * depth)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ease_endpoints_and_midpoint() {
        assert_eq!(ease_in_out(0.0), 0.0);
        assert_eq!(ease_in_out(1.0), 1.0);
        assert_eq!(ease_in_out(0.5), 0.5);
        // Accelerating in the first half
        assert!(ease_in_out(0.25) < 0.25);
        assert!(ease_in_out(0.75) > 0.75);
    }

    #[test]
    fn test_orbit_waits_out_its_delay() {
        assert_eq!(orbit_fraction(1000.0, 1500.0, 8000.0), None);
        assert_eq!(orbit_fraction(1500.0, 1500.0, 8000.0), Some(0.0));
        assert_eq!(orbit_fraction(5500.0, 1500.0, 8000.0), Some(0.5));
    }

    #[test]
    fn test_orbit_loops() {
        // One full period after starting puts the point back at 0
        assert_eq!(orbit_fraction(9500.0, 1500.0, 8000.0), Some(0.0));
        assert_eq!(orbit_fraction(13500.0, 1500.0, 8000.0), Some(0.5));
    }

    #[test]
    fn test_scroll_progress_bounds() {
        // Section top at the bottom edge of an 800px viewport
        assert_eq!(scroll_progress(800.0, 400.0, 800.0), 0.0);
        // Section bottom just leaving the top edge
        assert_eq!(scroll_progress(-400.0, 400.0, 800.0), 1.0);
        // Past either edge stays clamped
        assert_eq!(scroll_progress(2000.0, 400.0, 800.0), 0.0);
        assert_eq!(scroll_progress(-2000.0, 400.0, 800.0), 1.0);
    }

    #[test]
    fn test_parallax_depth_scales_with_layer() {
        assert_eq!(parallax_shift(0, 0.5, 1.0), (5.0, 10.0));
        assert_eq!(parallax_shift(2, 0.5, 1.0), (15.0, 30.0));
        assert_eq!(parallax_shift(0, 0.0, 0.0), (0.0, 0.0));
    }
}
