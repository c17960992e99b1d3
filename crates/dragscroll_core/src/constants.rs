//! Centralized constants for dragscroll_core
//!
//! Tuning values for the drag-scroll step live here so hosts and config
//! defaults agree on them.

// =============================================================================
// Scroll Step Tuning
// =============================================================================

/// Radius around the anchor (in pixels) where pointer displacement produces no scroll
pub const DEADZONE_RADIUS: f32 = 5.0;

/// Divisor applied to displacement beyond the deadzone to get the per-frame step
pub const SPEED_DIVISOR: f32 = 2.0;

/// Smallest speed divisor accepted from configuration
pub const MIN_SPEED_DIVISOR: f32 = 0.1;

// =============================================================================
// Indicator
// =============================================================================

/// Diameter of the cursor dot shown at the anchor point
pub const INDICATOR_SIZE: f32 = 24.0;

/// Returns the top-left corner for an indicator centered on `(x, y)`.
pub fn indicator_origin(x: f32, y: f32) -> (f32, f32) {
    let half = INDICATOR_SIZE / 2.0;
    (x - half, y - half)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indicator_origin_centers_dot() {
        let (x, y) = indicator_origin(100.0, 50.0);
        assert!((x - 88.0).abs() < 0.001);
        assert!((y - 38.0).abs() < 0.001);
    }

    #[test]
    fn test_constants_are_positive() {
        assert!(DEADZONE_RADIUS >= 0.0);
        assert!(SPEED_DIVISOR > 0.0);
        assert!(SPEED_DIVISOR >= MIN_SPEED_DIVISOR);
        assert!(INDICATOR_SIZE > 0.0);
    }
}
