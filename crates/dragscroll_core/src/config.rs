//! Tuning configuration for the drag-scroll controller.

use serde::{Deserialize, Serialize};

use crate::constants::{DEADZONE_RADIUS, MIN_SPEED_DIVISOR, SPEED_DIVISOR};

/// Configuration for how pointer displacement turns into scroll steps.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DragScrollConfig {
    /// Radius around the anchor with no scrolling
    #[serde(default = "default_deadzone_radius")]
    pub deadzone_radius: f32,
    /// Displacement beyond the deadzone is divided by this to get the step
    #[serde(default = "default_speed_divisor")]
    pub speed_divisor: f32,
}

fn default_deadzone_radius() -> f32 {
    DEADZONE_RADIUS
}

fn default_speed_divisor() -> f32 {
    SPEED_DIVISOR
}

impl Default for DragScrollConfig {
    fn default() -> Self {
        Self {
            deadzone_radius: DEADZONE_RADIUS,
            speed_divisor: SPEED_DIVISOR,
        }
    }
}

impl DragScrollConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the deadzone radius.
    pub fn deadzone_radius(mut self, radius: f32) -> Self {
        self.deadzone_radius = radius;
        self
    }

    /// Set the speed divisor.
    pub fn speed_divisor(mut self, divisor: f32) -> Self {
        self.speed_divisor = divisor;
        self
    }

    /// Replace out-of-range values with the defaults.
    ///
    /// The deadzone must be finite and non-negative, the divisor finite and at
    /// least [`MIN_SPEED_DIVISOR`].
    pub fn validated(self) -> Self {
        let deadzone_radius = if self.deadzone_radius.is_finite() && self.deadzone_radius >= 0.0 {
            self.deadzone_radius
        } else {
            log::warn!(
                "Invalid deadzone radius {}, using {}",
                self.deadzone_radius,
                DEADZONE_RADIUS
            );
            DEADZONE_RADIUS
        };
        let speed_divisor =
            if self.speed_divisor.is_finite() && self.speed_divisor >= MIN_SPEED_DIVISOR {
                self.speed_divisor
            } else {
                log::warn!(
                    "Invalid speed divisor {}, using {}",
                    self.speed_divisor,
                    SPEED_DIVISOR
                );
                SPEED_DIVISOR
            };
        Self {
            deadzone_radius,
            speed_divisor,
        }
    }

    /// Per-frame scroll step along one axis for a displacement `diff` from the anchor.
    ///
    /// Zero inside the deadzone; outside it the excess is divided by the speed
    /// divisor and rounded half away from zero.
    pub fn step(&self, diff: f32) -> f32 {
        let dz = self.deadzone_radius;
        if diff > dz {
            ((diff - dz) / self.speed_divisor).round()
        } else if diff < -dz {
            ((diff + dz) / self.speed_divisor).round()
        } else {
            0.0
        }
    }
}
