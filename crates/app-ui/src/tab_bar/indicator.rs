//! The moving highlight circle behind the focused destination

use super::focus::Motion;
use super::spring::{Spring, SpringConfig};

/// Indicator whose left edge springs toward its target
///
/// Only the position animates; the width follows the geometry directly.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimatedIndicator {
    left: Spring,
    width: f32,
}

impl AnimatedIndicator {
    /// Indicator resting at a position
    pub fn new(left: f32, width: f32) -> Self {
        Self {
            left: Spring::new(left),
            width,
        }
    }

    /// Apply new targets
    pub fn retarget(&mut self, target_left: f32, width: f32, motion: Motion) {
        self.width = width;
        match motion {
            Motion::Snap => self.left.snap_to(target_left),
            Motion::Animate => self.left.set_target(target_left),
        }
    }

    /// Advance by `dt` seconds
    pub fn tick(&mut self, dt: f32, config: &SpringConfig) {
        self.left.step(dt, config);
    }

    /// Rendered left edge
    pub fn current_left(&self) -> f32 {
        self.left.value()
    }

    /// Left edge being approached
    pub fn target_left(&self) -> f32 {
        self.left.target()
    }

    /// Diameter
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Whether another frame is needed
    pub fn is_animating(&self, config: &SpringConfig) -> bool {
        !self.left.is_at_rest(config)
    }
}
