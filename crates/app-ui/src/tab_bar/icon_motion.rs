//! Per-destination icon scale and lift
//!
//! Each destination runs a two-state machine. `Resting -> Focused` when it
//! gains focus and `Focused -> Resting` when it loses it; both transitions
//! spring `(scale, lift_y)` toward the new state's targets. The icon that is
//! focused at mount starts in `Focused` with its values pre-set.

use super::config::TabBarConfig;
use super::focus::Motion;
use super::spring::{Spring, SpringConfig};
use crate::tokens::motion;

/// Focus state of one icon
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconState {
    /// Not focused: rest size, label shown
    Resting,
    /// Focused: raised and enlarged, label hidden
    Focused,
}

impl IconState {
    fn targets(self, config: &TabBarConfig) -> (f32, f32) {
        match self {
            IconState::Resting => (motion::RESTING_SCALE, motion::RESTING_LIFT),
            IconState::Focused => (config.focused_scale, config.focused_lift),
        }
    }
}

/// Animated scale and vertical offset of one icon
#[derive(Debug, Clone, PartialEq)]
pub struct IconMotion {
    state: IconState,
    scale: Spring,
    lift: Spring,
}

impl IconMotion {
    /// Icon pre-set to its mount state
    pub fn new(focused: bool, config: &TabBarConfig) -> Self {
        let state = if focused {
            IconState::Focused
        } else {
            IconState::Resting
        };
        let (scale, lift) = state.targets(config);
        Self {
            state,
            scale: Spring::new(scale),
            lift: Spring::new(lift),
        }
    }

    /// Move to the focused or resting state; returns whether state changed
    pub fn set_focused(&mut self, focused: bool, motion: Motion, config: &TabBarConfig) -> bool {
        let next = if focused {
            IconState::Focused
        } else {
            IconState::Resting
        };
        if next == self.state {
            return false;
        }

        self.state = next;
        let (scale, lift) = next.targets(config);
        match motion {
            Motion::Snap => {
                self.scale.snap_to(scale);
                self.lift.snap_to(lift);
            }
            Motion::Animate => {
                self.scale.set_target(scale);
                self.lift.set_target(lift);
            }
        }
        true
    }

    /// Advance by `dt` seconds
    pub fn tick(&mut self, dt: f32, config: &SpringConfig) {
        self.scale.step(dt, config);
        self.lift.step(dt, config);
    }

    /// Current state
    pub fn state(&self) -> IconState {
        self.state
    }

    /// Rendered scale
    pub fn scale(&self) -> f32 {
        self.scale.value()
    }

    /// Rendered vertical offset
    pub fn lift_y(&self) -> f32 {
        self.lift.value()
    }

    /// Labels hide while focused
    pub fn label_visible(&self) -> bool {
        self.state == IconState::Resting
    }

    /// Whether another frame is needed
    pub fn is_animating(&self, config: &SpringConfig) -> bool {
        !self.scale.is_at_rest(config) || !self.lift.is_at_rest(config)
    }
}
