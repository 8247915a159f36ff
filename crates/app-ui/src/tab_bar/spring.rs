//! Damped spring used by every animated value of the tab bar
//!
//! Values are integrated with a fixed-step semi-implicit Euler update
//! driven by the host's frame clock. Retargeting keeps the current
//! velocity, so a new target supersedes the old one mid-flight.

use crate::tokens::motion;
use serde::{Deserialize, Serialize};

/// Physical constants of a spring
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SpringConfig {
    /// Spring stiffness (k)
    pub stiffness: f32,
    /// Damping ratio (1.0 is critical; below 1.0 overshoots)
    pub damping_ratio: f32,
    /// Mass (m)
    pub mass: f32,
    /// Distance from target treated as settled
    pub rest_displacement: f32,
    /// Speed treated as settled
    pub rest_speed: f32,
}

impl SpringConfig {
    /// Spring that never overshoots
    pub fn critically_damped(stiffness: f32, mass: f32) -> Self {
        Self {
            stiffness,
            damping_ratio: motion::DAMPING_RATIO,
            mass,
            rest_displacement: motion::REST_DISPLACEMENT,
            rest_speed: motion::REST_SPEED,
        }
    }

    /// Damping coefficient `c = 2·ζ·sqrt(k·m)`
    pub fn damping(&self) -> f32 {
        2.0 * self.damping_ratio * (self.stiffness * self.mass).sqrt()
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::critically_damped(motion::STIFFNESS, motion::MASS)
    }
}

/// One animated scalar
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    value: f32,
    velocity: f32,
    target: f32,
}

impl Spring {
    /// Spring resting at a value
    pub fn new(value: f32) -> Self {
        Self {
            value,
            velocity: 0.0,
            target: value,
        }
    }

    /// Current value
    pub fn value(&self) -> f32 {
        self.value
    }

    /// Value being approached
    pub fn target(&self) -> f32 {
        self.target
    }

    /// Current velocity (units per second)
    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    /// Jump to a value with no motion
    pub fn snap_to(&mut self, value: f32) {
        self.value = value;
        self.target = value;
        self.velocity = 0.0;
    }

    /// Approach a new target from the current value and velocity
    pub fn set_target(&mut self, target: f32) {
        self.target = target;
    }

    /// Whether the value sits at its target
    pub fn is_at_rest(&self, config: &SpringConfig) -> bool {
        (self.value - self.target).abs() < config.rest_displacement
            && self.velocity.abs() < config.rest_speed
    }

    /// Advance by `dt` seconds
    pub fn step(&mut self, dt: f32, config: &SpringConfig) {
        if !dt.is_finite() || (self.value == self.target && self.velocity == 0.0) {
            return;
        }
        if config.stiffness <= 0.0 || config.mass <= 0.0 {
            self.snap_to(self.target);
            return;
        }

        let dt = dt.clamp(0.0, motion::MAX_FRAME);
        let steps = (dt / motion::MAX_STEP).ceil().max(1.0) as u32;
        let h = dt / steps as f32;
        let damping = config.damping();

        for _ in 0..steps {
            let displacement = self.value - self.target;
            let force = -config.stiffness * displacement - damping * self.velocity;
            self.velocity += force / config.mass * h;
            self.value += self.velocity * h;
        }

        if self.is_at_rest(config) {
            self.snap_to(self.target);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: f32 = 1.0 / 60.0;

    fn settle(spring: &mut Spring, config: &SpringConfig) -> usize {
        for frame in 0..1_000 {
            if spring.is_at_rest(config) {
                return frame;
            }
            spring.step(FRAME, config);
        }
        panic!("spring did not settle");
    }

    #[test]
    fn test_default_is_critically_damped() {
        let config = SpringConfig::default();
        assert_eq!(config.damping_ratio, 1.0);
        assert!((config.damping() - 2.0 * 200.0_f32.sqrt()).abs() < 1e-4);
    }

    #[test]
    fn test_stiffness_override_stays_critically_damped() {
        let config: SpringConfig = serde_json::from_str(r#"{"stiffness": 800}"#).unwrap();
        assert_eq!(config.damping_ratio, 1.0);

        let mut spring = Spring::new(0.0);
        spring.set_target(100.0);
        for _ in 0..200 {
            spring.step(FRAME, &config);
            assert!(spring.value() <= 100.0 + config.rest_displacement);
        }
        assert_eq!(spring.value(), 100.0);
    }

    #[test]
    fn test_new_spring_is_at_rest() {
        let spring = Spring::new(12.0);
        assert!(spring.is_at_rest(&SpringConfig::default()));
        assert_eq!(spring.value(), 12.0);
        assert_eq!(spring.target(), 12.0);
    }

    #[test]
    fn test_spring_converges_to_target() {
        let config = SpringConfig::default();
        let mut spring = Spring::new(0.0);
        spring.set_target(100.0);

        spring.step(FRAME, &config);
        assert!(spring.value() > 0.0 && spring.value() < 100.0);

        settle(&mut spring, &config);
        assert_eq!(spring.value(), 100.0);
        assert_eq!(spring.velocity(), 0.0);
    }

    #[test]
    fn test_critically_damped_does_not_overshoot_visibly() {
        let config = SpringConfig::default();
        let mut spring = Spring::new(0.0);
        spring.set_target(100.0);

        for _ in 0..200 {
            spring.step(FRAME, &config);
            assert!(spring.value() <= 100.0 + config.rest_displacement);
        }
    }

    #[test]
    fn test_retarget_mid_flight_keeps_velocity() {
        let config = SpringConfig::default();
        let mut spring = Spring::new(0.0);
        spring.set_target(100.0);
        for _ in 0..5 {
            spring.step(FRAME, &config);
        }
        let velocity = spring.velocity();
        assert!(velocity > 0.0);

        spring.set_target(0.0);
        assert_eq!(spring.velocity(), velocity);

        settle(&mut spring, &config);
        assert_eq!(spring.value(), 0.0);
    }

    #[test]
    fn test_snap_stops_motion() {
        let mut spring = Spring::new(0.0);
        spring.set_target(50.0);
        spring.step(FRAME, &SpringConfig::default());

        spring.snap_to(20.0);
        assert_eq!(spring.value(), 20.0);
        assert_eq!(spring.target(), 20.0);
        assert_eq!(spring.velocity(), 0.0);
    }

    #[test]
    fn test_long_frames_are_clamped() {
        let config = SpringConfig::default();
        let mut spring = Spring::new(0.0);
        spring.set_target(100.0);

        let mut clamped = spring;
        spring.step(10.0, &config);
        clamped.step(motion::MAX_FRAME, &config);
        assert_eq!(spring, clamped);
    }

    #[test]
    fn test_zero_stiffness_snaps() {
        let config = SpringConfig {
            stiffness: 0.0,
            ..SpringConfig::default()
        };
        let mut spring = Spring::new(0.0);
        spring.set_target(40.0);
        spring.step(FRAME, &config);
        assert_eq!(spring.value(), 40.0);
    }

    #[test]
    fn test_spring_config_deserializes_partial() {
        let config: SpringConfig = serde_json::from_str(r#"{"stiffness": 320}"#).unwrap();
        assert_eq!(config.stiffness, 320.0);
        assert_eq!(config.mass, motion::MASS);
    }
}
