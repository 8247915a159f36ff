//! Design tokens for Wine Trails
//!
//! This module provides the design tokens the navigation shell is built
//! from: spacing, icon sizes, radii, the floating bar's shadow, and the
//! geometry and motion constants of the animated tab bar.

use serde::{Deserialize, Serialize};

// =============================================================================
// Spacing Tokens
// =============================================================================

/// Spacing scale in pixels
/// Based on a 4px base unit with t-shirt sizes
pub mod spacing {
    /// 8px - Small
    pub const SPACE_SM: f32 = 8.0;
    /// 12px - Medium
    pub const SPACE_MD: f32 = 12.0;
    /// 24px - 2x large
    pub const SPACE_2XL: f32 = 24.0;
}

// =============================================================================
// Sizing Tokens
// =============================================================================

/// Icon sizes
pub mod icon_size {
    /// Large icon (24px)
    pub const LG: f32 = 24.0;
}

/// Border radius tokens
pub mod radius {
    /// 2x large radius (24px)
    pub const XXL: f32 = 24.0;
}

/// Minimum touch target (44px - iOS guideline)
pub const HIT_TARGET_MIN: f32 = 44.0;

// =============================================================================
// Shadow Tokens
// =============================================================================

/// Shadow definitions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shadow {
    /// Horizontal offset
    pub offset_x: f32,
    /// Vertical offset
    pub offset_y: f32,
    /// Blur radius
    pub blur: f32,
    /// Shadow color (with alpha)
    pub color: String,
}

impl Shadow {
    /// Create a new shadow
    pub fn new(offset_x: f32, offset_y: f32, blur: f32, color: &str) -> Self {
        Self {
            offset_x,
            offset_y,
            blur,
            color: color.to_string(),
        }
    }

    /// Shadow under the floating tab bar
    pub fn floating() -> Self {
        Shadow::new(0.0, 10.0, 15.0, "rgba(0, 0, 0, 0.1)")
    }
}

// =============================================================================
// Tab Bar Tokens
// =============================================================================

/// Layout constants of the floating tab bar
pub mod tab_bar {
    use super::{icon_size, spacing};

    /// Inset between the bar edge and the first/last slot
    pub const HORIZONTAL_PADDING: f32 = spacing::SPACE_MD;
    /// Gap between a slot edge and the indicator circle
    pub const CIRCLE_MARGIN: f32 = spacing::SPACE_SM;
    /// Smallest indicator circle
    pub const MIN_CIRCLE: f32 = 36.0;
    /// Widest bar used before the first layout pass
    pub const FALLBACK_CAP: f32 = 420.0;
    /// Share of the screen width used before the first layout pass
    pub const FALLBACK_RATIO: f32 = 0.92;
    /// Bar height
    pub const HEIGHT: f32 = 64.0;
    /// Icon size inside a slot
    pub const ICON_SIZE: f32 = icon_size::LG;
    /// Distance of the floating bar from the bottom edge
    pub const BOTTOM_OFFSET: f32 = spacing::SPACE_2XL;
}

/// Motion constants of the tab bar
pub mod motion {
    /// Icon scale while focused
    pub const FOCUSED_SCALE: f32 = 1.2;
    /// Icon vertical offset while focused (negative lifts)
    pub const FOCUSED_LIFT: f32 = -6.0;
    /// Icon scale while resting
    pub const RESTING_SCALE: f32 = 1.0;
    /// Icon vertical offset while resting
    pub const RESTING_LIFT: f32 = 0.0;
    /// Spring stiffness
    pub const STIFFNESS: f32 = 200.0;
    /// Spring mass
    pub const MASS: f32 = 1.0;
    /// Critical damping
    pub const DAMPING_RATIO: f32 = 1.0;
    /// Distance from target treated as settled
    pub const REST_DISPLACEMENT: f32 = 0.01;
    /// Speed treated as settled
    pub const REST_SPEED: f32 = 0.01;
    /// Largest integration step in seconds
    pub const MAX_STEP: f32 = 1.0 / 240.0;
    /// Frames longer than this are clamped (seconds)
    pub const MAX_FRAME: f32 = 0.064;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spacing_scale() {
        assert!(spacing::SPACE_SM < spacing::SPACE_MD);
        assert!(spacing::SPACE_MD < spacing::SPACE_2XL);
    }

    #[test]
    fn test_tab_bar_tokens() {
        assert!(tab_bar::MIN_CIRCLE >= tab_bar::ICON_SIZE);
        assert!(tab_bar::HEIGHT >= HIT_TARGET_MIN);
        assert!(tab_bar::FALLBACK_RATIO > 0.0 && tab_bar::FALLBACK_RATIO <= 1.0);
    }

    #[test]
    fn test_motion_tokens() {
        assert!(motion::FOCUSED_SCALE > motion::RESTING_SCALE);
        assert!(motion::FOCUSED_LIFT < motion::RESTING_LIFT);
        assert!(motion::MAX_STEP < motion::MAX_FRAME);
    }

    #[test]
    fn test_shadow_serialization() {
        let shadow = Shadow::floating();
        let json = serde_json::to_string(&shadow).unwrap();
        let deserialized: Shadow = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, shadow);
    }
}
