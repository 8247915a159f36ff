//! Tab bar configuration

use super::spring::SpringConfig;
use crate::theme::{parse_hex_color, Color, TabBarColors, ThemeName};
use crate::tokens::{motion, tab_bar};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// A numeric field is outside its allowed range
    #[error("Invalid value for {field}: {value}")]
    InvalidValue {
        /// Field name
        field: &'static str,
        /// Rejected value
        value: f32,
    },

    /// A colour is not a hex string
    #[error("Invalid color for {field}: {value}")]
    InvalidColor {
        /// Field name
        field: &'static str,
        /// Rejected value
        value: String,
    },
}

/// Result type for configuration checks
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Tunable layout, motion and colour settings of the tab bar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TabBarConfig {
    /// Inset before the first and after the last slot
    pub horizontal_padding: f32,
    /// Gap between a slot edge and the indicator
    pub circle_margin: f32,
    /// Smallest indicator diameter
    pub min_circle: f32,
    /// Widest fallback bar before the first layout pass
    pub fallback_cap: f32,
    /// Share of the screen width used before the first layout pass
    pub fallback_ratio: f32,
    /// Bar height
    pub bar_height: f32,
    /// Icon size
    pub icon_size: f32,
    /// Icon scale while focused
    pub focused_scale: f32,
    /// Icon vertical offset while focused
    pub focused_lift: f32,
    /// Spring driving the indicator and icons
    pub spring: SpringConfig,
    /// Palette theme
    pub theme: ThemeName,
    /// Overrides the theme's focused tint
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_tint: Option<Color>,
    /// Overrides the theme's unfocused tint
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inactive_tint: Option<Color>,
}

impl Default for TabBarConfig {
    fn default() -> Self {
        Self {
            horizontal_padding: tab_bar::HORIZONTAL_PADDING,
            circle_margin: tab_bar::CIRCLE_MARGIN,
            min_circle: tab_bar::MIN_CIRCLE,
            fallback_cap: tab_bar::FALLBACK_CAP,
            fallback_ratio: tab_bar::FALLBACK_RATIO,
            bar_height: tab_bar::HEIGHT,
            icon_size: tab_bar::ICON_SIZE,
            focused_scale: motion::FOCUSED_SCALE,
            focused_lift: motion::FOCUSED_LIFT,
            spring: SpringConfig::default(),
            theme: ThemeName::default(),
            active_tint: None,
            inactive_tint: None,
        }
    }
}

fn require(field: &'static str, value: f32, valid: bool) -> Result<()> {
    if value.is_finite() && valid {
        Ok(())
    } else {
        Err(ConfigError::InvalidValue { field, value })
    }
}

fn require_color(field: &'static str, value: &Option<Color>) -> Result<()> {
    match value {
        Some(color) if parse_hex_color(color).is_none() => Err(ConfigError::InvalidColor {
            field,
            value: color.clone(),
        }),
        _ => Ok(()),
    }
}

impl TabBarConfig {
    /// Check every field
    pub fn validate(&self) -> Result<()> {
        require("horizontalPadding", self.horizontal_padding, self.horizontal_padding >= 0.0)?;
        require("circleMargin", self.circle_margin, self.circle_margin >= 0.0)?;
        require("minCircle", self.min_circle, self.min_circle > 0.0)?;
        require("fallbackCap", self.fallback_cap, self.fallback_cap > 0.0)?;
        require(
            "fallbackRatio",
            self.fallback_ratio,
            self.fallback_ratio > 0.0 && self.fallback_ratio <= 1.0,
        )?;
        require("barHeight", self.bar_height, self.bar_height > 0.0)?;
        require("iconSize", self.icon_size, self.icon_size > 0.0)?;
        require("focusedScale", self.focused_scale, self.focused_scale > 0.0)?;
        require("focusedLift", self.focused_lift, true)?;
        require("spring.stiffness", self.spring.stiffness, self.spring.stiffness > 0.0)?;
        require(
            "spring.dampingRatio",
            self.spring.damping_ratio,
            self.spring.damping_ratio >= 1.0,
        )?;
        require("spring.mass", self.spring.mass, self.spring.mass > 0.0)?;
        require(
            "spring.restDisplacement",
            self.spring.rest_displacement,
            self.spring.rest_displacement > 0.0,
        )?;
        require("spring.restSpeed", self.spring.rest_speed, self.spring.rest_speed > 0.0)?;
        require_color("activeTint", &self.active_tint)?;
        require_color("inactiveTint", &self.inactive_tint)?;
        Ok(())
    }

    /// Bar width used until the host reports a layout:
    /// `min(fallback_cap, fallback_ratio * screen_width)`
    pub fn fallback_width(&self, screen_width: f32) -> f32 {
        if screen_width.is_finite() && screen_width > 0.0 {
            (screen_width * self.fallback_ratio).min(self.fallback_cap)
        } else {
            self.fallback_cap
        }
    }

    /// Theme palette with tint overrides applied
    pub fn colors(&self) -> TabBarColors {
        let mut colors = TabBarColors::for_theme(self.theme);
        if let Some(tint) = &self.active_tint {
            colors.active_tint = tint.clone();
        }
        if let Some(tint) = &self.inactive_tint {
            colors.inactive_tint = tint.clone();
        }
        colors
    }
}
