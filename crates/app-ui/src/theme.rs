//! Brand colours and tab bar palettes for Wine Trails
//!
//! The brand is built around a deep wine plum (`#720969`). Two themes are
//! supported and both keep the brand colour as the focused tint:
//!
//! - Light: white floating bar on light content
//! - Dark: near-black floating bar
//!
//! # Usage
//!
//! ```rust
//! use app_ui::theme::{ThemeName, TabBarColors};
//!
//! let colors = TabBarColors::for_theme(ThemeName::Light);
//! assert_eq!(colors.tint(true), "#720969");
//! ```

use serde::{Deserialize, Serialize};

// =============================================================================
// Color Types
// =============================================================================

/// A color represented as an RGBA hex string (e.g., "#FFFFFF" or "#FFFFFF80")
pub type Color = String;

/// Parse a hex color string to RGB components
pub fn parse_hex_color(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.trim_start_matches('#');
    if hex.len() != 6 && hex.len() != 8 {
        return None;
    }
    let r = u8::from_str_radix(hex.get(0..2)?, 16).ok()?;
    let g = u8::from_str_radix(hex.get(2..4)?, 16).ok()?;
    let b = u8::from_str_radix(hex.get(4..6)?, 16).ok()?;
    Some((r, g, b))
}

// =============================================================================
// Brand Colors
// =============================================================================

/// Wine Trails brand colors
pub mod brand {
    /// Primary brand color (wine plum); focused tint and header background
    pub const PRIMARY: &str = "#720969";

    /// Soft plum used for the focused indicator on light backgrounds
    pub const PRIMARY_SOFT: &str = "#F3E3F1";

    /// Deep plum used for the focused indicator on dark backgrounds
    pub const PRIMARY_DEEP: &str = "#3B0436";

    /// Unfocused tint
    pub const INACTIVE: &str = "#AAAAAA";

    /// Pure white
    pub const WHITE: &str = "#FFFFFF";

    /// Near-black surface
    pub const SURFACE_DARK: &str = "#161616";
}

// =============================================================================
// Theme Names
// =============================================================================

/// Theme name enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    /// Light theme
    #[default]
    Light,
    /// Dark theme
    Dark,
}

// =============================================================================
// Tab Bar Palette
// =============================================================================

/// Colors used by the floating tab bar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TabBarColors {
    /// Bar background
    pub background: Color,
    /// Indicator circle fill
    pub indicator: Color,
    /// Icon and label tint of the focused destination
    pub active_tint: Color,
    /// Icon and label tint of every other destination
    pub inactive_tint: Color,
}

impl TabBarColors {
    /// Palette for a theme
    pub fn for_theme(name: ThemeName) -> Self {
        match name {
            ThemeName::Light => Self {
                background: brand::WHITE.to_string(),
                indicator: brand::PRIMARY_SOFT.to_string(),
                active_tint: brand::PRIMARY.to_string(),
                inactive_tint: brand::INACTIVE.to_string(),
            },
            ThemeName::Dark => Self {
                background: brand::SURFACE_DARK.to_string(),
                indicator: brand::PRIMARY_DEEP.to_string(),
                active_tint: brand::PRIMARY.to_string(),
                inactive_tint: brand::INACTIVE.to_string(),
            },
        }
    }

    /// Tint for a focus state
    pub fn tint(&self, focused: bool) -> &str {
        if focused {
            &self.active_tint
        } else {
            &self.inactive_tint
        }
    }
}

impl Default for TabBarColors {
    fn default() -> Self {
        Self::for_theme(ThemeName::default())
    }
}
