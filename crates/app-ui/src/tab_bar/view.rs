//! Serializable render model of the tab bar
//!
//! The tab bar does not draw anything itself. Each frame it produces a
//! [`TabBarView`] that the frontend positions and paints.

use crate::theme::Color;
use crate::tokens::Shadow;
use serde::{Deserialize, Serialize};

/// Indicator circle, positioned absolutely inside the bar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndicatorView {
    /// Left edge relative to the bar
    pub left: f32,
    /// Diameter
    pub width: f32,
    /// Fill colour
    pub color: Color,
}

/// One pressable destination slot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TabItemView {
    /// Destination key
    pub key: String,
    /// Label text
    pub label: String,
    /// Icon glyph name
    pub icon: String,
    /// Icon and label tint
    pub tint: Color,
    /// Icon scale
    pub scale: f32,
    /// Icon vertical offset
    pub lift_y: f32,
    /// Whether the label is drawn
    pub label_visible: bool,
    /// Whether this destination is focused
    pub focused: bool,
    /// Slot width
    pub width: f32,
    /// Pressable height, never below the minimum touch target
    pub hit_height: f32,
    /// Accessibility label
    pub accessibility_label: String,
}

/// Complete frame of the floating tab bar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TabBarView {
    /// Bar width
    pub width: f32,
    /// Bar height
    pub height: f32,
    /// Distance from the bottom edge of the screen
    pub bottom_offset: f32,
    /// Corner radius of the floating bar
    pub corner_radius: f32,
    /// Inset before the first slot
    pub horizontal_padding: f32,
    /// Icon size
    pub icon_size: f32,
    /// Bar background
    pub background: Color,
    /// Floating shadow
    pub shadow: Shadow,
    /// Indicator circle
    pub indicator: IndicatorView,
    /// Destinations in display order
    pub items: Vec<TabItemView>,
}

impl TabBarView {
    /// The focused item
    pub fn focused_item(&self) -> Option<&TabItemView> {
        self.items.iter().find(|item| item.focused)
    }
}
