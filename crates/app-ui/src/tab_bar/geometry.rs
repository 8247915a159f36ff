//! Slot and indicator layout of the tab bar

use super::config::TabBarConfig;
use serde::{Deserialize, Serialize};

/// Pixel layout of the bar for a given width and destination count
///
/// Invariants for any `destination_count >= 1` and positive width:
/// - `slot_width > 0`
/// - `slot_width * destination_count + 2 * horizontal_padding == total_width`
/// - `0 < circle_width <= slot_width`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BarGeometry {
    /// Width of the whole bar
    pub total_width: f32,
    /// Width of one destination slot
    pub slot_width: f32,
    /// Diameter of the indicator circle
    pub circle_width: f32,
    /// Inset before the first and after the last slot
    pub horizontal_padding: f32,
}

/// Whether a reported width can be laid out
pub fn is_usable_width(width: f32) -> bool {
    width.is_finite() && width > 0.0
}

impl BarGeometry {
    /// Layout for the measured width, or the fallback width before the
    /// first layout pass
    pub fn compute(
        measured_width: Option<f32>,
        fallback_width: f32,
        destination_count: usize,
        config: &TabBarConfig,
    ) -> Self {
        let total_width = measured_width
            .filter(|width| is_usable_width(*width))
            .unwrap_or(fallback_width);
        let count = destination_count.max(1) as f32;

        // Padding may never eat the whole bar.
        let horizontal_padding = config
            .horizontal_padding
            .max(0.0)
            .min(total_width / 4.0);
        let slot_width = (total_width - 2.0 * horizontal_padding) / count;
        let circle_width = (slot_width - 2.0 * config.circle_margin)
            .max(config.min_circle)
            .min(slot_width);

        Self {
            total_width,
            slot_width,
            circle_width,
            horizontal_padding,
        }
    }

    /// Left edge of a destination's slot
    pub fn slot_left(&self, index: usize) -> f32 {
        self.horizontal_padding + index as f32 * self.slot_width
    }

    /// Left edge of the indicator when `index` is focused
    pub fn target_left(&self, index: usize) -> f32 {
        self.slot_left(index) + (self.slot_width - self.circle_width) / 2.0
    }
}
