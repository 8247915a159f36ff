//! Focus tracking and the first-layout latch
//!
//! The tracker remembers which destination is focused and which geometry
//! targets should be computed from. Until the host reports a real width the
//! bar is laid out from the fallback width and every update snaps; the
//! first measurement snaps as well, and from then on all updates animate.

use super::geometry::BarGeometry;

/// How a new target is applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Motion {
    /// Jump to the target with no frames in between
    Snap,
    /// Spring toward the target
    Animate,
}

/// A focus transition between two destinations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusChange {
    /// Previously focused index
    pub previous: usize,
    /// Newly focused index
    pub current: usize,
}

/// Focused destination plus the geometry latch
#[derive(Debug, Clone, PartialEq)]
pub struct FocusTracker {
    focused: usize,
    fallback: BarGeometry,
    measured: Option<BarGeometry>,
}

impl FocusTracker {
    /// Track a freshly mounted bar laid out from its fallback geometry
    pub fn new(focused: usize, fallback: BarGeometry) -> Self {
        Self {
            focused,
            fallback,
            measured: None,
        }
    }

    /// Focused index
    pub fn focused(&self) -> usize {
        self.focused
    }

    /// Geometry targets are computed from
    pub fn geometry(&self) -> BarGeometry {
        self.measured.unwrap_or(self.fallback)
    }

    /// Geometry from the last measured layout, if any
    pub fn measured(&self) -> Option<BarGeometry> {
        self.measured
    }

    /// How focus changes are applied right now
    pub fn motion(&self) -> Motion {
        if self.measured.is_some() {
            Motion::Animate
        } else {
            Motion::Snap
        }
    }

    /// Observe the framework's focused index
    pub fn observe(&mut self, index: usize) -> Option<FocusChange> {
        if index == self.focused {
            return None;
        }
        let change = FocusChange {
            previous: self.focused,
            current: index,
        };
        self.focused = index;
        Some(change)
    }

    /// Record a measured layout; the first one snaps, later ones animate
    pub fn record_layout(&mut self, geometry: BarGeometry) -> Motion {
        let motion = self.motion();
        self.measured = Some(geometry);
        motion
    }

    /// Replace the fallback geometry (destination count changed)
    pub fn set_fallback(&mut self, fallback: BarGeometry) {
        self.fallback = fallback;
    }

    /// Force the focused index without reporting a change
    pub fn reset_focus(&mut self, index: usize) {
        self.focused = index;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tab_bar::config::TabBarConfig;

    fn geometry(width: f32) -> BarGeometry {
        BarGeometry::compute(Some(width), width, 4, &TabBarConfig::default())
    }

    #[test]
    fn test_observe_reports_changes_only() {
        let mut tracker = FocusTracker::new(0, geometry(358.8));
        assert_eq!(tracker.observe(0), None);
        assert_eq!(
            tracker.observe(2),
            Some(FocusChange {
                previous: 0,
                current: 2
            })
        );
        assert_eq!(tracker.focused(), 2);
        assert_eq!(tracker.observe(2), None);
    }

    #[test]
    fn test_latch_snaps_until_first_layout() {
        let mut tracker = FocusTracker::new(1, geometry(358.8));
        assert_eq!(tracker.motion(), Motion::Snap);
        assert_eq!(tracker.measured(), None);

        assert_eq!(tracker.record_layout(geometry(390.0)), Motion::Snap);
        assert_eq!(tracker.motion(), Motion::Animate);

        assert_eq!(tracker.record_layout(geometry(768.0)), Motion::Animate);
        assert_eq!(tracker.geometry().total_width, 768.0);
    }

    #[test]
    fn test_geometry_prefers_measured() {
        let mut tracker = FocusTracker::new(0, geometry(358.8));
        assert_eq!(tracker.geometry().total_width, 358.8);

        tracker.record_layout(geometry(390.0));
        tracker.set_fallback(geometry(200.0));
        assert_eq!(tracker.geometry().total_width, 390.0);
    }
}
