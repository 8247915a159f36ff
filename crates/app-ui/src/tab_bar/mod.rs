//! Floating animated tab bar
//!
//! A drop-in tab bar renderer for the navigation framework. It is driven
//! entirely by host callbacks on one execution context:
//!
//! - [`TabBar::on_layout`] when the container is measured or resized
//! - [`TabBar::on_navigation_state`] on every focus notification
//! - [`TabBar::tick`] once per animation frame
//! - [`TabBar::press`] when a destination slot is pressed
//!
//! and returns a [`TabBarView`] from [`TabBar::render`].
//!
//! # Example
//!
//! ```rust
//! use app_ui::navigation::{default_descriptors, initial_state};
//! use app_ui::tab_bar::{TabBar, TabBarConfig};
//! use std::time::Duration;
//!
//! let state = initial_state();
//! let mut bar = TabBar::mount(&state, TabBarConfig::default(), 390.0);
//! bar.on_layout(360.0);
//! bar.tick(Duration::from_millis(16));
//!
//! let view = bar.render(&default_descriptors(&state));
//! assert_eq!(view.items.len(), 4);
//! assert_eq!(view.indicator.left, bar.geometry().target_left(0));
//! ```

pub mod config;
pub mod focus;
pub mod geometry;
pub mod icon_motion;
pub mod indicator;
pub mod spring;
pub mod view;

pub use config::{ConfigError, TabBarConfig};
pub use focus::{FocusChange, FocusTracker, Motion};
pub use geometry::BarGeometry;
pub use icon_motion::{IconMotion, IconState};
pub use indicator::AnimatedIndicator;
pub use spring::{Spring, SpringConfig};
pub use view::{IndicatorView, TabBarView, TabItemView};

use crate::navigation::{resolve_label, Descriptors};
use crate::theme::TabBarColors;
use crate::tokens::{self, Shadow};
use app_state::navigation::{Destination, NavigationState, Navigator};
use std::time::Duration;

/// Result of pressing a destination slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressOutcome {
    /// The slot was already focused; nothing happened
    AlreadyFocused,
    /// A tab press listener vetoed navigation
    Prevented,
    /// Navigation was requested
    Navigated,
    /// No slot at that index
    OutOfRange,
    /// The navigator rejected the request
    Failed,
}

/// Mounted tab bar instance
///
/// Owns its geometry and animation state from mount to drop.
#[derive(Debug, Clone)]
pub struct TabBar {
    config: TabBarConfig,
    colors: TabBarColors,
    fallback_width: f32,
    routes: Vec<Destination>,
    focus: FocusTracker,
    indicator: AnimatedIndicator,
    icons: Vec<IconMotion>,
}

impl TabBar {
    /// Mount against the framework's current state
    ///
    /// The indicator and the focused icon start at their targets; nothing
    /// slides in on the first frame.
    pub fn mount(state: &NavigationState, config: TabBarConfig, screen_width: f32) -> Self {
        let fallback_width = config.fallback_width(screen_width);
        let focused = state.focused_index();
        let fallback = BarGeometry::compute(None, fallback_width, state.destination_count(), &config);
        let icons = Self::build_icons(state.destination_count(), focused, &config);

        tracing::debug!(
            destinations = state.destination_count(),
            focused,
            fallback_width,
            "Tab bar mounted"
        );

        Self {
            colors: config.colors(),
            indicator: AnimatedIndicator::new(fallback.target_left(focused), fallback.circle_width),
            focus: FocusTracker::new(focused, fallback),
            routes: state.routes().to_vec(),
            fallback_width,
            icons,
            config,
        }
    }

    fn build_icons(count: usize, focused: usize, config: &TabBarConfig) -> Vec<IconMotion> {
        (0..count)
            .map(|index| IconMotion::new(index == focused, config))
            .collect()
    }

    /// Layout callback: the container was measured at `width`
    pub fn on_layout(&mut self, width: f32) {
        if !geometry::is_usable_width(width) {
            tracing::warn!(width, "Ignoring unusable tab bar width");
            return;
        }
        if self.focus.measured().map(|g| g.total_width) == Some(width) {
            return;
        }

        let geometry = BarGeometry::compute(
            Some(width),
            self.fallback_width,
            self.routes.len(),
            &self.config,
        );
        let motion = self.focus.record_layout(geometry);
        tracing::debug!(
            width,
            slot_width = geometry.slot_width,
            circle_width = geometry.circle_width,
            ?motion,
            "Tab bar geometry recomputed"
        );
        self.retarget_indicator(motion);
    }

    /// Focus notification from the navigation framework
    pub fn on_navigation_state(&mut self, state: &NavigationState) {
        if state.routes() != self.routes.as_slice() {
            self.replace_routes(state);
            return;
        }

        let Some(change) = self.focus.observe(state.focused_index()) else {
            return;
        };
        let motion = self.focus.motion();
        tracing::debug!(
            from = change.previous,
            to = change.current,
            ?motion,
            "Tab focus changed"
        );

        for (index, icon) in self.icons.iter_mut().enumerate() {
            icon.set_focused(index == change.current, motion, &self.config);
        }
        self.retarget_indicator(motion);
    }

    fn replace_routes(&mut self, state: &NavigationState) {
        let count = state.destination_count();
        let focused = state.focused_index();
        tracing::debug!(destinations = count, focused, "Tab bar destinations changed");

        self.routes = state.routes().to_vec();
        self.focus.set_fallback(BarGeometry::compute(
            None,
            self.fallback_width,
            count,
            &self.config,
        ));
        if let Some(measured) = self.focus.measured() {
            let geometry = BarGeometry::compute(
                Some(measured.total_width),
                self.fallback_width,
                count,
                &self.config,
            );
            self.focus.record_layout(geometry);
        }
        self.focus.reset_focus(focused);
        self.icons = Self::build_icons(count, focused, &self.config);
        let motion = self.focus.motion();
        self.retarget_indicator(motion);
    }

    fn retarget_indicator(&mut self, motion: Motion) {
        let geometry = self.focus.geometry();
        self.indicator.retarget(
            geometry.target_left(self.focus.focused()),
            geometry.circle_width,
            motion,
        );
    }

    /// Frame clock callback
    pub fn tick(&mut self, dt: Duration) {
        let dt = dt.as_secs_f32();
        self.indicator.tick(dt, &self.config.spring);
        for icon in &mut self.icons {
            icon.tick(dt, &self.config.spring);
        }
    }

    /// Whether another frame is needed
    pub fn is_animating(&self) -> bool {
        let spring = &self.config.spring;
        self.indicator.is_animating(spring) || self.icons.iter().any(|icon| icon.is_animating(spring))
    }

    /// A destination slot was pressed
    ///
    /// Pressing the focused destination does nothing. Any other press emits a
    /// cancelable tab press and navigates unless a listener prevented it.
    /// Focus itself only moves once the framework reports the new state.
    pub fn press<N>(&self, index: usize, navigator: &N) -> PressOutcome
    where
        N: Navigator + ?Sized,
    {
        let Some(route) = self.routes.get(index) else {
            tracing::warn!(index, "Press outside tab bar destinations");
            return PressOutcome::OutOfRange;
        };
        if index == self.focus.focused() {
            return PressOutcome::AlreadyFocused;
        }

        let event = navigator.emit_tab_press(&route.key);
        if event.is_default_prevented() {
            tracing::debug!(key = %route.key, "Tab press prevented");
            return PressOutcome::Prevented;
        }

        match navigator.navigate(&route.key) {
            Ok(()) => {
                tracing::debug!(key = %route.key, "Navigating to tab");
                PressOutcome::Navigated
            }
            Err(err) => {
                tracing::warn!(key = %route.key, error = %err, "Tab navigation failed");
                PressOutcome::Failed
            }
        }
    }

    /// Produce the current frame
    pub fn render(&self, descriptors: &Descriptors) -> TabBarView {
        let geometry = self.focus.geometry();
        let count = self.routes.len();
        let hit_height = self.config.bar_height.max(tokens::HIT_TARGET_MIN);

        let items = self
            .routes
            .iter()
            .zip(&self.icons)
            .enumerate()
            .map(|(index, (route, icon))| {
                let focused = index == self.focus.focused();
                let label = resolve_label(descriptors, route);
                TabItemView {
                    key: route.key.clone(),
                    accessibility_label: format!("{}, tab, {} of {}", label, index + 1, count),
                    label,
                    icon: route.icon.glyph().to_string(),
                    tint: self.colors.tint(focused).to_string(),
                    scale: icon.scale(),
                    lift_y: icon.lift_y(),
                    label_visible: icon.label_visible(),
                    focused,
                    width: geometry.slot_width,
                    hit_height,
                }
            })
            .collect();

        TabBarView {
            width: geometry.total_width,
            height: self.config.bar_height,
            bottom_offset: tokens::tab_bar::BOTTOM_OFFSET,
            corner_radius: tokens::radius::XXL,
            horizontal_padding: geometry.horizontal_padding,
            icon_size: self.config.icon_size,
            background: self.colors.background.clone(),
            shadow: Shadow::floating(),
            indicator: IndicatorView {
                left: self.indicator.current_left(),
                width: self.indicator.width(),
                color: self.colors.indicator.clone(),
            },
            items,
        }
    }

    /// Geometry targets are computed from
    pub fn geometry(&self) -> BarGeometry {
        self.focus.geometry()
    }

    /// Focused index as last reported by the framework
    pub fn focused_index(&self) -> usize {
        self.focus.focused()
    }

    /// The indicator
    pub fn indicator(&self) -> &AnimatedIndicator {
        &self.indicator
    }

    /// Icon motion of one destination
    pub fn icon(&self, index: usize) -> Option<&IconMotion> {
        self.icons.get(index)
    }

    /// Active configuration
    pub fn config(&self) -> &TabBarConfig {
        &self.config
    }
}
