//! Application shell
//!
//! Wires the navigation store to a mounted tab bar. The host calls
//! [`AppShell::sync`] before drawing so pending focus notifications reach the
//! bar, then forwards layout, frames and presses as they happen.

use crate::config::AppConfig;
use crate::launch::{LaunchPhase, LaunchScreen};
use crate::logging::init_tracing;
use app_state::navigation::{NavigationState, NavigationStore};
use app_ui::navigation::{default_descriptors, initial_state, Descriptors};
use app_ui::tab_bar::{PressOutcome, TabBar, TabBarView};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::watch;

/// Running application: splash, navigation store and tab bar
pub struct AppShell {
    store: Arc<NavigationStore>,
    updates: watch::Receiver<NavigationState>,
    tab_bar: TabBar,
    descriptors: Descriptors,
    launch: LaunchScreen,
}

impl AppShell {
    /// Start the app with the default tab catalog
    pub fn new(config: &AppConfig, started: Instant) -> Self {
        Self::with_state(config, initial_state(), started)
    }

    /// Start the app on a custom navigation state
    ///
    /// Installs the tracing subscriber from `config.log_filter` unless one
    /// is already in place.
    pub fn with_state(config: &AppConfig, state: NavigationState, started: Instant) -> Self {
        let installed = init_tracing(&config.log_filter);
        let store = Arc::new(NavigationStore::new(state));
        let mut updates = store.subscribe();
        let state = updates.borrow_and_update().clone();

        tracing::info!(
            destinations = state.destination_count(),
            screen_width = config.screen_width,
            log_filter = %config.log_filter,
            installed,
            "Starting app shell"
        );

        Self {
            tab_bar: TabBar::mount(&state, config.tab_bar.clone(), config.screen_width),
            descriptors: default_descriptors(&state),
            launch: LaunchScreen::new(started, config.splash_delay()),
            store,
            updates,
        }
    }

    /// Shared navigation store
    pub fn store(&self) -> Arc<NavigationStore> {
        Arc::clone(&self.store)
    }

    /// Mounted tab bar
    pub fn tab_bar(&self) -> &TabBar {
        &self.tab_bar
    }

    /// Splash or tabs at `now`
    pub fn phase(&mut self, now: Instant) -> LaunchPhase {
        self.launch.poll(now)
    }

    /// Deliver a pending focus notification; returns whether one arrived
    pub fn sync(&mut self) -> bool {
        // A closed channel means the store is gone; nothing left to deliver.
        if !self.updates.has_changed().unwrap_or(false) {
            return false;
        }
        let state = self.updates.borrow_and_update().clone();
        if !self.describes(&state) {
            self.descriptors = default_descriptors(&state);
        }
        self.tab_bar.on_navigation_state(&state);
        true
    }

    fn describes(&self, state: &NavigationState) -> bool {
        self.descriptors.len() == state.destination_count()
            && state
                .routes()
                .iter()
                .all(|route| self.descriptors.contains_key(&route.key))
    }

    /// Container measured at `width`
    pub fn on_layout(&mut self, width: f32) {
        self.tab_bar.on_layout(width);
    }

    /// Advance animations by one frame; returns whether more frames are needed
    pub fn frame(&mut self, dt: Duration) -> bool {
        self.sync();
        self.tab_bar.tick(dt);
        self.tab_bar.is_animating()
    }

    /// A destination slot was pressed
    pub fn press(&mut self, index: usize) -> PressOutcome {
        let outcome = self.tab_bar.press(index, self.store.as_ref());
        if outcome == PressOutcome::Navigated {
            self.sync();
        }
        outcome
    }

    /// Current frame of the tab bar
    pub fn render(&self) -> TabBarView {
        self.tab_bar.render(&self.descriptors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shell() -> AppShell {
        AppShell::new(&AppConfig::default(), Instant::now())
    }

    #[test]
    fn test_press_moves_focus_through_store() {
        let mut shell = shell();
        shell.on_layout(360.0);

        assert_eq!(shell.press(2), PressOutcome::Navigated);
        assert_eq!(shell.store().state().focused_index(), 2);
        assert_eq!(shell.tab_bar().focused_index(), 2);
        assert!(shell.tab_bar().is_animating());
    }

    #[test]
    fn test_startup_installs_tracing() {
        let _shell = shell();
        assert!(!init_tracing("trace"));
    }

    #[test]
    fn test_sync_without_changes() {
        let mut shell = shell();
        assert!(!shell.sync());
    }

    #[test]
    fn test_external_navigation_is_synced() {
        use app_state::navigation::Navigator;

        let mut shell = shell();
        let store = shell.store();
        let key = store.state().routes()[3].key.clone();
        store.navigate(&key).unwrap();

        assert!(shell.sync());
        assert_eq!(shell.render().focused_item().unwrap().label, "Wineries");
    }

    #[test]
    fn test_frames_settle() {
        let mut shell = shell();
        shell.on_layout(360.0);
        shell.press(1);

        let mut frames = 0;
        while shell.frame(Duration::from_millis(16)) {
            frames += 1;
            assert!(frames < 1_000);
        }
        let view = shell.render();
        assert_eq!(view.indicator.left, shell.tab_bar().geometry().target_left(1));
    }
}
