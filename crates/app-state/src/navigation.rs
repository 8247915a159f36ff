//! Navigation framework state
//!
//! This module owns the tab navigation state for the app shell: the fixed
//! set of top-level destinations, which one is focused, and the two
//! capabilities a tab bar is handed by the framework:
//!
//! - a cancelable `tabPress` event that listeners may veto
//! - a `navigate` intent that focuses a destination by key
//!
//! Focus changes are published through a `watch` channel so any number of
//! observers (tab bar, screens, analytics) see the latest state.

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::watch;

/// Navigation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    /// A navigation state needs at least one destination
    #[error("Navigation state has no destinations")]
    NoDestinations,

    /// Focused index does not address a destination
    #[error("Focused index {index} out of range for {len} destinations")]
    IndexOutOfRange {
        /// Requested index
        index: usize,
        /// Number of destinations
        len: usize,
    },

    /// No destination with this key
    #[error("Unknown destination: {0}")]
    UnknownDestination(String),
}

/// Result type for navigation operations
pub type Result<T> = std::result::Result<T, NavigationError>;

// =============================================================================
// Destinations
// =============================================================================

/// Icon family shown for a destination
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum IconKind {
    /// House icon
    #[default]
    Home,
    /// Calendar icon
    Calendar,
    /// Star icon
    Star,
    /// Wine glass icon
    Wine,
}

impl IconKind {
    /// Icon glyph name understood by the icon font
    pub fn glyph(&self) -> &'static str {
        match self {
            IconKind::Home => "home",
            IconKind::Calendar => "calendar",
            IconKind::Star => "star",
            IconKind::Wine => "wine",
        }
    }

    /// Icon used for a route name; unknown names get the home icon
    pub fn for_route_name(name: &str) -> Self {
        match name {
            "events" => IconKind::Calendar,
            "specials" => IconKind::Star,
            "wineries" => IconKind::Wine,
            _ => IconKind::Home,
        }
    }
}

/// One navigable top-level section of the app
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Destination {
    /// Unique route key (`<name>-<uuid>`)
    pub key: String,
    /// Route name
    pub name: String,
    /// Display label
    pub label: String,
    /// Icon family
    pub icon: IconKind,
}

impl Destination {
    /// Declare a destination, generating its route key
    pub fn new(name: impl Into<String>, label: impl Into<String>, icon: IconKind) -> Self {
        let name = name.into();
        Self {
            key: format!("{}-{}", name, uuid::Uuid::new_v4()),
            name,
            label: label.into(),
            icon,
        }
    }
}

// =============================================================================
// Navigation State
// =============================================================================

/// Ordered destinations plus the focused one
///
/// Always holds at least one destination and a focused index inside the
/// route list; both constructors and deserialization enforce it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawNavigationState")]
pub struct NavigationState {
    routes: Vec<Destination>,
    focused_index: usize,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawNavigationState {
    routes: Vec<Destination>,
    focused_index: usize,
}

impl TryFrom<RawNavigationState> for NavigationState {
    type Error = NavigationError;

    fn try_from(raw: RawNavigationState) -> Result<Self> {
        NavigationState::new(raw.routes, raw.focused_index)
    }
}

impl NavigationState {
    /// Create a navigation state
    pub fn new(routes: Vec<Destination>, focused_index: usize) -> Result<Self> {
        if routes.is_empty() {
            return Err(NavigationError::NoDestinations);
        }
        if focused_index >= routes.len() {
            return Err(NavigationError::IndexOutOfRange {
                index: focused_index,
                len: routes.len(),
            });
        }
        Ok(Self {
            routes,
            focused_index,
        })
    }

    /// Destinations in display order
    pub fn routes(&self) -> &[Destination] {
        &self.routes
    }

    /// Index of the focused destination
    pub fn focused_index(&self) -> usize {
        self.focused_index
    }

    /// The focused destination
    pub fn focused(&self) -> &Destination {
        &self.routes[self.focused_index]
    }

    /// Number of destinations (never zero)
    pub fn destination_count(&self) -> usize {
        self.routes.len()
    }

    /// Position of the destination with this key
    pub fn index_of(&self, key: &str) -> Option<usize> {
        self.routes.iter().position(|route| route.key == key)
    }

    /// Focus a destination by index, returning whether focus moved
    pub fn focus(&mut self, index: usize) -> Result<bool> {
        if index >= self.routes.len() {
            return Err(NavigationError::IndexOutOfRange {
                index,
                len: self.routes.len(),
            });
        }
        let moved = self.focused_index != index;
        self.focused_index = index;
        Ok(moved)
    }
}

// =============================================================================
// Tab Press Events
// =============================================================================

/// Cancelable event emitted before a tab press navigates
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TabPressEvent {
    /// Key of the pressed destination
    pub target: String,
    default_prevented: bool,
}

impl TabPressEvent {
    /// Create an event for a pressed destination
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            default_prevented: false,
        }
    }

    /// Veto the default navigation
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    /// Whether a listener vetoed the default navigation
    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// Capabilities a tab bar receives from the navigation framework
pub trait Navigator {
    /// Run every tab press listener and return the resulting event
    fn emit_tab_press(&self, target: &str) -> TabPressEvent;

    /// Focus the destination with this key
    fn navigate(&self, key: &str) -> Result<()>;
}

// =============================================================================
// Navigation Store
// =============================================================================

/// Handle for a registered tab press listener
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(uuid::Uuid);

type TabPressListener = Arc<dyn Fn(&mut TabPressEvent) + Send + Sync>;

/// Owner of the navigation state
///
/// # Example
///
/// ```
/// use app_state::navigation::{Destination, IconKind, NavigationState, NavigationStore, Navigator};
///
/// let home = Destination::new("home", "Home", IconKind::Home);
/// let events = Destination::new("events", "Events", IconKind::Calendar);
/// let events_key = events.key.clone();
///
/// let state = NavigationState::new(vec![home, events], 0).unwrap();
/// let store = NavigationStore::new(state);
/// let mut rx = store.subscribe();
///
/// store.navigate(&events_key).unwrap();
/// assert!(rx.has_changed().unwrap());
/// assert_eq!(rx.borrow_and_update().focused_index(), 1);
/// ```
pub struct NavigationStore {
    /// Current state and its subscribers
    state_tx: watch::Sender<NavigationState>,
    /// Tab press listeners in registration order
    listeners: RwLock<Vec<(ListenerId, TabPressListener)>>,
}

impl NavigationStore {
    /// Create a store holding an initial state
    pub fn new(state: NavigationState) -> Self {
        let (state_tx, _) = watch::channel(state);
        Self {
            state_tx,
            listeners: RwLock::new(Vec::new()),
        }
    }

    /// Snapshot of the current state
    pub fn state(&self) -> NavigationState {
        self.state_tx.borrow().clone()
    }

    /// Subscribe to state changes
    pub fn subscribe(&self) -> watch::Receiver<NavigationState> {
        self.state_tx.subscribe()
    }

    /// Replace the whole state (e.g. a new destination set)
    pub fn reset(&self, state: NavigationState) {
        tracing::debug!(
            destinations = state.destination_count(),
            focused = state.focused_index(),
            "Navigation state reset"
        );
        self.state_tx.send_replace(state);
    }

    /// Register a tab press listener
    pub fn add_tab_press_listener<F>(&self, listener: F) -> ListenerId
    where
        F: Fn(&mut TabPressEvent) + Send + Sync + 'static,
    {
        let id = ListenerId(uuid::Uuid::new_v4());
        self.listeners.write().push((id, Arc::new(listener)));
        id
    }

    /// Remove a tab press listener, returning whether it was registered
    pub fn remove_tab_press_listener(&self, id: ListenerId) -> bool {
        let mut listeners = self.listeners.write();
        let before = listeners.len();
        listeners.retain(|(listener_id, _)| *listener_id != id);
        listeners.len() != before
    }

    /// Number of registered tab press listeners
    pub fn listener_count(&self) -> usize {
        self.listeners.read().len()
    }
}

impl Navigator for NavigationStore {
    fn emit_tab_press(&self, target: &str) -> TabPressEvent {
        // Listeners may register others; never call them under the lock.
        let listeners: Vec<TabPressListener> = self
            .listeners
            .read()
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();

        let mut event = TabPressEvent::new(target);
        for listener in &listeners {
            listener(&mut event);
        }

        if event.is_default_prevented() {
            tracing::debug!(target, "Tab press prevented by listener");
        }
        event
    }

    fn navigate(&self, key: &str) -> Result<()> {
        // Lookup and focus happen under one write lock so a concurrent
        // reset cannot swap the routes in between.
        let mut found = None;
        let moved = self.state_tx.send_if_modified(|state| {
            let Some(index) = state.index_of(key) else {
                return false;
            };
            found = Some(index);
            state.focus(index).unwrap_or(false)
        });

        let index = found.ok_or_else(|| NavigationError::UnknownDestination(key.to_string()))?;
        if moved {
            tracing::debug!(key, index, "Focused destination changed");
        }
        Ok(())
    }
}
