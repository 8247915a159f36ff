//! Top-level destinations of Wine Trails
//!
//! This module declares the four tabs of the app shell and the display
//! options (descriptors) the tab bar renders them with:
//! - Tab catalog and its navigation state
//! - Labels derived from route names
//! - Per-destination descriptors with label fallback

use app_state::navigation::{Destination, IconKind, NavigationState};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::OnceLock;

// =============================================================================
// Labels
// =============================================================================

/// Title-case every word of a route name (`"wine tours"` -> `"Wine Tours"`)
pub fn title_case(text: &str) -> String {
    static WORD_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = WORD_REGEX.get_or_init(|| Regex::new(r"\w\S*").expect("valid word regex"));

    regex
        .replace_all(text, |caps: &regex::Captures<'_>| {
            let word = &caps[0];
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    let mut titled: String = first.to_uppercase().collect();
                    titled.push_str(&chars.as_str().to_lowercase());
                    titled
                }
                None => String::new(),
            }
        })
        .into_owned()
}

// =============================================================================
// Navigation Tabs
// =============================================================================

/// Main navigation tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum NavigationTab {
    /// Home tab
    #[default]
    Home,
    /// Upcoming events
    Events,
    /// Winery specials
    Specials,
    /// Winery directory
    Wineries,
}

impl NavigationTab {
    /// Route name of this tab
    pub fn route_name(&self) -> &'static str {
        match self {
            NavigationTab::Home => "home",
            NavigationTab::Events => "events",
            NavigationTab::Specials => "specials",
            NavigationTab::Wineries => "wineries",
        }
    }

    /// Declare the destination for this tab
    pub fn destination(&self) -> Destination {
        let name = self.route_name();
        Destination::new(name, title_case(name), IconKind::for_route_name(name))
    }

    /// Get all tabs in order
    pub fn all() -> [NavigationTab; 4] {
        [
            NavigationTab::Home,
            NavigationTab::Events,
            NavigationTab::Specials,
            NavigationTab::Wineries,
        ]
    }
}

/// Destinations of every tab, in display order
pub fn default_destinations() -> Vec<Destination> {
    NavigationTab::all()
        .iter()
        .map(NavigationTab::destination)
        .collect()
}

/// Navigation state the app launches with (Home focused)
pub fn initial_state() -> NavigationState {
    let routes = default_destinations();
    let home = NavigationTab::all()
        .iter()
        .position(|tab| *tab == NavigationTab::default())
        .unwrap_or(0);
    NavigationState::new(routes, home).expect("tab catalog is non-empty")
}

// =============================================================================
// Descriptors
// =============================================================================

/// Display options the framework supplies for one destination
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TabDescriptor {
    /// Explicit tab bar label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Screen title, used as label when no label is set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl TabDescriptor {
    /// Descriptor with a label
    pub fn with_label(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            title: None,
        }
    }

    /// Descriptor with a title
    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            label: None,
            title: Some(title.into()),
        }
    }
}

/// Descriptors keyed by destination key
pub type Descriptors = HashMap<String, TabDescriptor>;

/// Descriptors the app shell uses: every tab labelled with its title-cased name
pub fn default_descriptors(state: &NavigationState) -> Descriptors {
    state
        .routes()
        .iter()
        .map(|route| (route.key.clone(), TabDescriptor::with_label(title_case(&route.name))))
        .collect()
}

/// Label for a destination: descriptor label, then title, then its own label
pub fn resolve_label(descriptors: &Descriptors, destination: &Destination) -> String {
    descriptors
        .get(&destination.key)
        .and_then(|descriptor| descriptor.label.clone().or_else(|| descriptor.title.clone()))
        .unwrap_or_else(|| destination.label.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("wineries"), "Wineries");
        assert_eq!(title_case("wine tours"), "Wine Tours");
        assert_eq!(title_case("SPECIALS"), "Specials");
        assert_eq!(title_case("  events  "), "  Events  ");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn test_tab_catalog_order() {
        let names: Vec<&str> = NavigationTab::all().iter().map(|t| t.route_name()).collect();
        assert_eq!(names, vec!["home", "events", "specials", "wineries"]);
    }

    #[test]
    fn test_tab_destinations() {
        let routes = default_destinations();
        assert_eq!(routes.len(), 4);
        assert_eq!(routes[0].label, "Home");
        assert_eq!(routes[1].icon, IconKind::Calendar);
        assert_eq!(routes[2].icon, IconKind::Star);
        assert_eq!(routes[3].icon, IconKind::Wine);
        assert!(routes[3].key.starts_with("wineries-"));
    }

    #[test]
    fn test_initial_state_focuses_home() {
        let state = initial_state();
        assert_eq!(state.focused_index(), 0);
        assert_eq!(state.focused().name, "home");
    }

    #[test]
    fn test_resolve_label_fallbacks() {
        let state = initial_state();
        let routes = state.routes();
        let mut descriptors = Descriptors::new();
        descriptors.insert(routes[0].key.clone(), TabDescriptor::with_label("Start"));
        descriptors.insert(routes[1].key.clone(), TabDescriptor::with_title("What's On"));

        assert_eq!(resolve_label(&descriptors, &routes[0]), "Start");
        assert_eq!(resolve_label(&descriptors, &routes[1]), "What's On");
        assert_eq!(resolve_label(&descriptors, &routes[2]), "Specials");
    }

    #[test]
    fn test_default_descriptors_cover_every_route() {
        let state = initial_state();
        let descriptors = default_descriptors(&state);
        assert_eq!(descriptors.len(), 4);
        for route in state.routes() {
            assert_eq!(resolve_label(&descriptors, route), route.label);
        }
    }

    #[test]
    fn test_descriptor_serialization() {
        let json = serde_json::to_string(&TabDescriptor::with_title("Events")).unwrap();
        assert_eq!(json, r#"{"title":"Events"}"#);
    }
}
