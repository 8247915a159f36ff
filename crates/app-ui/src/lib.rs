//! User interface for Wine Trails
//!
//! This crate provides the floating tab bar and the design system
//! primitives it is drawn with.
//!
//! # Design System
//!
//! The palette is built around the winery brand colour:
//! - Primary: Wine purple (#720969)
//! - Inactive tint: Soft grey (#AAAAAA)
//!
//! # Modules
//!
//! - [`theme`] - Brand colours and tab bar palettes
//! - [`tokens`] - Design tokens (spacing, sizing, motion)
//! - [`navigation`] - Tab catalog, labels and descriptors
//! - [`tab_bar`] - Geometry, focus tracking and spring animation of the bar
//!
//! # Example
//!
//! ```rust
//! use app_ui::navigation::initial_state;
//! use app_ui::tab_bar::{TabBar, TabBarConfig};
//!
//! let bar = TabBar::mount(&initial_state(), TabBarConfig::default(), 390.0);
//! assert_eq!(bar.focused_index(), 0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod navigation;
pub mod tab_bar;
pub mod theme;
pub mod tokens;

// Re-export commonly used types
pub use theme::{brand, Color, TabBarColors, ThemeName};

pub use tokens::{motion, spacing, Shadow};

pub use navigation::{
    default_descriptors, initial_state, resolve_label, title_case, Descriptors, NavigationTab,
    TabDescriptor,
};

pub use tab_bar::{
    BarGeometry, PressOutcome, SpringConfig, TabBar, TabBarConfig, TabBarView, TabItemView,
};
