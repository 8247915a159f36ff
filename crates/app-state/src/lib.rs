//! Application state management for Wine Trails
//!
//! This crate provides the navigation framework side of the app shell:
//! destinations, the focused-destination state, focus-change notifications
//! and the cancelable tab press intent that tab bars call into.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod navigation;

pub use navigation::{
    Destination, IconKind, ListenerId, NavigationError, NavigationState, NavigationStore,
    Navigator, TabPressEvent,
};
