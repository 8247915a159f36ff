//! Wine Trails
//!
//! Application shell for the wine-tourism app: configuration, logging, the
//! launch splash and the wiring between the navigation store and the
//! floating tab bar.
//!
//! # Example
//!
//! ```rust
//! use std::time::{Duration, Instant};
//! use wine_trails::{AppConfig, AppShell, LaunchPhase};
//!
//! let started = Instant::now();
//! let mut shell = AppShell::new(&AppConfig::default(), started);
//! assert_eq!(shell.phase(started), LaunchPhase::Splash);
//! assert_eq!(shell.phase(started + Duration::from_secs(2)), LaunchPhase::Ready);
//!
//! shell.on_layout(360.0);
//! shell.press(1);
//! assert_eq!(shell.render().focused_item().unwrap().label, "Events");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod launch;
pub mod logging;
pub mod shell;

pub use config::{AppConfig, ConfigError};
pub use launch::{LaunchPhase, LaunchScreen};
pub use logging::init_tracing;
pub use shell::AppShell;
