//! Launch splash
//!
//! The app opens on a loading screen and redirects to the Home destination
//! once the splash delay has elapsed.

use std::time::{Duration, Instant};

/// What the app shows right now
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchPhase {
    /// Loading screen
    Splash,
    /// Tabs are shown
    Ready,
}

/// Splash timer
#[derive(Debug, Clone, Copy)]
pub struct LaunchScreen {
    started: Instant,
    delay: Duration,
    ready: bool,
}

impl LaunchScreen {
    /// Start the splash at `started`
    pub fn new(started: Instant, delay: Duration) -> Self {
        Self {
            started,
            delay,
            ready: false,
        }
    }

    /// Phase at `now`; once ready it stays ready
    pub fn poll(&mut self, now: Instant) -> LaunchPhase {
        if !self.ready && now.saturating_duration_since(self.started) >= self.delay {
            self.ready = true;
            tracing::info!(delay_ms = self.delay.as_millis() as u64, "Splash finished");
        }
        if self.ready {
            LaunchPhase::Ready
        } else {
            LaunchPhase::Splash
        }
    }

    /// Time left on the splash at `now`
    pub fn remaining(&self, now: Instant) -> Duration {
        if self.ready {
            return Duration::ZERO;
        }
        self.delay
            .saturating_sub(now.saturating_duration_since(self.started))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splash_then_ready() {
        let start = Instant::now();
        let mut launch = LaunchScreen::new(start, Duration::from_secs(2));

        assert_eq!(launch.poll(start), LaunchPhase::Splash);
        assert_eq!(launch.remaining(start), Duration::from_secs(2));
        assert_eq!(
            launch.poll(start + Duration::from_millis(1_999)),
            LaunchPhase::Splash
        );
        assert_eq!(launch.poll(start + Duration::from_secs(2)), LaunchPhase::Ready);
    }

    #[test]
    fn test_ready_is_sticky() {
        let start = Instant::now();
        let mut launch = LaunchScreen::new(start, Duration::from_millis(10));
        launch.poll(start + Duration::from_millis(10));

        // Clock readings earlier than the start do not reopen the splash.
        assert_eq!(launch.poll(start), LaunchPhase::Ready);
        assert_eq!(launch.remaining(start), Duration::ZERO);
    }

    #[test]
    fn test_zero_delay_is_ready_immediately() {
        let start = Instant::now();
        let mut launch = LaunchScreen::new(start, Duration::ZERO);
        assert_eq!(launch.poll(start), LaunchPhase::Ready);
    }
}
