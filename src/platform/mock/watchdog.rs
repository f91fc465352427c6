//! Mock watchdog implementation for testing

use crate::platform::traits::Watchdog;

/// Mock watchdog that counts how often it was fed
#[derive(Debug, Default)]
pub struct MockWatchdog {
    feeds: u32,
}

impl MockWatchdog {
    /// Create a new mock watchdog
    pub fn new() -> Self {
        Self { feeds: 0 }
    }

    /// Number of feeds since creation
    pub fn feeds(&self) -> u32 {
        self.feeds
    }
}

impl Watchdog for MockWatchdog {
    fn feed(&mut self) {
        self.feeds = self.feeds.saturating_add(1);
    }
}
