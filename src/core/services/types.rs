use std::time::Duration;

/// Default simulated round-trip of the mock service
pub const DEFAULT_DELAY: Duration = Duration::from_secs(2);

/// Upper bound (inclusive) of the failure roll; a roll of 0 fails
pub const FAILURE_ROLL_MAX: u8 = 4;

/// Message of the injected generic failure
pub const RANDOM_ERROR_MESSAGE: &str = "Random error occurred";

/// Behaviour knobs for [`MockCitiesService`](super::MockCitiesService)
#[derive(Debug, Clone, PartialEq)]
pub struct MockOptions {
    /// Inject a generic failure on roughly one call in five
    pub randomly_fail: bool,
    /// Artificial latency applied before every call completes
    pub delay: Duration,
}

impl Default for MockOptions {
    fn default() -> Self {
        Self {
            randomly_fail: true,
            delay: DEFAULT_DELAY,
        }
    }
}

impl MockOptions {
    /// Options with no latency and no failure injection
    pub fn reliable() -> Self {
        Self {
            randomly_fail: false,
            delay: Duration::ZERO,
        }
    }

    pub fn with_randomly_fail(mut self, randomly_fail: bool) -> Self {
        self.randomly_fail = randomly_fail;
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}
