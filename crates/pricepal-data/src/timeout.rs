//! Timeout configuration for API calls.

use std::time::Duration;

/// Connect and total timeouts applied to every request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeoutConfig {
    /// Connection timeout.
    pub connect: Duration,
    /// Total operation timeout, body included.
    pub total: Duration,
}

impl TimeoutConfig {
    /// Create a new timeout configuration.
    pub fn new(connect: Duration, total: Duration) -> Self {
        Self { connect, total }
    }

    /// Create from millisecond values, as stored in config files.
    pub fn from_millis(connect_ms: u64, total_ms: u64) -> Self {
        Self::new(
            Duration::from_millis(connect_ms),
            Duration::from_millis(total_ms),
        )
    }
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            connect: Duration::from_secs(3),
            total: Duration::from_secs(10),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_timeouts() {
        let config = TimeoutConfig::default();
        assert_eq!(config, TimeoutConfig::from_millis(3_000, 10_000));
    }

    #[test]
    fn test_from_millis() {
        let config = TimeoutConfig::from_millis(250, 5_000);
        assert_eq!(config.connect, Duration::from_millis(250));
        assert_eq!(config.total, Duration::from_secs(5));
    }
}
