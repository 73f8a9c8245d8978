//! Configuration module.

use std::time::Duration;

/// Search behavior configuration.
///
/// A plain value passed into the pipeline at construction. There is no
/// process-wide configuration singleton; tests shorten the debounce
/// interval by building their own value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    /// Quiet interval a keystroke burst must satisfy before a search runs.
    pub debounce_interval: Duration,
    /// Maximum significant query length; longer input is truncated.
    pub max_query_length: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce_interval: Duration::from_secs(1),
            max_query_length: 5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_debounce_interval_is_one_second() {
        let config = SearchConfig::default();
        assert_eq!(config.debounce_interval, Duration::from_secs(1));
    }

    #[test]
    fn default_max_query_length_is_five() {
        let config = SearchConfig::default();
        assert_eq!(config.max_query_length, 5);
    }

    #[test]
    fn config_is_cloneable() {
        let config = SearchConfig::default();
        let cloned = config.clone();
        assert_eq!(config, cloned, "Cloned config should equal original");
    }

    #[test]
    fn can_create_config_with_custom_values() {
        let config = SearchConfig {
            debounce_interval: Duration::from_millis(50),
            max_query_length: 8,
        };
        assert_eq!(config.debounce_interval, Duration::from_millis(50));
        assert_eq!(config.max_query_length, 8);
    }
}
