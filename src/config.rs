//! Password policy configuration.

/// Thresholds a password must satisfy.
///
/// All thresholds are non-negative by construction. The two
/// `max_consecutive_*` limits are `Option`s: `None` disables the check
/// entirely, which is not the same as `Some(0)`, a limit of zero meaning
/// no occurrence at all is tolerated.
///
/// A config with nonsensical values (e.g. `min_length: 0`) is legal and
/// simply never rejects on that check.
///
/// # Example
///
/// ```rust
/// use pwd_policy::PolicyConfig;
///
/// let config = PolicyConfig::new()
///     .min_length(8)
///     .min_numbers(1)
///     .max_consecutive_identical(2);
///
/// assert_eq!(config.max_consecutive_identical, Some(2));
/// ```
///
/// The fields are public, so struct-update syntax works just as well:
///
/// ```rust
/// use pwd_policy::PolicyConfig;
///
/// let config = PolicyConfig {
///     min_length: 8,
///     min_numbers: 1,
///     ..PolicyConfig::default()
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct PolicyConfig {
    /// The minimum length.
    pub min_length: u32,
    /// Require the use of at least X letters.
    pub min_letters: u32,
    /// Require the use of at least X lowercase letters.
    pub min_lowercase_letters: u32,
    /// Require the use of at least X uppercase letters.
    pub min_uppercase_letters: u32,
    /// Require the use of at least X numbers.
    pub min_numbers: u32,
    /// Require the use of at least X special characters.
    pub min_special: u32,
    /// No more than X consecutive whitespace characters (`None` to disable).
    pub max_consecutive_whitespace: Option<u32>,
    /// No more than X consecutive identical characters (`None` to disable).
    pub max_consecutive_identical: Option<u32>,
}

impl PolicyConfig {
    /// Creates a config with the default thresholds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the minimum length.
    pub fn min_length(mut self, min: u32) -> Self {
        self.min_length = min;
        self
    }

    /// Sets the minimum number of letters.
    pub fn min_letters(mut self, min: u32) -> Self {
        self.min_letters = min;
        self
    }

    /// Sets the minimum number of lowercase letters.
    pub fn min_lowercase_letters(mut self, min: u32) -> Self {
        self.min_lowercase_letters = min;
        self
    }

    /// Sets the minimum number of uppercase letters.
    pub fn min_uppercase_letters(mut self, min: u32) -> Self {
        self.min_uppercase_letters = min;
        self
    }

    /// Sets the minimum number of numeric characters.
    pub fn min_numbers(mut self, min: u32) -> Self {
        self.min_numbers = min;
        self
    }

    /// Sets the minimum number of special characters.
    pub fn min_special(mut self, min: u32) -> Self {
        self.min_special = min;
        self
    }

    /// Sets the consecutive-whitespace limit; `None` disables the check.
    pub fn max_consecutive_whitespace(mut self, max: impl Into<Option<u32>>) -> Self {
        self.max_consecutive_whitespace = max.into();
        self
    }

    /// Sets the consecutive-identical limit; `None` disables the check.
    pub fn max_consecutive_identical(mut self, max: impl Into<Option<u32>>) -> Self {
        self.max_consecutive_identical = max.into();
        self
    }
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            min_length: 6,
            min_letters: 0,
            min_lowercase_letters: 0,
            min_uppercase_letters: 0,
            min_numbers: 0,
            min_special: 0,
            max_consecutive_whitespace: Some(2),
            max_consecutive_identical: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_thresholds() {
        let config = PolicyConfig::default();
        assert_eq!(config.min_length, 6);
        assert_eq!(config.min_letters, 0);
        assert_eq!(config.min_lowercase_letters, 0);
        assert_eq!(config.min_uppercase_letters, 0);
        assert_eq!(config.min_numbers, 0);
        assert_eq!(config.min_special, 0);
        assert_eq!(config.max_consecutive_whitespace, Some(2));
        assert_eq!(config.max_consecutive_identical, None);
    }

    #[test]
    fn test_new_matches_default() {
        assert_eq!(PolicyConfig::new(), PolicyConfig::default());
    }

    #[test]
    fn test_struct_update_keeps_remaining_defaults() {
        let config = PolicyConfig {
            min_special: 2,
            ..PolicyConfig::default()
        };
        assert_eq!(config.min_special, 2);
        assert_eq!(config.min_length, 6);
        assert_eq!(config.max_consecutive_whitespace, Some(2));
    }

    #[test]
    fn test_setters_chain() {
        let config = PolicyConfig::new()
            .min_length(10)
            .min_letters(4)
            .min_lowercase_letters(2)
            .min_uppercase_letters(1)
            .min_numbers(1)
            .min_special(1)
            .max_consecutive_whitespace(1)
            .max_consecutive_identical(3);
        assert_eq!(config.min_length, 10);
        assert_eq!(config.min_letters, 4);
        assert_eq!(config.min_lowercase_letters, 2);
        assert_eq!(config.min_uppercase_letters, 1);
        assert_eq!(config.min_numbers, 1);
        assert_eq!(config.min_special, 1);
        assert_eq!(config.max_consecutive_whitespace, Some(1));
        assert_eq!(config.max_consecutive_identical, Some(3));
    }

    #[test]
    fn test_consecutive_limits_accept_none_to_disable() {
        let config = PolicyConfig::new()
            .max_consecutive_whitespace(None)
            .max_consecutive_identical(None);
        assert_eq!(config.max_consecutive_whitespace, None);
        assert_eq!(config.max_consecutive_identical, None);
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn test_empty_document_deserializes_to_defaults() {
        let config: PolicyConfig = serde_json::from_str("{}").expect("valid config");
        assert_eq!(config, PolicyConfig::default());
    }

    #[test]
    fn test_partial_document_keeps_remaining_defaults() {
        let config: PolicyConfig =
            serde_json::from_str(r#"{"min_length": 10, "max_consecutive_identical": 3}"#)
                .expect("valid config");
        assert_eq!(config.min_length, 10);
        assert_eq!(config.max_consecutive_identical, Some(3));
        assert_eq!(config.max_consecutive_whitespace, Some(2));
    }

    #[test]
    fn test_round_trip() {
        let config = PolicyConfig {
            min_uppercase_letters: 1,
            max_consecutive_whitespace: None,
            ..PolicyConfig::default()
        };
        let json = serde_json::to_string(&config).expect("serializable");
        let back: PolicyConfig = serde_json::from_str(&json).expect("valid config");
        assert_eq!(back, config);
    }
}
