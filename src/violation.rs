//! Violation types produced by the policy checks.

/// Identifies the rule a password failed, listed in check order.
///
/// The string form returned by [`key`](ViolationKind::key) is stable and
/// intended as the lookup key for host-side translation catalogs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum ViolationKind {
    MinLength,
    MinLetters,
    MinLowercaseLetters,
    MinUppercaseLetters,
    MinNumbers,
    MinSpecial,
    MaxConsecutiveWhitespace,
    MaxConsecutiveIdentical,
}

impl ViolationKind {
    /// Stable snake_case identifier for this rule.
    pub fn key(self) -> &'static str {
        match self {
            Self::MinLength => "min_length",
            Self::MinLetters => "min_letters",
            Self::MinLowercaseLetters => "min_lowercase_letters",
            Self::MinUppercaseLetters => "min_uppercase_letters",
            Self::MinNumbers => "min_numbers",
            Self::MinSpecial => "min_special",
            Self::MaxConsecutiveWhitespace => "max_consecutive_whitespace",
            Self::MaxConsecutiveIdentical => "max_consecutive_identical",
        }
    }

    /// Name of the placeholder parameter carried by violations of this
    /// rule: `min` for the count checks, `max` for the run checks.
    pub fn param_name(self) -> &'static str {
        match self {
            Self::MaxConsecutiveWhitespace | Self::MaxConsecutiveIdentical => "max",
            _ => "min",
        }
    }
}

/// A single failed check.
///
/// Carries everything a message formatter needs: the rule, the
/// pluralization quantity and the named placeholder value. The quantity
/// is always the configured threshold of the rule that failed.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Violation {
    /// Which rule failed.
    pub kind: ViolationKind,
    /// Quantity used for singular/plural selection and as the value of
    /// the `:min`/`:max` placeholder.
    pub quantity: u32,
}

impl Violation {
    /// Creates a violation of `kind` with the given quantity.
    pub fn new(kind: ViolationKind, quantity: u32) -> Self {
        Self { kind, quantity }
    }

    /// Named parameters for message rendering.
    pub fn params(&self) -> [(&'static str, u32); 1] {
        [(self.kind.param_name(), self.quantity)]
    }
}

/// Result of evaluating one password against a policy.
///
/// Every failed check contributes one violation, in check order. Only the
/// first one is surfaced as the primary message, but the full list stays
/// available for callers who want complete diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PolicyEvaluation {
    /// Every failed check, in check order.
    pub violations: Vec<Violation>,
}

impl PolicyEvaluation {
    /// `true` when no check failed.
    pub fn passed(&self) -> bool {
        self.violations.is_empty()
    }

    /// The first violation in check order, if any.
    pub fn primary(&self) -> Option<&Violation> {
        self.violations.first()
    }
}
