//! Length check - enforces the minimum password length.

use super::CheckResult;
use crate::config::PolicyConfig;
use crate::violation::{Violation, ViolationKind};

/// Checks that the password counts at least `min_length` characters.
///
/// Length is measured in Unicode scalar values, never bytes, so
/// multi-byte scripts count one per character.
///
/// # Returns
/// - `Some(violation)` if the password is too short
/// - `None` if the password has sufficient length
pub fn min_length(password: &str, config: &PolicyConfig) -> CheckResult {
    if password.chars().count() < config.min_length as usize {
        return Some(Violation::new(ViolationKind::MinLength, config.min_length));
    }
    None
}
