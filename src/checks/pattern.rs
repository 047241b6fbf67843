//! Run checks - detect consecutive whitespace and identical characters.
//!
//! Both checks are linear scans over the characters; a run is a maximal
//! contiguous sequence of qualifying characters, and a violation fires
//! when the longest run is strictly longer than the configured maximum.

use super::CheckResult;
use crate::config::PolicyConfig;
use crate::violation::{Violation, ViolationKind};

/// Checks that no run of whitespace characters exceeds the configured
/// maximum. Skipped entirely when the policy disables it.
///
/// A maximum of zero rejects any whitespace character at all.
///
/// # Returns
/// - `Some(violation)` if a whitespace run is too long
/// - `None` if the check passes or is disabled
pub fn max_consecutive_whitespace(password: &str, config: &PolicyConfig) -> CheckResult {
    let Some(max) = config.max_consecutive_whitespace else {
        return None;
    };
    if longest_whitespace_run(password) > max as usize {
        return Some(Violation::new(ViolationKind::MaxConsecutiveWhitespace, max));
    }
    None
}

/// Checks that no character repeats more than the configured maximum of
/// consecutive times. Skipped entirely when the policy disables it.
///
/// The limit bounds the total run length: with a maximum of 2, `"aab"`
/// passes and `"aaab"` fails.
///
/// # Returns
/// - `Some(violation)` if an identical run is too long
/// - `None` if the check passes or is disabled
pub fn max_consecutive_identical(password: &str, config: &PolicyConfig) -> CheckResult {
    let Some(max) = config.max_consecutive_identical else {
        return None;
    };
    if longest_identical_run(password) > max as usize {
        return Some(Violation::new(ViolationKind::MaxConsecutiveIdentical, max));
    }
    None
}

/// Length of the longest contiguous run of whitespace characters.
fn longest_whitespace_run(password: &str) -> usize {
    let mut longest = 0;
    let mut current = 0;
    for c in password.chars() {
        if c.is_whitespace() {
            current += 1;
            if current > longest {
                longest = current;
            }
        } else {
            current = 0;
        }
    }
    longest
}

/// Length of the longest contiguous run of one identical character.
fn longest_identical_run(password: &str) -> usize {
    let mut longest = 0;
    let mut current = 0;
    let mut previous: Option<char> = None;
    for c in password.chars() {
        if previous == Some(c) {
            current += 1;
        } else {
            current = 1;
        }
        if current > longest {
            longest = current;
        }
        previous = Some(c);
    }
    longest
}
