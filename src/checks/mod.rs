//! Password policy checks
//!
//! Each check inspects one aspect of the password against the configured
//! thresholds. Checks are total: they either find a violation or pass,
//! there is no error path.

mod length;
mod pattern;
mod variety;

pub use length::min_length;
pub use pattern::{max_consecutive_identical, max_consecutive_whitespace};
pub use variety::{
    min_letters, min_lowercase_letters, min_numbers, min_special, min_uppercase_letters,
};

use crate::violation::Violation;

/// Result of a single policy check.
/// - `Some(violation)` - Check failed
/// - `None` - Check passed
pub type CheckResult = Option<Violation>;
