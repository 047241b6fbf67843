//! Character variety checks - letter, case, number and special counts.
//!
//! Classification is per Unicode scalar value: letters are alphabetic
//! characters in any script, numbers cover the Nd/Nl/No general
//! categories, and special characters are the complement of the two
//! (whitespace and punctuation included, there is no curated symbol set).

use super::CheckResult;
use crate::config::PolicyConfig;
use crate::violation::{Violation, ViolationKind};

fn is_letter(c: char) -> bool {
    c.is_alphabetic()
}

fn is_number(c: char) -> bool {
    c.is_numeric()
}

/// Anything that is neither a letter nor a number.
fn is_special(c: char) -> bool {
    !c.is_alphanumeric()
}

fn count_matching(password: &str, matches: fn(char) -> bool) -> usize {
    password.chars().filter(|&c| matches(c)).count()
}

/// Checks that the password contains at least `min_letters` letters,
/// in any script.
///
/// # Returns
/// - `Some(violation)` if the password has too few letters
/// - `None` if the check passes
pub fn min_letters(password: &str, config: &PolicyConfig) -> CheckResult {
    if count_matching(password, is_letter) < config.min_letters as usize {
        return Some(Violation::new(ViolationKind::MinLetters, config.min_letters));
    }
    None
}

/// Checks that the password contains at least `min_lowercase_letters`
/// lowercase letters.
pub fn min_lowercase_letters(password: &str, config: &PolicyConfig) -> CheckResult {
    if count_matching(password, char::is_lowercase) < config.min_lowercase_letters as usize {
        return Some(Violation::new(
            ViolationKind::MinLowercaseLetters,
            config.min_lowercase_letters,
        ));
    }
    None
}

/// Checks that the password contains at least `min_uppercase_letters`
/// uppercase letters.
pub fn min_uppercase_letters(password: &str, config: &PolicyConfig) -> CheckResult {
    if count_matching(password, char::is_uppercase) < config.min_uppercase_letters as usize {
        return Some(Violation::new(
            ViolationKind::MinUppercaseLetters,
            config.min_uppercase_letters,
        ));
    }
    None
}

/// Checks that the password contains at least `min_numbers` numeric
/// characters.
pub fn min_numbers(password: &str, config: &PolicyConfig) -> CheckResult {
    if count_matching(password, is_number) < config.min_numbers as usize {
        return Some(Violation::new(ViolationKind::MinNumbers, config.min_numbers));
    }
    None
}

/// Checks that the password contains at least `min_special` characters
/// outside letters and numbers.
pub fn min_special(password: &str, config: &PolicyConfig) -> CheckResult {
    if count_matching(password, is_special) < config.min_special as usize {
        return Some(Violation::new(ViolationKind::MinSpecial, config.min_special));
    }
    None
}
