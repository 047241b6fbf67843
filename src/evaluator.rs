//! Password policy evaluator - main evaluation logic.

#[cfg(feature = "secrecy")]
use secrecy::{ExposeSecret, SecretString};

use crate::checks::{
    CheckResult, max_consecutive_identical, max_consecutive_whitespace, min_length, min_letters,
    min_lowercase_letters, min_numbers, min_special, min_uppercase_letters,
};
use crate::config::PolicyConfig;
use crate::message::{DefaultFormatter, MessageFormatter};
use crate::violation::PolicyEvaluation;

/// Evaluates candidate passwords against an immutable policy.
///
/// The evaluator holds no mutable state: every call works on a fresh
/// violation list, so one instance can be shared freely across threads.
#[derive(Debug, Clone, Default)]
pub struct PolicyEvaluator {
    config: PolicyConfig,
}

impl PolicyEvaluator {
    /// Creates an evaluator for the given policy.
    pub fn new(config: PolicyConfig) -> Self {
        Self { config }
    }

    /// The policy this evaluator enforces.
    pub fn config(&self) -> &PolicyConfig {
        &self.config
    }

    /// Runs every check against `password` and returns the result.
    ///
    /// Checks run in a fixed order, each against the original input, and
    /// every failed check contributes one violation; no check
    /// short-circuits another. Failing the policy is a normal outcome,
    /// not an error: any Unicode string, the empty string included,
    /// produces a well-defined result.
    pub fn evaluate(&self, password: &str) -> PolicyEvaluation {
        // Orchestrator: run the checks in their fixed reporting order.
        let checks: [fn(&str, &PolicyConfig) -> CheckResult; 8] = [
            min_length,
            min_letters,
            min_lowercase_letters,
            min_uppercase_letters,
            min_numbers,
            min_special,
            // TODO: add a check disallowing whitespace entirely
            max_consecutive_whitespace,
            max_consecutive_identical,
        ];

        let mut violations = Vec::new();
        for check in checks {
            if let Some(violation) = check(password, &self.config) {
                violations.push(violation);
            }
        }

        #[cfg(feature = "tracing")]
        if let Some(first) = violations.first() {
            tracing::debug!(
                "password failed {} policy check(s), first: {}",
                violations.len(),
                first.kind.key()
            );
        }

        PolicyEvaluation { violations }
    }

    /// Evaluates a password wrapped in a [`SecretString`].
    ///
    /// The secret is exposed only for the duration of the call and is
    /// never stored or logged.
    #[cfg(feature = "secrecy")]
    pub fn evaluate_secret(&self, password: &SecretString) -> PolicyEvaluation {
        self.evaluate(password.expose_secret())
    }

    /// Renders the first violation with the built-in English formatter.
    ///
    /// Returns `None` when the evaluation passed.
    pub fn primary_message(&self, evaluation: &PolicyEvaluation) -> Option<String> {
        self.primary_message_with(evaluation, &DefaultFormatter)
    }

    /// Renders the first violation with a host-supplied formatter.
    pub fn primary_message_with<F: MessageFormatter>(
        &self,
        evaluation: &PolicyEvaluation,
        formatter: &F,
    ) -> Option<String> {
        evaluation
            .primary()
            .map(|violation| violation.message(formatter))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::violation::ViolationKind;

    fn kinds(evaluation: &PolicyEvaluation) -> Vec<ViolationKind> {
        evaluation.violations.iter().map(|v| v.kind).collect()
    }

    #[test]
    fn test_evaluate_is_deterministic() {
        let evaluator = PolicyEvaluator::new(PolicyConfig::default());
        assert_eq!(evaluator.evaluate("a b c"), evaluator.evaluate("a b c"));
    }

    #[test]
    fn test_empty_password_fails_the_length_check_only() {
        let evaluator = PolicyEvaluator::new(PolicyConfig::default());
        let evaluation = evaluator.evaluate("");
        assert!(!evaluation.passed());
        assert_eq!(kinds(&evaluation), vec![ViolationKind::MinLength]);
        assert_eq!(evaluation.primary().map(|v| v.quantity), Some(6));
    }

    #[test]
    fn test_letters_and_numbers_policy_accepts_a_conforming_password() {
        let config = PolicyConfig {
            min_length: 8,
            min_letters: 1,
            min_numbers: 1,
            ..PolicyConfig::default()
        };
        let evaluator = PolicyEvaluator::new(config);
        let evaluation = evaluator.evaluate("abc12345");
        assert!(evaluation.passed());
        assert!(evaluation.violations.is_empty());
    }

    #[test]
    fn test_short_password_reports_length_first() {
        let config = PolicyConfig {
            min_length: 8,
            min_letters: 1,
            min_numbers: 1,
            ..PolicyConfig::default()
        };
        let evaluator = PolicyEvaluator::new(config);
        let evaluation = evaluator.evaluate("abc1234");
        assert!(!evaluation.passed());
        assert_eq!(evaluation.primary().map(|v| v.kind), Some(ViolationKind::MinLength));
        assert_eq!(
            evaluator.primary_message(&evaluation).as_deref(),
            Some("The password must be at least 8 characters.")
        );
    }

    #[test]
    fn test_special_character_requirement() {
        let config = PolicyConfig {
            min_special: 1,
            ..PolicyConfig::default()
        };
        let evaluator = PolicyEvaluator::new(config);
        assert!(!evaluator.evaluate("Password1").passed());
        assert!(evaluator.evaluate("Password1!").passed());
    }

    #[test]
    fn test_non_latin_letters_satisfy_the_letters_check() {
        let config = PolicyConfig {
            min_letters: 5,
            min_numbers: 1,
            ..PolicyConfig::default()
        };
        let evaluator = PolicyEvaluator::new(config);
        let evaluation = evaluator.evaluate("абвгдежзик");
        assert_eq!(kinds(&evaluation), vec![ViolationKind::MinNumbers]);
    }

    #[test]
    fn test_all_checks_run_and_report_in_order() {
        let config = PolicyConfig {
            min_length: 20,
            min_letters: 5,
            min_lowercase_letters: 3,
            min_uppercase_letters: 2,
            min_numbers: 3,
            min_special: 2,
            max_consecutive_whitespace: Some(0),
            max_consecutive_identical: Some(1),
        };
        let evaluator = PolicyEvaluator::new(config);
        let evaluation = evaluator.evaluate("aa b");
        assert_eq!(
            kinds(&evaluation),
            vec![
                ViolationKind::MinLength,
                ViolationKind::MinLetters,
                ViolationKind::MinUppercaseLetters,
                ViolationKind::MinNumbers,
                ViolationKind::MinSpecial,
                ViolationKind::MaxConsecutiveWhitespace,
                ViolationKind::MaxConsecutiveIdentical,
            ]
        );
    }

    #[test]
    fn test_violations_carry_the_configured_thresholds() {
        let config = PolicyConfig {
            min_length: 12,
            min_uppercase_letters: 2,
            ..PolicyConfig::default()
        };
        let evaluator = PolicyEvaluator::new(config);
        let evaluation = evaluator.evaluate("lowercase");
        let quantities: Vec<(ViolationKind, u32)> = evaluation
            .violations
            .iter()
            .map(|v| (v.kind, v.quantity))
            .collect();
        assert_eq!(
            quantities,
            vec![
                (ViolationKind::MinLength, 12),
                (ViolationKind::MinUppercaseLetters, 2),
            ]
        );
    }

    #[test]
    fn test_whitespace_boundary_through_the_evaluator() {
        let evaluator = PolicyEvaluator::new(PolicyConfig::default());
        assert!(evaluator.evaluate("ab  cd").passed());
        let evaluation = evaluator.evaluate("ab   cd");
        assert_eq!(kinds(&evaluation), vec![ViolationKind::MaxConsecutiveWhitespace]);
    }

    #[test]
    fn test_identical_boundary_through_the_evaluator() {
        let config = PolicyConfig {
            max_consecutive_identical: Some(2),
            ..PolicyConfig::default()
        };
        let evaluator = PolicyEvaluator::new(config);
        assert!(evaluator.evaluate("aabbcc").passed());
        let evaluation = evaluator.evaluate("aaabcc");
        assert_eq!(kinds(&evaluation), vec![ViolationKind::MaxConsecutiveIdentical]);
    }

    #[test]
    fn test_primary_message_of_a_passing_evaluation_is_none() {
        let evaluator = PolicyEvaluator::new(PolicyConfig::default());
        let evaluation = evaluator.evaluate("long enough");
        assert!(evaluation.passed());
        assert_eq!(evaluator.primary_message(&evaluation), None);
    }

    #[test]
    fn test_default_evaluator_uses_the_default_policy() {
        let evaluator = PolicyEvaluator::default();
        assert_eq!(evaluator.config(), &PolicyConfig::default());
    }

    #[test]
    fn test_one_evaluator_shared_across_threads() {
        let evaluator = PolicyEvaluator::new(PolicyConfig::new().min_length(4));
        std::thread::scope(|scope| {
            let strong = scope.spawn(|| evaluator.evaluate("abcd1234").passed());
            let weak = scope.spawn(|| evaluator.evaluate("abc").passed());
            assert!(strong.join().expect("thread panicked"));
            assert!(!weak.join().expect("thread panicked"));
        });
    }
}
