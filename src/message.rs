//! Violation message templates and rendering.
//!
//! The evaluator never formats strings itself: every violation carries a
//! message key, a quantity and named parameters, and rendering is
//! delegated to a [`MessageFormatter`]. The built-in [`DefaultFormatter`]
//! selects the singular form for a quantity of exactly one and the plural
//! form otherwise, then substitutes the `:name` placeholders.

use std::borrow::Cow;
use std::str::FromStr;

use thiserror::Error;

use crate::violation::{Violation, ViolationKind};

/// A message in singular and plural form.
///
/// Placeholders use the `:name` syntax (`:min`, `:max`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageTemplate {
    /// Form used when the quantity is exactly one.
    pub singular: Cow<'static, str>,
    /// Form used for any other quantity.
    pub plural: Cow<'static, str>,
}

impl MessageTemplate {
    /// Creates a template from its two forms.
    pub fn new(
        singular: impl Into<Cow<'static, str>>,
        plural: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            singular: singular.into(),
            plural: plural.into(),
        }
    }

    const fn from_static(singular: &'static str, plural: &'static str) -> Self {
        Self {
            singular: Cow::Borrowed(singular),
            plural: Cow::Borrowed(plural),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    #[error("message template is empty")]
    Empty,
    #[error("message template has {0} forms, at most two are supported")]
    UnsupportedForm(usize),
}

impl FromStr for MessageTemplate {
    type Err = TemplateError;

    /// Parses the `singular|plural` translation-string syntax.
    ///
    /// A template without a `|` separator has a single form used for
    /// every quantity. Range syntax with three or more forms is not
    /// supported.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Err(TemplateError::Empty);
        }
        let forms: Vec<&str> = s.split('|').collect();
        match forms.as_slice() {
            [single] => Ok(Self::new(single.to_string(), single.to_string())),
            [singular, plural] => Ok(Self::new(singular.to_string(), plural.to_string())),
            parts => Err(TemplateError::UnsupportedForm(parts.len())),
        }
    }
}

/// Renders violation messages.
///
/// Hosts implement this to plug locale-aware pluralization and parameter
/// substitution into the evaluator; the template passed in is the
/// built-in default, which a localizing implementation is free to ignore
/// in favour of its own catalog.
pub trait MessageFormatter {
    /// Renders `template` for `quantity`, substituting `params`.
    ///
    /// A quantity of one selects the singular form, anything else the
    /// plural one. `params` holds the `:name` placeholder values.
    fn format(&self, template: &MessageTemplate, quantity: u32, params: &[(&str, u32)]) -> String;
}

/// Plain English formatter used when the host does not supply one.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultFormatter;

impl MessageFormatter for DefaultFormatter {
    fn format(&self, template: &MessageTemplate, quantity: u32, params: &[(&str, u32)]) -> String {
        let form = if quantity == 1 {
            &template.singular
        } else {
            &template.plural
        };
        let mut message = form.to_string();
        for (name, value) in params {
            message = message.replace(&format!(":{name}"), &value.to_string());
        }
        message
    }
}

static MIN_LENGTH_TEMPLATE: MessageTemplate = MessageTemplate::from_static(
    "The password must be at least :min characters.",
    "The password must be at least :min characters.",
);

static MIN_LETTERS_TEMPLATE: MessageTemplate = MessageTemplate::from_static(
    "The password must contain letters.",
    "The password must contain at least :min letters.",
);

static MIN_LOWERCASE_LETTERS_TEMPLATE: MessageTemplate = MessageTemplate::from_static(
    "The password must contain lowercase letters.",
    "The password must contain at least :min lowercase letters.",
);

static MIN_UPPERCASE_LETTERS_TEMPLATE: MessageTemplate = MessageTemplate::from_static(
    "The password must contain uppercase letters.",
    "The password must contain at least :min uppercase letters.",
);

static MIN_NUMBERS_TEMPLATE: MessageTemplate = MessageTemplate::from_static(
    "The password must contain numbers.",
    "The password must contain at least :min numbers.",
);

static MIN_SPECIAL_TEMPLATE: MessageTemplate = MessageTemplate::from_static(
    "The password must contain special characters.",
    "The password must contain at least :min special characters.",
);

static MAX_CONSECUTIVE_WHITESPACE_TEMPLATE: MessageTemplate = MessageTemplate::from_static(
    "The password can not contain more than :max consecutive space.",
    "The password can not contain more than :max consecutive spaces.",
);

static MAX_CONSECUTIVE_IDENTICAL_TEMPLATE: MessageTemplate = MessageTemplate::from_static(
    "The password can not contain more than :max consecutive identical character.",
    "The password can not contain more than :max consecutive identical characters.",
);

impl ViolationKind {
    /// The built-in English template for this rule.
    pub fn default_template(self) -> &'static MessageTemplate {
        match self {
            Self::MinLength => &MIN_LENGTH_TEMPLATE,
            Self::MinLetters => &MIN_LETTERS_TEMPLATE,
            Self::MinLowercaseLetters => &MIN_LOWERCASE_LETTERS_TEMPLATE,
            Self::MinUppercaseLetters => &MIN_UPPERCASE_LETTERS_TEMPLATE,
            Self::MinNumbers => &MIN_NUMBERS_TEMPLATE,
            Self::MinSpecial => &MIN_SPECIAL_TEMPLATE,
            Self::MaxConsecutiveWhitespace => &MAX_CONSECUTIVE_WHITESPACE_TEMPLATE,
            Self::MaxConsecutiveIdentical => &MAX_CONSECUTIVE_IDENTICAL_TEMPLATE,
        }
    }
}

impl Violation {
    /// Renders this violation with `formatter` using the built-in
    /// template of its rule.
    pub fn message<F: MessageFormatter>(&self, formatter: &F) -> String {
        formatter.format(self.kind.default_template(), self.quantity, &self.params())
    }
}
