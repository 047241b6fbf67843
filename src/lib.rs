//! Password policy evaluation library
//!
//! This library checks candidate passwords against a configurable policy
//! and reports every violated rule as structured data: a stable message
//! key, a pluralization quantity and named parameters. Rendering is
//! delegated to a [`MessageFormatter`], so hosts keep full control over
//! localization; a plain English [`DefaultFormatter`] is built in.
//!
//! # Features
//!
//! - `secrecy` (default): Accepts passwords wrapped in `SecretString`
//! - `serde`: Serialization support for config and violation types
//! - `tracing`: Enables logging via tracing crate
//!
//! # Example
//!
//! ```rust
//! use pwd_policy::{PolicyConfig, PolicyEvaluator};
//!
//! let config = PolicyConfig::new().min_length(8).min_numbers(1);
//! let evaluator = PolicyEvaluator::new(config);
//!
//! assert!(evaluator.evaluate("abc12345").passed());
//!
//! let rejected = evaluator.evaluate("abc1234");
//! assert!(!rejected.passed());
//! assert_eq!(
//!     evaluator.primary_message(&rejected).as_deref(),
//!     Some("The password must be at least 8 characters."),
//! );
//! ```

// Internal modules
mod checks;
mod config;
mod evaluator;
mod message;
mod violation;

// Public API
pub use config::PolicyConfig;
pub use evaluator::PolicyEvaluator;
pub use message::{DefaultFormatter, MessageFormatter, MessageTemplate, TemplateError};
pub use violation::{PolicyEvaluation, Violation, ViolationKind};
