//! Validation and correction.
//!
//! - [`diagnostics`]: diagnostic types, stable codes, and the [`Reporter`]
//! - [`class_rules`]: local rules run on each class before it is emitted
//! - [`property_rules`]: the global rule run on the decoded graph
//!
//! Detection never depends on configuration. Whether a violation is repaired
//! depends on the `correct` option; whether it is reported depends on `silent`.

pub mod class_rules;
pub mod diagnostics;
pub mod property_rules;

pub use class_rules::{ClassRecord, Order, check_class};
pub use diagnostics::{Diagnostic, Reporter, Severity, codes};
pub use property_rules::{StereotypedProperty, check_property_stereotypes};
