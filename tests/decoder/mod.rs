//! Decoder tests
//!
//! End-to-end decodes of OntoUML documents:
//! - Class and Property attributes, defaults, and cardinalities
//! - Relations, generalizations, and generalization sets
//! - Projects, packages, diagrams, views, and shapes
//! - The model-only filter
//! - Entry points, configuration, and determinism

pub mod tests_model_only;
pub mod tests_property;
