//! Shared test helpers.

pub mod document_fixtures;
pub mod graph_assertions;
