//! Rendering of parsed trees back to text
//!
//! This module provides Display implementations for the trees in
//! [`crate::ast`]; re-parsing the output yields the same tree.

pub mod brackets;
pub mod expression;
pub mod json;

pub use brackets::stringify_forest;
