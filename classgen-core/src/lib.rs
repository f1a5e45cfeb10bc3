//! Core utilities and types for the classgen PHP class generator.
//!
//! This crate provides the closed modifier and type enumerations, the
//! indentation unit and the string utilities shared across the classgen
//! workspace.

mod indent;
mod types;
mod utils;

pub use indent::Indent;
// Modifier and type enumerations
pub use types::{Abstractness, PhpType, Visibility};
// String utilities
pub use utils::{is_identifier, to_studly_case};
