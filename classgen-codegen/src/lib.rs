//! Accessor synthesis and PHP source formatting for classgen.
//!
//! Turns a [`ClassDefinition`] into deterministic PHP source text in two
//! explicit phases:
//!
//! 1. [`synthesize_accessors`] consumes the definition and appends the
//!    getter and setter methods requested by property flags, yielding a
//!    [`SynthesizedClass`]. Consuming the definition makes the step one-shot.
//! 2. [`ClassFormatter::render`] renders a `SynthesizedClass` to text.
//!
//! [`ClassFormatter::format`] runs both.
//!
//! # Module Organization
//!
//! - [`builder`] - Indentation-aware text buffer ([`CodeBuilder`])
//! - [`literal`] - PHP literal export for constant values
//! - [`synthesize`] - Getter/setter synthesis
//! - [`format`] - The class formatter
//! - [`config`] - Formatter configuration
//! - [`validate`] - Optional model lints for producers
//!
//! # Example
//!
//! ```
//! use classgen_codegen::ClassFormatter;
//! use classgen_ir::{ClassDefinition, ClassPropertyDefinition, PhpType, Visibility};
//!
//! let class = ClassDefinition::new("App\\Models", "User").property(
//!     ClassPropertyDefinition::new("name", PhpType::String)
//!         .visibility(Visibility::Protected)
//!         .with_accessors(),
//! );
//!
//! let source = ClassFormatter::default().format(class).unwrap();
//! assert!(source.contains("public function setName(string $name): self"));
//! assert!(source.contains("public function getName(): string"));
//! ```

pub mod builder;
pub mod config;
pub mod error;
pub mod format;
pub mod literal;
pub mod synthesize;
pub mod validate;

pub use builder::CodeBuilder;
pub use config::FormatterConfig;
pub use error::{Error, Result};
pub use format::ClassFormatter;
pub use literal::export_literal;
pub use synthesize::{SynthesizedClass, getter_name, setter_name, synthesize_accessors};
pub use validate::{Diagnostic, Lint, Location, Severity, ValidationReport, Validator};
