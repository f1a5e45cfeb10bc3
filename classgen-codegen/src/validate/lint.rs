//! Lint trait for class definition validation.

use classgen_ir::ClassDefinition;

use super::Diagnostic;

/// A lint that checks a class definition for issues.
pub trait Lint: Send + Sync {
    /// The name of this lint.
    fn name(&self) -> &'static str;

    /// Check the definition and add any diagnostics.
    fn check(&self, class: &ClassDefinition, diagnostics: &mut Vec<Diagnostic>);
}
