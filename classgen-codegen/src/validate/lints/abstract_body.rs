//! Lint for abstract methods with a body.

use classgen_ir::ClassDefinition;

use super::super::{Diagnostic, Lint, Location};

/// Lint that warns when an abstract method carries body statements.
pub struct AbstractBodyLint;

impl Lint for AbstractBodyLint {
    fn name(&self) -> &'static str {
        "abstract-body"
    }

    fn check(&self, class: &ClassDefinition, diagnostics: &mut Vec<Diagnostic>) {
        for method in class.methods.iter().filter(|m| m.is_abstract() && m.has_body()) {
            diagnostics.push(
                Diagnostic::warning(
                    self.name(),
                    Location::method(&method.name),
                    format!(
                        "abstract method '{}' has {} body statement(s)",
                        method.name,
                        method.body.len()
                    ),
                ),
            );
        }
    }
}
