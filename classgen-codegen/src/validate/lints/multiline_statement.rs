//! Lint for statements spanning several lines.

use classgen_ir::ClassDefinition;

use super::super::{Diagnostic, Lint, Location};

/// Lint that warns about statements containing line breaks.
///
/// The formatter indents only the first line of a statement.
pub struct MultilineStatementLint;

impl Lint for MultilineStatementLint {
    fn name(&self) -> &'static str {
        "multiline-statement"
    }

    fn check(&self, class: &ClassDefinition, diagnostics: &mut Vec<Diagnostic>) {
        for method in &class.methods {
            for (index, _) in method
                .body
                .iter()
                .enumerate()
                .filter(|(_, stmt)| stmt.is_multiline())
            {
                diagnostics.push(
                    Diagnostic::warning(
                        self.name(),
                        Location::statement(&method.name, index),
                        format!(
                            "statement {} of method '{}' spans several lines",
                            index, method.name
                        ),
                    ),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use classgen_ir::{ClassMethodDefinition, PhpType, Statement};

    use super::*;

    #[test]
    fn test_multiline_raw_statement() {
        let class = ClassDefinition::new("App", "User").method(
            ClassMethodDefinition::new("toArray", PhpType::Array)
                .statement(Statement::raw("$data = [];"))
                .statement(Statement::raw("return [\n    'id' => $this->id,\n];")),
        );

        let mut diagnostics = Vec::new();
        MultilineStatementLint.check(&class, &mut diagnostics);

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].location, Location::statement("toArray", 1));
    }
}
