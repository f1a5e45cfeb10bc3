//! Lint for names that are not valid PHP identifiers.

use classgen_core::is_identifier;
use classgen_ir::ClassDefinition;

use super::super::{Diagnostic, Lint, Location};

/// Lint that errors on class, namespace, member and parameter names that
/// PHP would not parse.
pub struct InvalidIdentifierLint;

impl InvalidIdentifierLint {
    fn report(
        &self,
        kind: &str,
        name: &str,
        location: Location,
        diagnostics: &mut Vec<Diagnostic>,
    ) {
        if !is_identifier(name) {
            diagnostics.push(Diagnostic::error(
                self.name(),
                location,
                format!("invalid {} name '{}'", kind, name),
            ));
        }
    }
}

impl Lint for InvalidIdentifierLint {
    fn name(&self) -> &'static str {
        "invalid-identifier"
    }

    fn check(&self, class: &ClassDefinition, diagnostics: &mut Vec<Diagnostic>) {
        if !class.is_global_namespace() && !class.namespace.split('\\').all(is_identifier) {
            diagnostics.push(Diagnostic::error(
                self.name(),
                Location::Namespace,
                format!("invalid namespace '{}'", class.namespace),
            ));
        }
        self.report("class", &class.name, Location::ClassName, diagnostics);

        for constant in &class.constants {
            let location = Location::constant(&constant.name);
            self.report("constant", &constant.name, location, diagnostics);
        }
        for property in &class.properties {
            let location = Location::property(&property.name);
            self.report("property", &property.name, location, diagnostics);
        }
        for method in &class.methods {
            self.report("method", &method.name, Location::method(&method.name), diagnostics);
            for param in &method.parameters {
                let location = Location::parameter(&method.name, &param.name);
                self.report("parameter", &param.name, location, diagnostics);
            }
        }
    }
}
