//! Lint for accessors that would collide with declared methods.

use classgen_ir::ClassDefinition;

use super::super::{Diagnostic, Lint, Location};
use crate::synthesize::{getter_name, setter_name};

/// Lint that errors when a flagged property's accessor name is already
/// declared as a method.
///
/// Catches ahead of time what [`synthesize_accessors`](crate::synthesize_accessors)
/// would reject.
pub struct AccessorCollisionLint;

impl Lint for AccessorCollisionLint {
    fn name(&self) -> &'static str {
        "accessor-collision"
    }

    fn check(&self, class: &ClassDefinition, diagnostics: &mut Vec<Diagnostic>) {
        for property in &class.properties {
            let wanted = [
                (property.has_setter, setter_name(&property.name)),
                (property.has_getter, getter_name(&property.name)),
            ];

            for (_, accessor) in wanted.iter().filter(|(flagged, _)| *flagged) {
                let declared = class
                    .methods
                    .iter()
                    .any(|m| m.name.eq_ignore_ascii_case(accessor));
                if declared {
                    diagnostics.push(
                        Diagnostic::error(
                            self.name(),
                            Location::property(&property.name),
                            format!(
                                "property '{}' requests '{}', which is already declared",
                                property.name, accessor
                            ),
                        ),
                    );
                }
            }
        }
    }
}
