//! Lint for duplicate member detection.

use classgen_ir::ClassDefinition;
use indexmap::IndexSet;

use super::super::{Diagnostic, Lint, Location};

/// Lint that errors on constants, properties or methods declared twice.
///
/// Method names are compared ignoring ASCII case, as PHP resolves them.
pub struct DuplicateMemberLint;

impl Lint for DuplicateMemberLint {
    fn name(&self) -> &'static str {
        "duplicate-member"
    }

    fn check(&self, class: &ClassDefinition, diagnostics: &mut Vec<Diagnostic>) {
        let mut report = |kind: &str, location: Location, name: &str| {
            diagnostics.push(Diagnostic::error(
                self.name(),
                location,
                format!("duplicate {} '{}'", kind, name),
            ));
        };

        for name in duplicates(class.constants.iter().map(|c| c.name.as_str()), str::to_string) {
            report("constant", Location::constant(name), name);
        }
        for name in duplicates(class.properties.iter().map(|p| p.name.as_str()), str::to_string) {
            report("property", Location::property(name), name);
        }
        for name in duplicates(
            class.methods.iter().map(|m| m.name.as_str()),
            str::to_ascii_lowercase,
        ) {
            report("method", Location::method(name), name);
        }
    }
}

/// Names whose folded key was already seen, each key reported once at its
/// first repeat.
fn duplicates<'a>(
    names: impl Iterator<Item = &'a str>,
    fold: impl Fn(&str) -> String,
) -> Vec<&'a str> {
    let mut seen = IndexSet::new();
    let mut reported = IndexSet::new();

    names
        .filter(|name| {
            let key = fold(name);
            !seen.insert(key.clone()) && reported.insert(key)
        })
        .collect()
}
