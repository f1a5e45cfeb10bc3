//! Optional validation of class definitions.
//!
//! The formatter renders whatever it is given; producers that want to catch
//! model mistakes before rendering run a [`Validator`] first.
//!
//! ```
//! use classgen_codegen::Validator;
//! use classgen_ir::{ClassDefinition, ClassPropertyDefinition, PhpType};
//!
//! let class = ClassDefinition::new("App", "User")
//!     .property(ClassPropertyDefinition::new("id", PhpType::Int))
//!     .property(ClassPropertyDefinition::new("id", PhpType::Int));
//!
//! let report = Validator::new().validate(&class);
//! assert_eq!(report.error_count(), 1);
//! ```

mod diagnostic;
mod lint;
pub mod lints;

pub use diagnostic::{Diagnostic, Location, Severity};
pub use lint::Lint;
pub use lints::{
    AbstractBodyLint, AccessorCollisionLint, DuplicateMemberLint, InvalidIdentifierLint,
    MultilineStatementLint,
};

use classgen_ir::ClassDefinition;

/// Runs a configurable set of lints over a class definition.
pub struct Validator {
    lints: Vec<Box<dyn Lint>>,
}

impl Validator {
    /// Create a validator with the default lints.
    pub fn new() -> Self {
        Self {
            lints: vec![
                Box::new(InvalidIdentifierLint),
                Box::new(DuplicateMemberLint),
                Box::new(AccessorCollisionLint),
                Box::new(AbstractBodyLint),
                Box::new(MultilineStatementLint),
            ],
        }
    }

    /// Create a validator with no lints.
    pub fn empty() -> Self {
        Self { lints: Vec::new() }
    }

    /// Add a custom lint.
    pub fn with_lint(mut self, lint: impl Lint + 'static) -> Self {
        self.lints.push(Box::new(lint));
        self
    }

    /// Get the names of all lints that will be run.
    pub fn lint_names(&self) -> Vec<&'static str> {
        self.lints.iter().map(|l| l.name()).collect()
    }

    /// Run every lint and collect the diagnostics.
    pub fn validate(&self, class: &ClassDefinition) -> ValidationReport {
        let mut diagnostics = Vec::new();
        for lint in &self.lints {
            lint.check(class, &mut diagnostics);
        }

        tracing::debug!(
            class = %class.name,
            diagnostics = diagnostics.len(),
            "Validated class definition"
        );

        ValidationReport { diagnostics }
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}

/// Diagnostics collected by a [`Validator`] run.
#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    pub diagnostics: Vec<Diagnostic>,
}

impl ValidationReport {
    /// Returns true if any diagnostic is an error.
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_error())
    }

    /// Number of error diagnostics.
    pub fn error_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity.is_error())
            .count()
    }

    /// Number of warning diagnostics.
    pub fn warning_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity.is_warning())
            .count()
    }

    /// Returns true if no lint reported anything.
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}
