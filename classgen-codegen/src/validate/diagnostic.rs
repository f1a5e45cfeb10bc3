//! Diagnostic types for model validation.

use serde::Serialize;

/// Severity level for a diagnostic message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// The definition would render broken or ambiguous source.
    Error,
    /// The definition renders, but probably not as intended.
    Warning,
}

impl Severity {
    pub fn is_error(&self) -> bool {
        matches!(self, Severity::Error)
    }

    pub fn is_warning(&self) -> bool {
        matches!(self, Severity::Warning)
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
        })
    }
}

/// The part of a class definition a diagnostic points at.
///
/// Displays as a dotted path into the definition, e.g.
/// `methods.rename.parameters.name` or `methods.toArray.body.1`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "member", rename_all = "snake_case")]
pub enum Location {
    Namespace,
    ClassName,
    Constant { name: String },
    Property { name: String },
    Method { name: String },
    Parameter { method: String, name: String },
    Statement { method: String, index: usize },
}

impl Location {
    pub fn constant(name: impl Into<String>) -> Self {
        Self::Constant { name: name.into() }
    }

    pub fn property(name: impl Into<String>) -> Self {
        Self::Property { name: name.into() }
    }

    pub fn method(name: impl Into<String>) -> Self {
        Self::Method { name: name.into() }
    }

    pub fn parameter(method: impl Into<String>, name: impl Into<String>) -> Self {
        Self::Parameter {
            method: method.into(),
            name: name.into(),
        }
    }

    pub fn statement(method: impl Into<String>, index: usize) -> Self {
        Self::Statement {
            method: method.into(),
            index,
        }
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Location::Namespace => f.write_str("namespace"),
            Location::ClassName => f.write_str("name"),
            Location::Constant { name } => write!(f, "constants.{}", name),
            Location::Property { name } => write!(f, "properties.{}", name),
            Location::Method { name } => write!(f, "methods.{}", name),
            Location::Parameter { method, name } => {
                write!(f, "methods.{}.parameters.{}", method, name)
            }
            Location::Statement { method, index } => write!(f, "methods.{}.body.{}", method, index),
        }
    }
}

/// A finding reported by a lint against one part of a class definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub severity: Severity,
    /// Name of the lint that reported it.
    pub lint: &'static str,
    pub location: Location,
    pub message: String,
}

impl Diagnostic {
    pub fn error(lint: &'static str, location: Location, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            lint,
            location,
            message: message.into(),
        }
    }

    pub fn warning(lint: &'static str, location: Location, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            ..Self::error(lint, location, message)
        }
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}[{}] {}: {}",
            self.severity, self.lint, self.location, self.message
        )
    }
}
