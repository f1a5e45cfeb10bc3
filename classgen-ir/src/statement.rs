//! Method body statements.
//!
//! Statements are a small closed set. Each renders to exactly one line of
//! source through its [`Display`](std::fmt::Display) impl; the code
//! generator adds the indentation.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An expression usable inside a [`Statement`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Expr {
    /// `$this`
    This,
    /// A local variable: `$name`.
    Variable(String),
    /// An instance field: `$this->name`.
    Property(String),
    /// Pre-formatted expression text, emitted verbatim.
    Raw(String),
}

impl Expr {
    pub fn variable(name: impl Into<String>) -> Self {
        Self::Variable(name.into())
    }

    pub fn property(name: impl Into<String>) -> Self {
        Self::Property(name.into())
    }

    pub fn raw(code: impl Into<String>) -> Self {
        Self::Raw(code.into())
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::This => f.write_str("$this"),
            Self::Variable(name) => write!(f, "${}", name),
            Self::Property(name) => write!(f, "$this->{}", name),
            Self::Raw(code) => f.write_str(code),
        }
    }
}

/// A single statement in a method body.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Statement {
    /// Pre-formatted statement text, emitted verbatim.
    ///
    /// Expected to be a single line including its terminating `;`.
    Raw(String),
    /// `<target> = <value>;`
    Assign { target: Expr, value: Expr },
    /// `return <expr>;` or `return;`
    Return(Option<Expr>),
}

impl Statement {
    /// Create a raw statement.
    pub fn raw(code: impl Into<String>) -> Self {
        Self::Raw(code.into())
    }

    /// Create an assignment statement.
    pub fn assign(target: Expr, value: Expr) -> Self {
        Self::Assign { target, value }
    }

    /// Create a `return <expr>;` statement.
    pub fn returns(expr: Expr) -> Self {
        Self::Return(Some(expr))
    }

    /// Create a bare `return;` statement.
    pub fn return_void() -> Self {
        Self::Return(None)
    }

    /// Render the statement as one line of source, without indentation.
    pub fn to_php_code(&self) -> String {
        self.to_string()
    }

    /// Check if the rendered statement would span more than one line.
    pub fn is_multiline(&self) -> bool {
        match self {
            Self::Raw(code) => code.contains('\n'),
            Self::Assign { target, value } => {
                is_multiline_expr(target) || is_multiline_expr(value)
            }
            Self::Return(expr) => expr.as_ref().is_some_and(is_multiline_expr),
        }
    }
}

fn is_multiline_expr(expr: &Expr) -> bool {
    matches!(expr, Expr::Raw(code) if code.contains('\n'))
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Raw(code) => f.write_str(code),
            Self::Assign { target, value } => write!(f, "{} = {};", target, value),
            Self::Return(Some(expr)) => write!(f, "return {};", expr),
            Self::Return(None) => f.write_str("return;"),
        }
    }
}
