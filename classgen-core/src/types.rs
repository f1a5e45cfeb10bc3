//! Closed modifier and type enumerations.
//!
//! Every value maps to exactly one canonical token through an exhaustive
//! `match`, so adding a variant without a token is a build error rather
//! than a runtime condition.

use std::{borrow::Cow, fmt};

use serde::{Deserialize, Serialize};

/// Member visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    #[default]
    Public,
    Protected,
    Private,
}

impl Visibility {
    /// The reserved word emitted for this visibility.
    pub fn as_reserved_word(&self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Protected => "protected",
            Self::Private => "private",
        }
    }

    /// Check if this is public visibility.
    pub fn is_public(&self) -> bool {
        matches!(self, Self::Public)
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_reserved_word())
    }
}

/// Whether a method is abstract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Abstractness {
    Abstract,
    #[default]
    Concrete,
}

impl Abstractness {
    /// Returns true for [`Abstractness::Abstract`].
    pub fn is_abstract(&self) -> bool {
        matches!(self, Self::Abstract)
    }

    /// The reserved word emitted for this modifier, if any.
    ///
    /// Concrete methods carry no keyword.
    pub fn as_reserved_word(&self) -> Option<&'static str> {
        match self {
            Self::Abstract => Some("abstract"),
            Self::Concrete => None,
        }
    }
}

/// A declared PHP type.
///
/// Used for property types, parameter types and return types.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhpType {
    String,
    Int,
    Float,
    Bool,
    Array,
    Object,
    Mixed,
    Callable,
    Iterable,
    Void,
    /// Late static binding return type: `static`.
    Static,
    /// The enclosing class: `self`.
    #[serde(rename = "self")]
    SelfType,
    /// A class or interface name, rendered verbatim (e.g. `\DateTimeInterface`).
    Class(String),
    /// A nullable type: `?T`.
    Nullable(Box<PhpType>),
}

impl PhpType {
    /// The return type of synthesized fluent setters.
    pub fn fluent_return() -> Self {
        Self::SelfType
    }

    /// Create a class type reference.
    pub fn class(name: impl Into<String>) -> Self {
        Self::Class(name.into())
    }

    /// Wrap a type as nullable.
    ///
    /// Already nullable types are returned unchanged so the `?` prefix is
    /// never doubled.
    pub fn nullable(inner: PhpType) -> Self {
        match inner {
            Self::Nullable(_) => inner,
            other => Self::Nullable(Box::new(other)),
        }
    }

    /// Check if this type is nullable.
    pub fn is_nullable(&self) -> bool {
        matches!(self, Self::Nullable(_))
    }

    /// The token used in declarations (`string`, `?int`, `self`, ...).
    pub fn to_declaration_type(&self) -> Cow<'_, str> {
        match self {
            Self::String => Cow::Borrowed("string"),
            Self::Int => Cow::Borrowed("int"),
            Self::Float => Cow::Borrowed("float"),
            Self::Bool => Cow::Borrowed("bool"),
            Self::Array => Cow::Borrowed("array"),
            Self::Object => Cow::Borrowed("object"),
            Self::Mixed => Cow::Borrowed("mixed"),
            Self::Callable => Cow::Borrowed("callable"),
            Self::Iterable => Cow::Borrowed("iterable"),
            Self::Void => Cow::Borrowed("void"),
            Self::Static => Cow::Borrowed("static"),
            Self::SelfType => Cow::Borrowed("self"),
            Self::Class(name) => Cow::Borrowed(name.as_str()),
            Self::Nullable(inner) => match inner.as_ref() {
                Self::Nullable(_) => inner.to_declaration_type(),
                other => Cow::Owned(format!("?{}", other.to_declaration_type())),
            },
        }
    }
}

impl fmt::Display for PhpType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_declaration_type())
    }
}
