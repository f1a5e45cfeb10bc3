//! Constant, property and parameter definitions.

use classgen_core::{PhpType, Visibility};
use serde::{Deserialize, Serialize};

use crate::ConstantValue;

/// A class constant: `public const NAME = 'value';`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassConstantDefinition {
    /// Constant name.
    pub name: String,
    /// Literal value.
    pub value: ConstantValue,
    /// Visibility modifier.
    #[serde(default)]
    pub visibility: Visibility,
}

impl ClassConstantDefinition {
    /// Create a new public constant.
    pub fn new(name: impl Into<String>, value: impl Into<ConstantValue>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            visibility: Visibility::Public,
        }
    }

    /// Set visibility.
    pub fn visibility(mut self, vis: Visibility) -> Self {
        self.visibility = vis;
        self
    }
}

/// A typed class property: `protected string $name;`.
///
/// The accessor flags tell the accessor synthesizer which methods to derive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassPropertyDefinition {
    /// Variable name, without the `$` sigil.
    pub name: String,
    /// Declared type.
    #[serde(rename = "type")]
    pub ty: PhpType,
    /// Visibility modifier.
    #[serde(default)]
    pub visibility: Visibility,
    /// Derive a `get<Name>()` method.
    #[serde(default)]
    pub has_getter: bool,
    /// Derive a fluent `set<Name>()` method.
    #[serde(default)]
    pub has_setter: bool,
}

impl ClassPropertyDefinition {
    /// Create a new public property without accessors.
    pub fn new(name: impl Into<String>, ty: PhpType) -> Self {
        Self {
            name: name.into(),
            ty,
            visibility: Visibility::Public,
            has_getter: false,
            has_setter: false,
        }
    }

    /// Set visibility.
    pub fn visibility(mut self, vis: Visibility) -> Self {
        self.visibility = vis;
        self
    }

    /// Request a getter.
    pub fn with_getter(mut self) -> Self {
        self.has_getter = true;
        self
    }

    /// Request a setter.
    pub fn with_setter(mut self) -> Self {
        self.has_setter = true;
        self
    }

    /// Request both a getter and a setter.
    pub fn with_accessors(self) -> Self {
        self.with_getter().with_setter()
    }

    /// Check if any accessor is requested.
    pub fn has_accessors(&self) -> bool {
        self.has_getter || self.has_setter
    }
}

/// A function parameter: `string $name`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FunctionParameterDefinition {
    /// Parameter name, without the `$` sigil.
    pub name: String,
    /// Declared type.
    #[serde(rename = "type")]
    pub ty: PhpType,
}

impl FunctionParameterDefinition {
    pub fn new(name: impl Into<String>, ty: PhpType) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}
