//! Error types for accessor synthesis and configuration.

use miette::Diagnostic;
use thiserror::Error;

/// Result type for classgen-codegen operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("class '{class}' already declares a method named '{method}'")]
    #[diagnostic(
        code(classgen::duplicate_method),
        help(
            "remove the hand-written method or clear the accessor flag on the property it collides with"
        )
    )]
    DuplicateMethod { class: String, method: String },

    #[error("invalid formatter configuration")]
    #[diagnostic(code(classgen::config))]
    Config {
        #[source]
        source: toml::de::Error,
    },
}

impl Error {
    /// Create a duplicate method error.
    pub fn duplicate_method(class: impl Into<String>, method: impl Into<String>) -> Box<Self> {
        Box::new(Self::DuplicateMethod {
            class: class.into(),
            method: method.into(),
        })
    }

    /// Create a configuration error from a toml error.
    pub fn config(source: toml::de::Error) -> Box<Self> {
        Box::new(Self::Config { source })
    }
}
