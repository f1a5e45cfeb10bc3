//! Class definition model for the classgen PHP class generator.
//!
//! These types are the hand-off point between a producer (for example a
//! database schema reader) and the code generator. They are passive data
//! holders with builder-style constructors.
//!
//! # Architecture
//!
//! ```text
//! producer → classgen-ir (ClassDefinition) → classgen-codegen (synthesize, render) → source text
//! ```

mod class;
mod member;
mod method;
mod statement;
mod value;

pub use class::ClassDefinition;
pub use classgen_core::{Abstractness, PhpType, Visibility};
pub use member::{ClassConstantDefinition, ClassPropertyDefinition, FunctionParameterDefinition};
pub use method::ClassMethodDefinition;
pub use statement::{Expr, Statement};
pub use value::ConstantValue;
