//! Getter/setter synthesis.
//!
//! Derives accessor methods from property flags and appends them to the
//! class. Synthesis consumes the [`ClassDefinition`] and returns a
//! [`SynthesizedClass`], which is the only input the formatter renders, so
//! accessors are appended exactly once per definition.

use std::ops::Deref;

use classgen_core::to_studly_case;
use classgen_ir::{
    ClassDefinition, ClassMethodDefinition, ClassPropertyDefinition, Expr,
    FunctionParameterDefinition, PhpType, Statement,
};

use crate::{Error, Result};

/// A class definition whose accessors have been synthesized.
///
/// Can only be obtained from [`synthesize_accessors`].
#[derive(Debug, Clone, PartialEq)]
pub struct SynthesizedClass {
    class: ClassDefinition,
    accessor_count: usize,
}

impl SynthesizedClass {
    /// The augmented class definition.
    pub fn class(&self) -> &ClassDefinition {
        &self.class
    }

    /// Number of methods appended by synthesis.
    pub fn accessor_count(&self) -> usize {
        self.accessor_count
    }

    /// Give back the augmented definition.
    ///
    /// Synthesizing the returned definition again fails with
    /// [`Error::DuplicateMethod`] for the first flagged property.
    pub fn into_inner(self) -> ClassDefinition {
        self.class
    }
}

impl Deref for SynthesizedClass {
    type Target = ClassDefinition;

    fn deref(&self) -> &Self::Target {
        &self.class
    }
}

/// Name of the setter synthesized for a property (`first_name` -> `setFirstName`).
pub fn setter_name(property: &str) -> String {
    format!("set{}", to_studly_case(property))
}

/// Name of the getter synthesized for a property (`first_name` -> `getFirstName`).
pub fn getter_name(property: &str) -> String {
    format!("get{}", to_studly_case(property))
}

/// Append getters and setters for every flagged property.
///
/// Methods are appended in property order; for each property the setter
/// comes before the getter. Fails if a synthesized name is already declared
/// on the class or was synthesized for an earlier property, compared
/// case-insensitively.
pub fn synthesize_accessors(mut class: ClassDefinition) -> Result<SynthesizedClass> {
    let accessors: Vec<ClassMethodDefinition> = class
        .properties
        .iter()
        .flat_map(|property| {
            let setter = property.has_setter.then(|| setter_for(property));
            let getter = property.has_getter.then(|| getter_for(property));
            setter.into_iter().chain(getter)
        })
        .collect();

    let accessor_count = accessors.len();
    for method in accessors {
        // PHP method names are case-insensitive.
        let taken = class
            .methods
            .iter()
            .any(|m| m.name.eq_ignore_ascii_case(&method.name));
        if taken {
            return Err(Error::duplicate_method(&class.name, &method.name));
        }
        tracing::debug!(class = %class.name, method = %method.name, "Synthesized accessor");
        class.add_method(method);
    }

    Ok(SynthesizedClass {
        class,
        accessor_count,
    })
}

/// `public function setName(string $name): self` assigning the field and
/// returning `$this`.
fn setter_for(property: &ClassPropertyDefinition) -> ClassMethodDefinition {
    ClassMethodDefinition::new(setter_name(&property.name), PhpType::fluent_return())
        .parameter(FunctionParameterDefinition::new(
            property.name.clone(),
            property.ty.clone(),
        ))
        .statement(Statement::assign(
            Expr::property(property.name.clone()),
            Expr::variable(property.name.clone()),
        ))
        .statement(Statement::returns(Expr::This))
}

/// `public function getName(): string` returning the field.
fn getter_for(property: &ClassPropertyDefinition) -> ClassMethodDefinition {
    ClassMethodDefinition::new(getter_name(&property.name), property.ty.clone())
        .statement(Statement::returns(Expr::property(property.name.clone())))
}
