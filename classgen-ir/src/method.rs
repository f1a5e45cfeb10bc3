//! Method definitions.

use classgen_core::{Abstractness, PhpType, Visibility};
use serde::{Deserialize, Serialize};

use crate::{FunctionParameterDefinition, Statement};

fn default_visibility() -> Option<Visibility> {
    Some(Visibility::Public)
}

/// A class method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassMethodDefinition {
    /// Function name.
    pub name: String,
    /// Declared return type.
    pub return_type: PhpType,
    /// Parameters, in declaration order.
    #[serde(default)]
    pub parameters: Vec<FunctionParameterDefinition>,
    /// Visibility modifier. `None` emits no visibility keyword.
    #[serde(default = "default_visibility")]
    pub visibility: Option<Visibility>,
    /// Abstract or concrete.
    #[serde(default)]
    pub abstractness: Abstractness,
    /// Body statements, one per line.
    #[serde(default)]
    pub body: Vec<Statement>,
}

impl ClassMethodDefinition {
    /// Create a new public, concrete method with no parameters and an empty body.
    pub fn new(name: impl Into<String>, return_type: PhpType) -> Self {
        Self {
            name: name.into(),
            return_type,
            parameters: Vec::new(),
            visibility: Some(Visibility::Public),
            abstractness: Abstractness::Concrete,
            body: Vec::new(),
        }
    }

    /// Add a parameter.
    pub fn parameter(mut self, param: FunctionParameterDefinition) -> Self {
        self.parameters.push(param);
        self
    }

    /// Add multiple parameters.
    pub fn parameters(
        mut self,
        params: impl IntoIterator<Item = FunctionParameterDefinition>,
    ) -> Self {
        self.parameters.extend(params);
        self
    }

    /// Set visibility.
    pub fn visibility(mut self, vis: Visibility) -> Self {
        self.visibility = Some(vis);
        self
    }

    /// Drop the visibility keyword from the rendered signature.
    pub fn without_visibility(mut self) -> Self {
        self.visibility = None;
        self
    }

    /// Mark as abstract.
    pub fn abstract_(mut self) -> Self {
        self.abstractness = Abstractness::Abstract;
        self
    }

    /// Append a body statement.
    pub fn statement(mut self, stmt: Statement) -> Self {
        self.body.push(stmt);
        self
    }

    /// Append multiple body statements.
    pub fn statements(mut self, stmts: impl IntoIterator<Item = Statement>) -> Self {
        self.body.extend(stmts);
        self
    }

    /// Check if this method is abstract.
    pub fn is_abstract(&self) -> bool {
        self.abstractness.is_abstract()
    }

    /// Check if this method has any body statements.
    pub fn has_body(&self) -> bool {
        !self.body.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Expr;

    #[test]
    fn test_method_defaults() {
        let method = ClassMethodDefinition::new("getId", PhpType::Int);
        assert_eq!(method.visibility, Some(Visibility::Public));
        assert!(!method.is_abstract());
        assert!(!method.has_body());
        assert!(method.parameters.is_empty());
    }

    #[test]
    fn test_method_builder() {
        let method = ClassMethodDefinition::new("setId", PhpType::fluent_return())
            .parameter(FunctionParameterDefinition::new("id", PhpType::Int))
            .statement(Statement::assign(Expr::property("id"), Expr::variable("id")))
            .statement(Statement::returns(Expr::This))
            .without_visibility();

        assert_eq!(method.parameters.len(), 1);
        assert_eq!(method.body.len(), 2);
        assert_eq!(method.visibility, None);
    }

    #[test]
    fn test_abstract_method() {
        let method = ClassMethodDefinition::new("handle", PhpType::Void)
            .visibility(Visibility::Protected)
            .abstract_();
        assert!(method.is_abstract());
        assert_eq!(method.visibility, Some(Visibility::Protected));
    }

    #[test]
    fn test_deserialize_visibility() {
        let defaulted: ClassMethodDefinition =
            serde_json::from_str(r#"{"name":"run","return_type":"void"}"#).unwrap();
        assert_eq!(defaulted.visibility, Some(Visibility::Public));

        let omitted: ClassMethodDefinition =
            serde_json::from_str(r#"{"name":"run","return_type":"void","visibility":null}"#)
                .unwrap();
        assert_eq!(omitted.visibility, None);
    }
}
