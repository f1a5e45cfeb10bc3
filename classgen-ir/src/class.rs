//! The aggregate class definition.

use serde::{Deserialize, Serialize};

use crate::{ClassConstantDefinition, ClassMethodDefinition, ClassPropertyDefinition};

/// A class to be generated.
///
/// Owns its constants, properties and methods in insertion order. The
/// accessor synthesizer consumes a `ClassDefinition` and appends derived
/// methods before rendering.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ClassDefinition {
    /// Namespace, e.g. `App\Models`. Empty for the global namespace.
    #[serde(default)]
    pub namespace: String,
    /// Class name.
    pub name: String,
    /// Class constants.
    #[serde(default)]
    pub constants: Vec<ClassConstantDefinition>,
    /// Properties.
    #[serde(default)]
    pub properties: Vec<ClassPropertyDefinition>,
    /// Methods.
    #[serde(default)]
    pub methods: Vec<ClassMethodDefinition>,
}

impl ClassDefinition {
    /// Create an empty class definition.
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
            constants: Vec::new(),
            properties: Vec::new(),
            methods: Vec::new(),
        }
    }

    /// Add a constant.
    pub fn constant(mut self, constant: ClassConstantDefinition) -> Self {
        self.constants.push(constant);
        self
    }

    /// Add a property.
    pub fn property(mut self, property: ClassPropertyDefinition) -> Self {
        self.properties.push(property);
        self
    }

    /// Add multiple properties.
    pub fn properties(
        mut self,
        properties: impl IntoIterator<Item = ClassPropertyDefinition>,
    ) -> Self {
        self.properties.extend(properties);
        self
    }

    /// Add a method.
    pub fn method(mut self, method: ClassMethodDefinition) -> Self {
        self.methods.push(method);
        self
    }

    /// Append a method in place.
    pub fn add_method(&mut self, method: ClassMethodDefinition) {
        self.methods.push(method);
    }

    /// Check if a method with this name is declared.
    pub fn has_method(&self, name: &str) -> bool {
        self.methods.iter().any(|m| m.name == name)
    }

    /// Look up a method by name.
    pub fn find_method(&self, name: &str) -> Option<&ClassMethodDefinition> {
        self.methods.iter().find(|m| m.name == name)
    }

    /// Check if the class has no members at all.
    pub fn is_empty(&self) -> bool {
        self.constants.is_empty() && self.properties.is_empty() && self.methods.is_empty()
    }

    /// Check if the class lives in the global namespace.
    pub fn is_global_namespace(&self) -> bool {
        self.namespace.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use classgen_core::PhpType;

    use super::*;

    #[test]
    fn test_class_builder() {
        let class = ClassDefinition::new("App\\Models", "User")
            .constant(ClassConstantDefinition::new("TABLE", "users"))
            .property(ClassPropertyDefinition::new("id", PhpType::Int))
            .method(ClassMethodDefinition::new("save", PhpType::Bool));

        assert_eq!(class.namespace, "App\\Models");
        assert_eq!(class.name, "User");
        assert_eq!(class.constants.len(), 1);
        assert_eq!(class.properties.len(), 1);
        assert!(class.has_method("save"));
        assert!(!class.has_method("delete"));
        assert!(!class.is_empty());
    }

    #[test]
    fn test_add_method_keeps_order() {
        let mut class = ClassDefinition::new("", "Plain");
        assert!(class.is_empty());
        assert!(class.is_global_namespace());

        class.add_method(ClassMethodDefinition::new("b", PhpType::Void));
        class.add_method(ClassMethodDefinition::new("a", PhpType::Void));

        let names: Vec<_> = class.methods.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, ["b", "a"]);
        assert_eq!(class.find_method("a").map(|m| &m.return_type), Some(&PhpType::Void));
    }

    #[test]
    fn test_deserialize_class() {
        let class: ClassDefinition = serde_json::from_str(
            r#"{
                "namespace": "App\\Models",
                "name": "Post",
                "properties": [
                    {"name": "title", "type": "string", "has_getter": true, "has_setter": true}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(class.name, "Post");
        assert!(class.constants.is_empty());
        assert!(class.properties[0].has_accessors());
    }
}
