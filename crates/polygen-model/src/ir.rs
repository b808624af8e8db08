//! Intermediate representation for class descriptions.
//!
//! Callers build these programmatically or deserialize them from JSON;
//! all output backends consume the same IR.

use polygen_typeexpr::TypeNode;
use serde::{Deserialize, Serialize};

/// Member visibility, mapped to target-language modifiers by backends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    #[default]
    Public,
    Protected,
    /// Package/module visibility; backends without an equivalent fall
    /// back to their closest default.
    Package,
    Private,
}

/// A class description.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClassDef {
    /// Short class name, no package prefix.
    pub name: String,
    /// Dotted package/namespace, when the target language has one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package: Option<String>,
    /// Documentation comment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub docs: Option<String>,
    #[serde(default)]
    pub visibility: Visibility,
    #[serde(default)]
    pub is_abstract: bool,
    /// Superclass reference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extends: Option<TypeNode>,
    /// Implemented interface references.
    #[serde(default)]
    pub implements: Vec<TypeNode>,
    #[serde(default)]
    pub fields: Vec<FieldDef>,
    #[serde(default)]
    pub methods: Vec<MethodDef>,
}

/// A field in a class.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldDef {
    pub name: String,
    /// Field type.
    pub ty: TypeNode,
    #[serde(default)]
    pub visibility: Visibility,
    #[serde(default)]
    pub is_static: bool,
    #[serde(default)]
    pub is_final: bool,
    /// Documentation comment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub docs: Option<String>,
    /// Ask backends to emit getter/setter boilerplate for this field.
    #[serde(default)]
    pub accessors: bool,
}

/// A method in a class.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MethodDef {
    pub name: String,
    /// Documentation comment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub docs: Option<String>,
    #[serde(default)]
    pub visibility: Visibility,
    #[serde(default)]
    pub is_static: bool,
    /// Return type; `None` renders as the target's void/unit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_type: Option<TypeNode>,
    #[serde(default)]
    pub params: Vec<ParamDef>,
    /// Opaque target-language body text, emitted verbatim and indented.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

/// A method parameter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParamDef {
    pub name: String,
    pub ty: TypeNode,
}

/// Model validation failure.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("empty {what} name in class '{class}'")]
    EmptyName { what: &'static str, class: String },
}

impl ClassDef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn in_package(mut self, package: impl Into<String>) -> Self {
        self.package = Some(package.into());
        self
    }

    pub fn with_docs(mut self, docs: impl Into<String>) -> Self {
        self.docs = Some(docs.into());
        self
    }

    pub fn extending(mut self, superclass: TypeNode) -> Self {
        self.extends = Some(superclass);
        self
    }

    pub fn implementing(mut self, interface: TypeNode) -> Self {
        self.implements.push(interface);
        self
    }

    pub fn with_field(mut self, field: FieldDef) -> Self {
        self.fields.push(field);
        self
    }

    pub fn with_method(mut self, method: MethodDef) -> Self {
        self.methods.push(method);
        self
    }

    /// Fail fast on structurally broken descriptions.
    ///
    /// Empty class or member names indicate a programming error upstream;
    /// no generation is meaningful for them.
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.name.trim().is_empty() {
            return Err(ModelError::EmptyName {
                what: "class",
                class: self.name.clone(),
            });
        }
        for field in &self.fields {
            if field.name.trim().is_empty() || field.ty.name.trim().is_empty() {
                return Err(ModelError::EmptyName {
                    what: "field",
                    class: self.name.clone(),
                });
            }
        }
        for method in &self.methods {
            if method.name.trim().is_empty() {
                return Err(ModelError::EmptyName {
                    what: "method",
                    class: self.name.clone(),
                });
            }
            if method.params.iter().any(|p| p.name.trim().is_empty()) {
                return Err(ModelError::EmptyName {
                    what: "parameter",
                    class: self.name.clone(),
                });
            }
        }
        Ok(())
    }
}

impl FieldDef {
    pub fn new(name: impl Into<String>, ty: TypeNode) -> Self {
        Self {
            name: name.into(),
            ty,
            visibility: Visibility::Public,
            is_static: false,
            is_final: false,
            docs: None,
            accessors: false,
        }
    }

    /// Private field with accessor boilerplate requested — the value
    /// object shape.
    pub fn private(name: impl Into<String>, ty: TypeNode) -> Self {
        Self {
            visibility: Visibility::Private,
            accessors: true,
            ..Self::new(name, ty)
        }
    }

    pub fn with_docs(mut self, docs: impl Into<String>) -> Self {
        self.docs = Some(docs.into());
        self
    }

    pub fn finalized(mut self) -> Self {
        self.is_final = true;
        self
    }
}

impl MethodDef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            docs: None,
            visibility: Visibility::Public,
            is_static: false,
            return_type: None,
            params: Vec::new(),
            body: None,
        }
    }

    pub fn returning(mut self, ty: TypeNode) -> Self {
        self.return_type = Some(ty);
        self
    }

    pub fn with_param(mut self, name: impl Into<String>, ty: TypeNode) -> Self {
        self.params.push(ParamDef {
            name: name.into(),
            ty,
        });
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn with_docs(mut self, docs: impl Into<String>) -> Self {
        self.docs = Some(docs.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_value_object() {
        let class = ClassDef::new("Person")
            .in_package("com.example.model")
            .with_field(FieldDef::private(
                "name",
                TypeNode::new("java.lang.String"),
            ))
            .with_field(FieldDef::private(
                "tags",
                TypeNode::new("java.util.List").with_generic(TypeNode::new("java.lang.String")),
            ));

        assert_eq!(class.fields.len(), 2);
        assert!(class.fields.iter().all(|f| f.accessors));
        class.validate().unwrap();
    }

    #[test]
    fn validate_rejects_empty_names() {
        let class = ClassDef::new("");
        assert!(class.validate().is_err());

        let class = ClassDef::new("Ok").with_field(FieldDef::new("", TypeNode::new("Foo")));
        assert!(matches!(
            class.validate(),
            Err(ModelError::EmptyName { what: "field", .. })
        ));
    }

    #[test]
    fn deserializes_terse_json() {
        let class: ClassDef = serde_json::from_str(
            r#"{
                "name": "Person",
                "package": "com.example",
                "fields": [
                    { "name": "id", "ty": { "name": "java.lang.String" }, "visibility": "private" }
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(class.name, "Person");
        assert_eq!(class.fields[0].visibility, Visibility::Private);
        assert!(!class.fields[0].accessors);
        class.validate().unwrap();
    }
}
