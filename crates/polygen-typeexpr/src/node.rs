//! The type expression tree.

use serde::{Deserialize, Serialize};

/// A node in a generic type expression tree.
///
/// The tree is a strict ownership hierarchy: every child in [`generics`]
/// belongs to exactly one parent, and there are no cycles or cross-links,
/// so a plain `Vec` of owned children is all the structure needed.
///
/// [`generics`]: TypeNode::generics
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeNode {
    /// Canonical dotted identifier (`java.util.List`) or a single
    /// identifier such as a generic parameter letter (`T`). Never
    /// contains `<`, `>`, or unescaped commas.
    pub name: String,

    /// Whether this type is an array.
    ///
    /// The parser never sets this: array-ness is applied by the caller
    /// after construction, separately from generics nesting.
    #[serde(default)]
    pub is_array: bool,

    /// Array rank, consulted only when [`is_array`](TypeNode::is_array)
    /// is true. Always at least 1.
    #[serde(default = "default_dimension")]
    pub array_dimension: usize,

    /// Generic arguments, left-to-right in source order.
    #[serde(default)]
    pub generics: Vec<TypeNode>,

    /// Raw generics annotation text supplied by callers that build nodes
    /// directly instead of going through the parser. The core renderer
    /// ignores it; backends may fall back to it when `generics` is empty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_generics: Option<String>,

    /// Opaque constructor-argument text carried through unchanged for
    /// backends that emit field initializers. No effect on parsing or
    /// rendering.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constructor_args: Option<String>,
}

fn default_dimension() -> usize {
    1
}

impl Default for TypeNode {
    fn default() -> Self {
        Self::new("")
    }
}

impl TypeNode {
    /// Create a leaf node with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_array: false,
            array_dimension: 1,
            generics: Vec::new(),
            raw_generics: None,
            constructor_args: None,
        }
    }

    /// Append a generic argument.
    pub fn with_generic(mut self, child: TypeNode) -> Self {
        self.generics.push(child);
        self
    }

    /// Mark this node as an array of the given rank (clamped to 1).
    pub fn with_array(mut self, dimension: usize) -> Self {
        self.is_array = true;
        self.array_dimension = dimension.max(1);
        self
    }

    /// Attach raw generics annotation text.
    pub fn with_raw_generics(mut self, text: impl Into<String>) -> Self {
        self.raw_generics = Some(text.into());
        self
    }

    /// Attach opaque constructor-argument text.
    pub fn with_constructor_args(mut self, args: impl Into<String>) -> Self {
        self.constructor_args = Some(args.into());
        self
    }
}
