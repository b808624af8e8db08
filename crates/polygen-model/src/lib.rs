//! Language-agnostic source descriptions.
//!
//! `polygen-model` is the description IR that callers build and output
//! backends consume: classes with fields and methods, visibility, and
//! type references as [`TypeNode`](polygen_typeexpr::TypeNode) trees.
//! The IR says nothing about any target language's syntax; backends own
//! keywords, terminators and layout.

pub mod ir;

pub use ir::{ClassDef, FieldDef, MethodDef, ModelError, ParamDef, Visibility};
