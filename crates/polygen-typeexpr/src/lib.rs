//! Generic type expression trees.
//!
//! `polygen-typeexpr` turns flat, dotted, angle-bracket-generic type
//! strings (e.g. `"java.util.Map<java.lang.String, java.util.List<Foo>>"`)
//! into owned [`TypeNode`] trees and back, without a tokenizer or grammar.
//! The only structural work is telling commas that separate generic
//! arguments apart from commas nested inside deeper arguments, which a
//! single depth counter handles to arbitrary nesting depth.
//!
//! # Architecture
//!
//! ```text
//! flat string          tree                consumers
//! ───────────     ─────────────     ─────────────────────────
//! "Map<K, V>" ──> TypeNode ────────┬─> render: string per target
//!   (parse)         (node.rs)      └─> collect: canonical names
//! ```
//!
//! # Example
//!
//! ```
//! use polygen_typeexpr::{parse, render, collect_references};
//!
//! let node = parse("java.util.Map<java.lang.String, java.util.List<Foo>>").unwrap();
//! assert_eq!(node.name, "java.util.Map");
//! assert_eq!(node.generics.len(), 2);
//!
//! // Structural inverse, with comma-space normalization.
//! assert_eq!(
//!     render(&node),
//!     "java.util.Map<java.lang.String, java.util.List<Foo>>"
//! );
//!
//! // Canonical names in pre-order, for import aggregation.
//! let refs = collect_references(&node, &|name| name.contains('.'));
//! assert_eq!(refs, ["java.util.Map", "java.lang.String", "java.util.List"]);
//! ```
//!
//! Parsing is permissive by design: unbalanced `<` degrades to a single
//! unterminated expression, and no identifier validation is performed.
//! Everything here is pure and reentrant; callers injecting factories or
//! name transforms are responsible for their own reentrancy.

pub mod collect;
pub mod node;
pub mod parse;
pub mod render;
pub mod split;

pub use collect::collect_references;
pub use node::TypeNode;
pub use parse::{parse, parse_with};
pub use render::{render, render_with};
pub use split::split_first;
