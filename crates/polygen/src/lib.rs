//! Multi-target source generation from language-agnostic class
//! descriptions.
//!
//! Callers describe classes, fields and methods once
//! ([`polygen_model`]), reference types as flat generic expressions
//! parsed into trees ([`polygen_typeexpr`]), and render per target
//! language through registered backends ([`polygen_emit`]).
//!
//! ```
//! use polygen::model::{ClassDef, FieldDef};
//! use polygen::typeexpr::parse;
//!
//! let class = ClassDef::new("Person")
//!     .in_package("com.example")
//!     .with_field(FieldDef::private(
//!         "tags",
//!         parse("java.util.List<java.lang.String>").unwrap(),
//!     ));
//!
//! let java = polygen::emit::generate_for("java", &class).unwrap();
//! assert!(java.contains("private List<String> tags;"));
//! ```

pub use polygen_emit as emit;
pub use polygen_model as model;
pub use polygen_typeexpr as typeexpr;
