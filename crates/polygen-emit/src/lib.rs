//! Per-language source backends.
//!
//! `polygen-emit` renders [`ClassDef`](polygen_model::ClassDef)
//! descriptions into source text for target languages. All backends
//! implement the [`Backend`](traits::Backend) trait for uniform access
//! via the registry.
//!
//! # Architecture
//!
//! ```text
//! Description IR          Backends
//! ──────────────     ──────────────────
//!                 ┌─> Java classes
//! ClassDef ───────┼─> Kotlin classes
//!  (polygen-model)└─> TypeScript classes
//! ```
//!
//! Each backend owns its target's keyword tables, access-modifier
//! mapping, statement terminators and indentation, and supplies the
//! type-expression core with a short-name strategy and a canonical-name
//! predicate. Import blocks come from [`imports::aggregate`] fed by the
//! core's reference collector.

pub mod imports;
pub mod output;
pub mod registry;
pub mod traits;

pub use imports::{ImportPolicy, aggregate};
pub use traits::{Backend, EmitError};

pub use registry::{backend_names, backends, generate_for, get_backend, register_backend};

#[cfg(feature = "backend-java")]
pub use output::java::{JavaBackend, JavaOptions, generate_java};

#[cfg(feature = "backend-kotlin")]
pub use output::kotlin::{KotlinBackend, KotlinOptions, generate_kotlin};

#[cfg(feature = "backend-typescript")]
pub use output::typescript::{TypeScriptBackend, TypeScriptOptions, generate_typescript};
