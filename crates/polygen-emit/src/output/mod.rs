//! Output backends for source generation.
//!
//! Each backend takes a [`ClassDef`](polygen_model::ClassDef) and
//! produces source text. All backends implement the
//! [`Backend`](crate::traits::Backend) trait for uniform access via the
//! registry.

// Java
#[cfg(feature = "backend-java")]
pub mod java;

#[cfg(feature = "backend-java")]
pub use java::{JavaBackend, JavaOptions, generate_java};

// Kotlin
#[cfg(feature = "backend-kotlin")]
pub mod kotlin;

#[cfg(feature = "backend-kotlin")]
pub use kotlin::{KotlinBackend, KotlinOptions, generate_kotlin};

// TypeScript
#[cfg(feature = "backend-typescript")]
pub mod typescript;

#[cfg(feature = "backend-typescript")]
pub use typescript::{TypeScriptBackend, TypeScriptOptions, generate_typescript};
