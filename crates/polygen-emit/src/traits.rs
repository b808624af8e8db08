//! Traits for source generation backends.

use polygen_model::ClassDef;

/// Error from backend dispatch.
#[derive(Debug, thiserror::Error)]
pub enum EmitError {
    #[error("no backend registered for '{0}'")]
    UnknownBackend(String),
}

/// A source generation backend.
///
/// Backends transform a [`ClassDef`] into source text for a target
/// language.
///
/// # Implementing Custom Backends
///
/// ```ignore
/// use polygen_emit::{Backend, register_backend};
/// use polygen_model::ClassDef;
///
/// struct SwiftBackend;
///
/// impl Backend for SwiftBackend {
///     fn name(&self) -> &'static str { "swift" }
///     fn language(&self) -> &'static str { "swift" }
///     fn extension(&self) -> &'static str { "swift" }
///     fn generate(&self, class: &ClassDef) -> String { /* ... */ }
/// }
///
/// // Register before first use
/// register_backend(&SwiftBackend);
/// ```
pub trait Backend: Send + Sync {
    /// Unique backend identifier (e.g., "java", "typescript").
    fn name(&self) -> &'static str;

    /// Target language (e.g., "java", "kotlin").
    fn language(&self) -> &'static str;

    /// File extension for generated sources (e.g., "java", "kt", "ts").
    fn extension(&self) -> &'static str;

    /// Generate source text for the class description.
    fn generate(&self, class: &ClassDef) -> String;
}
