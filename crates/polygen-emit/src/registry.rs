//! Registry for source generation backends.

use crate::traits::{Backend, EmitError};
use polygen_model::ClassDef;
use std::sync::{OnceLock, RwLock};

/// Global registry of backends.
static BACKENDS: RwLock<Vec<&'static dyn Backend>> = RwLock::new(Vec::new());
static INITIALIZED: OnceLock<()> = OnceLock::new();

/// Register a custom backend.
///
/// Call this before any generation operations to add custom backends.
/// Built-in backends are registered automatically on first use.
pub fn register_backend(backend: &'static dyn Backend) {
    BACKENDS.write().unwrap().push(backend);
}

/// Initialize built-in backends (called automatically on first use).
fn init_builtin() {
    INITIALIZED.get_or_init(|| {
        let mut backends = BACKENDS.write().unwrap();

        #[cfg(feature = "backend-java")]
        {
            backends.push(&crate::output::java::JAVA_BACKEND);
        }

        #[cfg(feature = "backend-kotlin")]
        {
            backends.push(&crate::output::kotlin::KOTLIN_BACKEND);
        }

        #[cfg(feature = "backend-typescript")]
        {
            backends.push(&crate::output::typescript::TYPESCRIPT_BACKEND);
        }
    });
}

/// Get a backend by name.
pub fn get_backend(name: &str) -> Option<&'static dyn Backend> {
    init_builtin();
    BACKENDS
        .read()
        .unwrap()
        .iter()
        .find(|b| b.name() == name)
        .copied()
}

/// List all registered backends.
pub fn backends() -> Vec<&'static dyn Backend> {
    init_builtin();
    BACKENDS.read().unwrap().clone()
}

/// List all registered backend names.
pub fn backend_names() -> Vec<&'static str> {
    init_builtin();
    BACKENDS.read().unwrap().iter().map(|b| b.name()).collect()
}

/// Generate source for a class with the named backend.
pub fn generate_for(name: &str, class: &ClassDef) -> Result<String, EmitError> {
    get_backend(name)
        .map(|b| b.generate(class))
        .ok_or_else(|| EmitError::UnknownBackend(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_names_listed() {
        let names = backend_names();
        assert!(!names.is_empty() || cfg!(not(feature = "default")));
    }

    #[test]
    #[cfg(feature = "backend-java")]
    fn backend_lookup_by_name() {
        let backend = get_backend("java").expect("java backend");
        assert_eq!(backend.language(), "java");
        assert_eq!(backend.extension(), "java");
    }

    #[test]
    fn unknown_backend_is_an_error() {
        let class = ClassDef::new("Foo");
        let err = generate_for("cobol", &class).unwrap_err();
        assert!(matches!(err, EmitError::UnknownBackend(name) if name == "cobol"));
    }
}
