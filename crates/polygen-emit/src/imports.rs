//! Import-list aggregation.
//!
//! The type-expression core's reference collector produces a raw,
//! ordered name sequence; this module turns it into the deterministic
//! import block a generated file carries: deduplicated, lexically
//! sorted, with implicitly-imported and same-package names dropped.

/// What a target language imports implicitly.
#[derive(Debug, Clone, Default)]
pub struct ImportPolicy {
    /// Packages whose direct members need no import
    /// (e.g. `java.lang` for Java, `kotlin` for Kotlin).
    pub implicit_prefixes: Vec<String>,
    /// The generated class's own package; same-package names need no
    /// import.
    pub self_package: Option<String>,
}

impl ImportPolicy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_implicit_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.implicit_prefixes.push(prefix.into());
        self
    }

    pub fn for_package(mut self, package: impl Into<String>) -> Self {
        self.self_package = Some(package.into());
        self
    }

    /// Whether a canonical name must appear in the import block.
    fn admits(&self, name: &str) -> bool {
        let package = match name.rsplit_once('.') {
            Some((package, _)) => package,
            // No package part, nothing to import.
            None => return false,
        };
        if self.implicit_prefixes.iter().any(|p| p == package) {
            return false;
        }
        if self.self_package.as_deref() == Some(package) {
            return false;
        }
        true
    }
}

/// Aggregate collected references into an import block.
///
/// Input order is irrelevant; output is deduplicated and lexically
/// sorted.
pub fn aggregate(names: impl IntoIterator<Item = String>, policy: &ImportPolicy) -> Vec<String> {
    let mut out: Vec<String> = names.into_iter().filter(|n| policy.admits(n)).collect();
    out.sort();
    out.dedup();
    out
}
