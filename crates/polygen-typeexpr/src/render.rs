//! Rendering type trees back to flat strings.

use crate::node::TypeNode;

/// Render a tree with names unchanged.
///
/// Structural inverse of [`parse`](crate::parse) restricted to name and
/// generics nesting; array metadata comes from the caller, not from a
/// parsed string.
///
/// ```
/// use polygen_typeexpr::{parse, render};
///
/// let node = parse("Map<String,List<Foo>>").unwrap();
/// assert_eq!(render(&node), "Map<String, List<Foo>>");
/// ```
pub fn render(node: &TypeNode) -> String {
    render_with(node, &|name: &str| name.to_string())
}

/// Render a tree with an injected target-language name transform.
///
/// `short_name` decides how names are abbreviated (namespace stripping,
/// keyword substitution); this module does not. Output is the transformed
/// name, `[]` repeated `array_dimension` times when `is_array`, then the
/// comma-and-space-joined generic arguments in angle brackets. A node
/// with no generic arguments gets no angle brackets; `raw_generics` is
/// never consulted here.
pub fn render_with<F>(node: &TypeNode, short_name: &F) -> String
where
    F: Fn(&str) -> String,
{
    let mut out = short_name(&node.name);

    if node.is_array {
        for _ in 0..node.array_dimension {
            out.push_str("[]");
        }
    }

    if !node.generics.is_empty() {
        out.push('<');
        for (i, child) in node.generics.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            out.push_str(&render_with(child, short_name));
        }
        out.push('>');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leaf_renders_bare() {
        assert_eq!(render(&TypeNode::new("Foo")), "Foo");
    }

    #[test]
    fn comma_space_normalization() {
        let node = TypeNode::new("Map")
            .with_generic(TypeNode::new("K"))
            .with_generic(TypeNode::new("V"));
        assert_eq!(render(&node), "Map<K, V>");
    }

    #[test]
    fn array_suffix_repeats_rank() {
        let node = TypeNode::new("int").with_array(2);
        assert_eq!(render(&node), "int[][]");
    }

    #[test]
    fn array_rank_ignored_without_flag() {
        let mut node = TypeNode::new("Foo");
        node.array_dimension = 3;
        assert_eq!(render(&node), "Foo");
    }

    #[test]
    fn short_name_applies_at_every_level() {
        let node = TypeNode::new("java.util.Map")
            .with_generic(TypeNode::new("java.lang.String"))
            .with_generic(TypeNode::new("java.util.List").with_generic(TypeNode::new("Foo")));
        let short = |name: &str| name.rsplit('.').next().unwrap_or(name).to_string();
        assert_eq!(render_with(&node, &short), "Map<String, List<Foo>>");
    }

    #[test]
    fn raw_generics_never_renders() {
        let node = TypeNode::new("List").with_raw_generics("Foo");
        assert_eq!(render(&node), "List");

        let node = TypeNode::new("List")
            .with_raw_generics("Ignored")
            .with_generic(TypeNode::new("Foo"));
        assert_eq!(render(&node), "List<Foo>");
    }
}
