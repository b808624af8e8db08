//! Canonical-name collection for import aggregation.

use crate::node::TypeNode;

/// Collect the names a tree references, depth-first and pre-order.
///
/// A node's name is recorded when the injected `is_canonical` predicate
/// holds; children are visited left to right regardless of whether the
/// parent was recorded. What counts as canonical is target-language
/// specific, which is why the predicate is injected. Output is neither
/// deduplicated nor sorted — that belongs to the import aggregator.
///
/// ```
/// use polygen_typeexpr::{collect_references, parse};
///
/// let node = parse("a.B<c.D<e.F>, g.H>").unwrap();
/// let refs = collect_references(&node, &|name| name.contains('.'));
/// assert_eq!(refs, ["a.B", "c.D", "e.F", "g.H"]);
/// ```
pub fn collect_references<F>(node: &TypeNode, is_canonical: &F) -> Vec<String>
where
    F: Fn(&str) -> bool,
{
    let mut out = Vec::new();
    collect_into(node, is_canonical, &mut out);
    out
}

fn collect_into<F>(node: &TypeNode, is_canonical: &F, out: &mut Vec<String>)
where
    F: Fn(&str) -> bool,
{
    if is_canonical(&node.name) {
        out.push(node.name.clone());
    }
    for child in &node.generics {
        collect_into(child, is_canonical, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::parse;

    #[test]
    fn pre_order_with_predicate() {
        let node = parse("a.B<c.D<e.F>, g.H>").unwrap();
        let refs = collect_references(&node, &|name| name.contains('.'));
        assert_eq!(refs, ["a.B", "c.D", "e.F", "g.H"]);
    }

    #[test]
    fn skipped_parent_still_recursed() {
        let node = parse("List<java.lang.String>").unwrap();
        let refs = collect_references(&node, &|name| name.contains('.'));
        assert_eq!(refs, ["java.lang.String"]);
    }

    #[test]
    fn duplicates_are_kept() {
        let node = parse("java.util.Map<a.B, a.B>").unwrap();
        let refs = collect_references(&node, &|name| name.contains('.'));
        assert_eq!(refs, ["java.util.Map", "a.B", "a.B"]);
    }

    #[test]
    fn nothing_canonical() {
        let node = parse("Map<K, V>").unwrap();
        let refs = collect_references(&node, &|name| name.contains('.'));
        assert!(refs.is_empty());
    }
}
