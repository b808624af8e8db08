//! Recursive descent over flat type expressions.

use crate::node::TypeNode;
use crate::split::{find_matching, split_first};

/// Parse a flat type expression into a [`TypeNode`] tree.
///
/// Blank input yields `None`. The grammar is the informal
/// `name ("<" expr ("," expr)* ">")?` with `expr` recursing; any text free
/// of `<`, `>` and top-level commas is accepted as a name verbatim.
///
/// ```
/// use polygen_typeexpr::parse;
///
/// let node = parse("java.util.List<Foo>").unwrap();
/// assert_eq!(node.name, "java.util.List");
/// assert_eq!(node.generics[0].name, "Foo");
/// assert!(parse("").is_none());
/// ```
pub fn parse(input: &str) -> Option<TypeNode> {
    parse_with(input, &mut |name: &str| Some(TypeNode::new(name)))
}

/// Parse with an injected node factory.
///
/// The factory decouples parsing from any concrete node construction: it
/// receives each name in the expression and may abstain by returning
/// `None`, which stops further children on that branch without faulting
/// the rest of the tree.
///
/// Malformed input is recovered locally rather than reported: an
/// unmatched `<` takes the remainder of the string as its interior, and
/// an empty sub-expression mid-list ends that argument list. Generated
/// type text is internal, trusted input, so there is no error channel.
pub fn parse_with<F>(input: &str, factory: &mut F) -> Option<TypeNode>
where
    F: FnMut(&str) -> Option<TypeNode>,
{
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    let (name, interior) = match input.find('<') {
        None => (input, None),
        Some(open) => {
            let interior = match find_matching(input, open) {
                Some(close) => &input[open + 1..close],
                // Unterminated group: everything after `<` is interior.
                None => &input[open + 1..],
            };
            (input[..open].trim_end(), Some(interior))
        }
    };

    let mut node = factory(name)?;

    if let Some(interior) = interior {
        let mut rest = interior;
        loop {
            let (first, remainder) = split_first(rest);
            if first.is_empty() {
                break;
            }
            match parse_with(first, factory) {
                Some(child) => node.generics.push(child),
                None => break,
            }
            rest = remainder;
        }
    }

    Some(node)
}
