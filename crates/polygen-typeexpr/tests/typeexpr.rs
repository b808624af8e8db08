//! Integration tests for the type expression core.

use polygen_typeexpr::{TypeNode, collect_references, parse, render, split_first};

// === Splitter contract ===

#[test]
fn split_examples() {
    assert_eq!(split_first("A<B,C>,D"), ("A<B,C>", "D"));
    assert_eq!(split_first("A,B,C"), ("A", "B,C"));
    assert_eq!(split_first("A<B<C,D>,E>,F"), ("A<B<C,D>,E>", "F"));
}

// === Parser contract ===

#[test]
fn parse_nested_map() {
    let node = parse("java.util.Map<java.lang.String, java.util.List<Foo>>").unwrap();
    assert_eq!(node.name, "java.util.Map");
    assert_eq!(node.generics.len(), 2);
    assert_eq!(node.generics[0].name, "java.lang.String");
    assert!(node.generics[0].generics.is_empty());
    assert_eq!(node.generics[1].name, "java.util.List");
    assert_eq!(node.generics[1].generics.len(), 1);
    assert_eq!(node.generics[1].generics[0].name, "Foo");
}

#[test]
fn parse_leaf_and_blank() {
    let node = parse("Foo").unwrap();
    assert_eq!(node.name, "Foo");
    assert!(node.generics.is_empty());
    assert!(parse("").is_none());
}

#[test]
fn balanced_inputs_parse_without_panicking() {
    let inputs = [
        "A",
        "A<B>",
        "A<B, C>",
        "A<B<C>>",
        "A<B<C, D>, E<F, G<H>>>",
        "T<A<X>, B<Y>, C<Z>>",
        "T<A<X, Y>, B<Z<W, Q>>, C, D<E>>",
        "a.b.C<d.e.F<g.H>, i.J>",
        "Pair<Pair<Pair<A, B>, Pair<C, D>>, Pair<E, F>>",
        "M<,>",
        "M<>",
        " spaced < a , b > ",
    ];
    for input in inputs {
        let _ = parse(input);
    }
}

#[test]
fn sibling_nesting_at_equal_depth() {
    // Three or more nested siblings at the same depth split cleanly at
    // every depth-zero comma.
    let node = parse("T<A<X, Y>, B<Z<W, Q>>, C, D<E>>").unwrap();
    let names: Vec<&str> = node.generics.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["A", "B", "C", "D"]);
    assert_eq!(node.generics[0].generics.len(), 2);
    assert_eq!(node.generics[1].generics[0].name, "Z");
    assert_eq!(node.generics[1].generics[0].generics.len(), 2);
    assert!(node.generics[2].generics.is_empty());
}

// === Renderer contract ===

#[test]
fn render_normalizes_comma_spacing() {
    let node = parse("Map<String,List<Foo>>").unwrap();
    assert_eq!(render(&node), "Map<String, List<Foo>>");
}

#[test]
fn render_parse_round_trip_is_idempotent() {
    let trees = [
        TypeNode::new("Foo"),
        TypeNode::new("java.util.Map")
            .with_generic(TypeNode::new("java.lang.String"))
            .with_generic(TypeNode::new("java.util.List").with_generic(TypeNode::new("Foo"))),
        TypeNode::new("T")
            .with_generic(TypeNode::new("A").with_generic(TypeNode::new("X")))
            .with_generic(TypeNode::new("B").with_generic(TypeNode::new("Y")))
            .with_generic(TypeNode::new("C").with_generic(TypeNode::new("Z"))),
    ];
    for tree in &trees {
        let flat = render(tree);
        let reparsed = parse(&flat).unwrap();
        assert_eq!(render(&reparsed), flat);
        assert_eq!(&reparsed, tree);
    }
}

// === Collector contract ===

#[test]
fn collect_in_pre_order() {
    let node = parse("a.B<c.D<e.F>, g.H>").unwrap();
    let refs = collect_references(&node, &|name| name.contains('.'));
    assert_eq!(refs, ["a.B", "c.D", "e.F", "g.H"]);
}
