//! Top-level splitting of comma-separated generic argument lists.

/// Split the content of an outermost `<...>` at its first top-level comma.
///
/// Returns the first comma-delimited expression and everything after it,
/// both trimmed, or `("", "")` when the input is blank. Commas inside
/// nested `<...>` groups do not split:
///
/// ```
/// use polygen_typeexpr::split_first;
///
/// assert_eq!(split_first("A<B,C>,D"), ("A<B,C>", "D"));
/// assert_eq!(split_first("A,B,C"), ("A", "B,C"));
/// assert_eq!(split_first("A<B<C,D>,E>,F"), ("A<B<C,D>,E>", "F"));
/// ```
///
/// The scan keeps a single nesting depth counter: `<` increments, `>`
/// decrements (when open), and the first comma at depth zero is the split
/// point. An unmatched `<` keeps the depth positive for the rest of the
/// scan, so the whole input degrades to a single unterminated expression
/// instead of an error. A stray `>` at depth zero is ordinary text.
pub fn split_first(input: &str) -> (&str, &str) {
    let input = input.trim();
    if input.is_empty() {
        return ("", "");
    }

    let mut depth = 0usize;
    for (i, c) in input.char_indices() {
        match c {
            '<' => depth += 1,
            '>' if depth > 0 => depth -= 1,
            ',' if depth == 0 => {
                return (input[..i].trim_end(), input[i + 1..].trim_start());
            }
            _ => {}
        }
    }

    (input, "")
}

/// Find the byte offset of the `>` matching the `<` at `open`.
///
/// `None` when the group never closes.
pub(crate) fn find_matching(input: &str, open: usize) -> Option<usize> {
    debug_assert_eq!(input[open..].chars().next(), Some('<'));

    let mut depth = 0usize;
    for (i, c) in input[open..].char_indices() {
        match c {
            '<' => depth += 1,
            '>' => {
                depth -= 1;
                if depth == 0 {
                    return Some(open + i);
                }
            }
            _ => {}
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_at_first_top_level_comma() {
        assert_eq!(split_first("A,B,C"), ("A", "B,C"));
    }

    #[test]
    fn skips_commas_inside_nested_group() {
        assert_eq!(split_first("A<B,C>,D"), ("A<B,C>", "D"));
    }

    #[test]
    fn skips_commas_at_two_levels_of_nesting() {
        assert_eq!(split_first("A<B<C,D>,E>,F"), ("A<B<C,D>,E>", "F"));
    }

    #[test]
    fn no_comma_means_whole_input() {
        assert_eq!(split_first("A<B,C>"), ("A<B,C>", ""));
        assert_eq!(split_first("Foo"), ("Foo", ""));
    }

    #[test]
    fn blank_input() {
        assert_eq!(split_first(""), ("", ""));
        assert_eq!(split_first("   "), ("", ""));
    }

    #[test]
    fn trims_around_the_split_point() {
        assert_eq!(split_first("  A<B, C> , D "), ("A<B, C>", "D"));
    }

    #[test]
    fn unbalanced_open_swallows_the_rest() {
        // No matching `>` for the first `<`: the later comma is nested,
        // so the whole input is one unterminated expression.
        assert_eq!(split_first("A<B,C"), ("A<B,C", ""));
    }

    #[test]
    fn stray_close_is_ordinary_text() {
        assert_eq!(split_first("A>,B"), ("A>", "B"));
    }

    #[test]
    fn matching_close_tracks_depth() {
        let s = "Map<K, List<V>>, Rest";
        let open = s.find('<').unwrap();
        assert_eq!(find_matching(s, open), Some(14));
        assert_eq!(&s[open + 1..14], "K, List<V>");
    }

    #[test]
    fn matching_close_missing() {
        let s = "Map<K, List<V>";
        assert_eq!(find_matching(s, 3), None);
    }
}
