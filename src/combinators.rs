// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//!
//! String combinators for assembling regular expressions
//!
//! These operate on plain expression fragments. [or_join] builds an
//! alternation from a list of fragments and [kleene_star] wraps a fragment
//! in zero-or-more repetition, parenthesizing only when needed.
//!

///
/// Wrap an expression fragment in a Kleene star:
///
/// - `kleene_star("", false)` -> `""`
/// - `kleene_star("a", false)` -> `"a*"`
/// - `kleene_star("abc", false)` -> `"(abc)*"`
/// - `kleene_star("(abc|123)", true)` -> `"(abc|123)*"`
///
/// With `bare` set, a multi-symbol fragment is starred without an extra
/// parenthesis layer. The caller asserts that the fragment is already an
/// atomic group, typically a parenthesized alternation produced by
/// [or_join]; the combinator trusts the flag.
///
pub fn kleene_star(s: &str, bare: bool) -> String {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (None, _) => String::new(),
        (Some(_), None) => format!("{}*", s),
        _ if bare => format!("{}*", s),
        _ => format!("({})*", s),
    }
}

///
/// Join expression fragments into an alternation, ignoring empty fragments:
///
/// - `or_join(&[])` -> `""`
/// - `or_join(&["a"])` -> `"a"`
/// - `or_join(&["a", "b"])` -> `"(a|b)"`
/// - `or_join(&["", "a", "b"])` -> `"(a|b)"`
///
/// An empty fragment means "no extra alternative", not an epsilon branch:
/// alternations never carry an explicit empty arm. An automaton whose
/// accepting path folds to the empty label can therefore lose that arm when
/// joined with non-empty ones. Known limitation, kept for fidelity with the
/// elimination rules.
///
pub fn or_join<S: AsRef<str>>(fragments: &[S]) -> String {
    let non_empty: Vec<&str> = fragments
        .iter()
        .map(|s| s.as_ref())
        .filter(|s| !s.is_empty())
        .collect();
    match non_empty.len() {
        0 => String::new(),
        1 => non_empty[0].to_string(),
        _ => format!("({})", non_empty.join("|")),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_kleene_star() {
        assert_eq!(kleene_star("", false), "");
        assert_eq!(kleene_star("a", false), "a*");
        assert_eq!(kleene_star("abc", false), "(abc)*");
        assert_eq!(kleene_star("(abc|123)", true), "(abc|123)*");
        // bare is irrelevant for empty and single-symbol fragments
        assert_eq!(kleene_star("", true), "");
        assert_eq!(kleene_star("a", true), "a*");
    }

    #[test]
    fn test_kleene_star_counts_symbols_not_bytes() {
        // one multi-byte code point is still a single symbol
        assert_eq!(kleene_star("é", false), "é*");
    }

    #[test]
    fn test_or_join() {
        let empty: [&str; 0] = [];
        assert_eq!(or_join(&empty), "");
        assert_eq!(or_join(&["a"]), "a");
        assert_eq!(or_join(&["a", "b"]), "(a|b)");
        assert_eq!(or_join(&["", "a", "b"]), "(a|b)");
        assert_eq!(or_join(&["", ""]), "");
        assert_eq!(or_join(&["ab", "cd", "ef"]), "(ab|cd|ef)");
    }

    #[test]
    fn test_or_join_preserves_order() {
        assert_eq!(or_join(&["b", "a"]), "(b|a)");
    }
}
