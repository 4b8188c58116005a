//! Filter engine: case-insensitive substring search with match highlighting
//!
//! Entries are never modified. Highlighting is derived from the stored name
//! and the current term every time a row is drawn.

use crate::catalog::Entry;
use crate::constants::SEARCH_TERM_THRESHOLD;
use std::ops::Range;
use std::time::{Duration, Instant};
use tracing::debug;

/// Whether a term is long enough to filter the list
pub fn is_active_term(term: &str) -> bool {
    term.chars().count() > SEARCH_TERM_THRESHOLD
}

/// Byte length of the case-insensitive match of `needle` at the start of `rest`.
/// Each haystack char is lowercased on its own and must be matched whole, so a
/// char whose lowercase form is several chars (`'İ'` is `"i\u{307}"`) only
/// matches a needle containing all of them.
fn match_len(rest: &str, needle: &[char]) -> Option<usize> {
    let mut remaining = needle;
    for (offset, c) in rest.char_indices() {
        for lower in c.to_lowercase() {
            match remaining.split_first() {
                Some((&want, tail)) if want == lower => remaining = tail,
                _ => return None,
            }
        }
        if remaining.is_empty() {
            return Some(offset + c.len_utf8());
        }
    }
    None
}

/// Find the first case-insensitive occurrence of `needle`, as a byte range
/// into `haystack` that always falls on char boundaries.
pub fn find_ignore_case(haystack: &str, needle: &str) -> Option<Range<usize>> {
    let needle: Vec<char> = needle.chars().flat_map(char::to_lowercase).collect();
    if needle.is_empty() {
        return Some(0..0);
    }
    haystack.char_indices().find_map(|(start, _)| {
        match_len(&haystack[start..], &needle).map(|len| start..start + len)
    })
}

/// A name split around its highlighted match, in original casing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Highlight<'a> {
    pub before: &'a str,
    pub matched: &'a str,
    pub after: &'a str,
}

pub fn highlight<'a>(name: &'a str, term: &str) -> Option<Highlight<'a>> {
    let range = find_ignore_case(name, term)?;
    Some(Highlight {
        before: &name[..range.start],
        matched: &name[range.clone()],
        after: &name[range.end..],
    })
}

/// Indices of entries whose name contains `term`, in list order
pub fn filter_entries(entries: &[Entry], term: &str) -> Vec<usize> {
    entries
        .iter()
        .enumerate()
        .filter(|(_, e)| find_ignore_case(&e.name, term).is_some())
        .map(|(i, _)| i)
        .collect()
}

/// Current search term and its result set
#[derive(Debug, Default)]
pub struct Search {
    term: String,
    matches: Option<Vec<usize>>,
    elapsed: Duration,
}

impl Search {
    /// Re-run the search from scratch for `term`
    pub fn run(&mut self, entries: &[Entry], term: &str) {
        let started = Instant::now();
        self.term = term.to_string();
        self.matches = is_active_term(term).then(|| filter_entries(entries, term));
        self.elapsed = started.elapsed();

        if let Some(matches) = &self.matches {
            debug!(
                term = %self.term,
                matches = matches.len(),
                elapsed_us = self.elapsed.as_micros() as u64,
                "Search applied"
            );
        }
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn is_active(&self) -> bool {
        self.matches.is_some()
    }

    /// Matching entry indices, `None` while the term is too short to filter
    pub fn matches(&self) -> Option<&[usize]> {
        self.matches.as_deref()
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn highlight<'a>(&self, name: &'a str) -> Option<Highlight<'a>> {
        if self.is_active() {
            highlight(name, &self.term)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn entries(names: &[&str]) -> Vec<Entry> {
        names
            .iter()
            .enumerate()
            .map(|(i, n)| Entry {
                id: i.to_string(),
                name: n.to_string(),
            })
            .collect()
    }

    #[test]
    fn threshold_is_more_than_three_chars() {
        assert!(!is_active_term(""));
        assert!(!is_active_term("abc"));
        assert!(!is_active_term("äöü"));
        assert!(is_active_term("abcd"));
    }

    #[test]
    fn find_is_case_insensitive() {
        assert_eq!(find_ignore_case("Moby Dick", "DICK"), Some(5..9));
        assert_eq!(find_ignore_case("Moby Dick", "whale"), None);
    }

    #[test]
    fn find_handles_multibyte_names() {
        let name = "Über Ärger";
        let range = find_ignore_case(name, "ärg").unwrap();
        assert_eq!(&name[range], "Ärg");
    }

    #[test]
    fn expanding_lowercase_must_match_whole() {
        assert_eq!(find_ignore_case("İstanbul", "ista"), None);
        assert_eq!(find_ignore_case("İstanbul", "i\u{307}sta"), Some(0.."İsta".len()));
        assert_eq!(find_ignore_case("İstanbul", "STAN"), Some(2..6));
    }

    #[test]
    fn only_names_containing_the_term_match() {
        let list = entries(&["Moby Dick", "Mobile Homes", "Dune"]);
        assert_eq!(filter_entries(&list, "Mobi"), vec![1]);

        let list = entries(&["MOBILE", "Dune", "Automobile"]);
        assert_eq!(filter_entries(&list, "Mobi"), vec![0, 2]);
    }

    #[test]
    fn highlight_preserves_original_case() {
        let h = highlight("Automobile", "MOBI").unwrap();
        assert_eq!(h.before, "Auto");
        assert_eq!(h.matched, "mobi");
        assert_eq!(h.after, "le");

        let h = highlight("MOBILE", "Mobi").unwrap();
        assert_eq!(h.matched, "MOBI");
    }

    #[test]
    fn highlight_wraps_first_occurrence_only() {
        let h = highlight("Tales of Tales", "tale").unwrap();
        assert_eq!(h.before, "");
        assert_eq!(h.matched, "Tale");
        assert_eq!(h.after, "s of Tales");
    }

    #[test]
    fn repeated_edits_never_compound() {
        let list = entries(&["Mobile Homes"]);
        let mut search = Search::default();
        search.run(&list, "Mobi");
        search.run(&list, "Mobil");
        search.run(&list, "Mobile");

        let h = search.highlight(&list[0].name).unwrap();
        assert_eq!(h.matched, "Mobile");
        assert_eq!(h.after, " Homes");
        assert_eq!(list[0].name, "Mobile Homes");
    }

    #[test]
    fn clearing_the_term_removes_highlighting() {
        let list = entries(&["Mobile Homes"]);
        let mut search = Search::default();
        search.run(&list, "Mobi");
        assert!(search.highlight(&list[0].name).is_some());

        search.run(&list, "");
        assert!(!search.is_active());
        assert!(search.matches().is_none());
        assert!(search.highlight(&list[0].name).is_none());
    }

    proptest! {
        #[test]
        fn every_match_contains_the_term(
            names in prop::collection::vec("[a-zA-Z ]{0,20}", 0..40),
            term in "[a-zA-Z]{4,6}",
        ) {
            let refs: Vec<&str> = names.iter().map(String::as_str).collect();
            let list = entries(&refs);
            let mut search = Search::default();
            search.run(&list, &term);

            let matches = search.matches().unwrap();
            for &i in matches {
                prop_assert!(list[i].name.to_lowercase().contains(&term.to_lowercase()));
                let h = search.highlight(&list[i].name).unwrap();
                prop_assert_eq!(h.matched.to_lowercase(), term.to_lowercase());
            }
            let expected = list
                .iter()
                .filter(|e| e.name.to_lowercase().contains(&term.to_lowercase()))
                .count();
            prop_assert_eq!(matches.len(), expected);
        }
    }
}
