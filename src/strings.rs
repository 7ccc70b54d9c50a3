//! Plain string utilities: uniqueness, C-string reversal, duplicate removal,
//! anagram check and word-cloud tally.
//!
//! Each is a single linear pass over the input (plus a sort for the word cloud).

use std::collections::HashMap;

use crate::error::PrepError;

/// Characters that end a word in [`word_cloud`].
const WORD_TERMINATORS: &[char] = &[' ', '.', ',', '?', '!', ':', ';', '(', ')'];

/// Returns the first character that is repeated, or that is not printable ASCII
/// (letters, digits, punctuation or whitespace). `None` means every character
/// is unique.
pub fn find_non_unique(s: &str) -> Option<char> {
    let mut seen = [false; 128];
    for c in s.chars() {
        if !is_printable_ascii(c) || seen[c as usize] {
            return Some(c);
        }
        seen[c as usize] = true;
    }
    None
}

fn is_printable_ascii(c: char) -> bool {
    c.is_ascii_graphic() || matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0b' | '\x0c')
}

/// Reverses a nul-terminated string, keeping the terminator at the end.
///
/// # Errors
/// `PrepError::NotCString` if `s` does not end with `'\0'`.
pub fn reverse_c_string(s: &str) -> Result<String, PrepError> {
    let body = s.strip_suffix('\0').ok_or(PrepError::NotCString)?;
    let mut reversed: String = body.chars().rev().collect();
    reversed.push('\0');
    Ok(reversed)
}

/// Keeps the first occurrence of every character, in order.
pub fn remove_duplicates(s: &str) -> String {
    let mut seen = std::collections::HashSet::new();
    s.chars().filter(|c| seen.insert(*c)).collect()
}

/// Returns `true` if both strings contain exactly the same characters with the
/// same multiplicities.
pub fn is_anagram(a: &str, b: &str) -> bool {
    let mut counts: HashMap<char, i64> = HashMap::new();
    for c in a.chars() {
        *counts.entry(c).or_insert(0) += 1;
    }
    for c in b.chars() {
        *counts.entry(c).or_insert(0) -= 1;
    }
    counts.values().all(|&n| n == 0)
}

/// Uppercases the first character and lowercases the rest.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Tallies capitalized words for a word cloud.
///
/// Words are split on spaces and `.,?!:;()`; words made only of hyphens are
/// skipped. The result is sorted by count, then by word, both descending.
pub fn word_cloud(text: &str) -> Vec<(String, usize)> {
    let mut cloud: HashMap<String, usize> = HashMap::new();
    for raw in text.split(WORD_TERMINATORS) {
        if raw.trim_matches('-').is_empty() {
            continue;
        }
        *cloud.entry(capitalize(raw)).or_insert(0) += 1;
    }

    let mut tally: Vec<(String, usize)> = cloud.into_iter().collect();
    tally.sort_by(|(word_a, count_a), (word_b, count_b)| {
        count_b.cmp(count_a).then_with(|| word_b.cmp(word_a))
    });
    tally
}

//==================================================================================
// Unit Tests
//==================================================================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_non_unique() {
        assert_eq!(find_non_unique("abcdef"), None);
        assert_eq!(find_non_unique("abcda"), Some('a'));
        assert_eq!(find_non_unique(""), None);
        assert_eq!(find_non_unique("héllo"), Some('é'));
    }

    #[test]
    fn test_reverse_c_string() {
        assert_eq!(reverse_c_string("abc\0").unwrap(), "cba\0");
        assert_eq!(reverse_c_string("\0").unwrap(), "\0");
        assert!(matches!(reverse_c_string("abc"), Err(PrepError::NotCString)));
    }

    #[test]
    fn test_remove_duplicates() {
        assert_eq!(remove_duplicates("mississippi"), "misp");
        assert_eq!(remove_duplicates(""), "");
    }

    #[test]
    fn test_is_anagram() {
        assert!(is_anagram("listen", "silent"));
        assert!(!is_anagram("listen", "silents"));
        assert!(!is_anagram("aab", "abb"));
        assert!(is_anagram("", ""));
    }

    #[test]
    fn test_word_cloud_counts_and_order() {
        let tally = word_cloud("We came, we saw, we conquered... then we ate Bananas.");
        assert_eq!(tally[0], ("We".to_string(), 4));
        // Remaining words each appear once, ordered by word descending.
        let rest: Vec<&str> = tally[1..].iter().map(|(w, _)| w.as_str()).collect();
        assert_eq!(rest, vec!["Then", "Saw", "Conquered", "Came", "Bananas", "Ate"]);
    }

    #[test]
    fn test_word_cloud_skips_lone_hyphens() {
        let tally = word_cloud("well - known - well-known");
        assert_eq!(
            tally,
            vec![
                ("Well-known".to_string(), 1),
                ("Well".to_string(), 1),
                ("Known".to_string(), 1),
            ]
        );
    }
}
