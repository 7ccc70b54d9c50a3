//! The input and result envelopes passed through the algorithm registry.

use crate::types::Interval;
use serde::Serialize;
use std::fmt;

/// The sequence handed to an algorithm.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Ints(Vec<i64>),
    Words(Vec<String>),
}

impl Input {
    pub fn len(&self) -> usize {
        match self {
            Input::Ints(values) => values.len(),
            Input::Words(words) => words.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<Vec<i64>> for Input {
    fn from(values: Vec<i64>) -> Self {
        Input::Ints(values)
    }
}

impl From<Vec<String>> for Input {
    fn from(words: Vec<String>) -> Self {
        Input::Words(words)
    }
}

/// The result of one algorithm invocation.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Outcome {
    /// A sorted, shuffled or otherwise rebuilt integer sequence.
    Sequence(Vec<i64>),
    /// A rebuilt sequence of words.
    Words(Vec<String>),
    /// A binary search result. `index` is `-1` when the needle was not found.
    Search { needle: Option<i64>, index: isize },
    /// The index of the minimum element of a rotated sequence.
    Rotation(usize),
    Product(i64),
    Riffle(bool),
    Intervals(Vec<Interval>),
}

/// Renders an outcome the way the command-line driver prints it.
impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Sequence(values) => write!(f, "{:?}", values),
            Outcome::Words(words) => write!(f, "{:?}", words),
            Outcome::Search { needle, index } => {
                match needle {
                    Some(n) => writeln!(f, "Search value: {}", n)?,
                    None => writeln!(f, "Search value: None")?,
                }
                write!(f, "Index: {}", index)
            }
            Outcome::Rotation(point) => write!(f, "Rotation point: {}", point),
            Outcome::Product(product) => write!(f, "{}", product),
            Outcome::Riffle(is_riffle) => write!(f, "Is single riffle: {}", is_riffle),
            Outcome::Intervals(intervals) => {
                let rendered: Vec<String> = intervals.iter().map(|i| i.to_string()).collect();
                write!(f, "Meetings: [{}]", rendered.join(", "))
            }
        }
    }
}

//==================================================================================
// Unit Tests
//==================================================================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_search_not_found() {
        let outcome = Outcome::Search { needle: None, index: -1 };
        assert_eq!(outcome.to_string(), "Search value: None\nIndex: -1");
    }

    #[test]
    fn test_display_intervals() {
        let outcome = Outcome::Intervals(vec![Interval::new(1, 6), Interval::new(8, 10)]);
        assert_eq!(outcome.to_string(), "Meetings: [(1, 6), (8, 10)]");
    }

    #[test]
    fn test_json_is_tagged() {
        let json = serde_json::to_value(Outcome::Riffle(true)).unwrap();
        assert_eq!(json, serde_json::json!({"kind": "riffle", "value": true}));
    }

    #[test]
    fn test_input_len() {
        assert!(Input::Ints(vec![]).is_empty());
        assert_eq!(Input::from(vec!["a".to_string(), "b".to_string()]).len(), 2);
    }
}
