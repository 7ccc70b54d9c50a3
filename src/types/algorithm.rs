//! This module defines the canonical, type-safe identifier for every algorithm
//! the registry can run.

use crate::error::PrepError;
use crate::sorting::SortMethod;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The closed set of algorithms exposed by the driver.
///
/// This enum replaces name-to-function resolution with compile-time checked
/// identifiers. The textual names are part of the public contract: they are the
/// names accepted on the command line.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    // --- Sorting Engine ---
    Selection,
    Insertion,
    Heap,
    Counting,
    Radix,
    // --- Search & Rotation ---
    BinarySearch,
    RotationPoint,
    // --- Array-Transform Problems ---
    ProductOfIdx,
    #[serde(rename = "highest_product_of_3")]
    HighestProductOf3,
    IsSingleRiffle,
    Shuffle,
    MergeRanges,
}

impl Algorithm {
    /// Every algorithm, in registry order.
    pub const ALL: [Algorithm; 12] = [
        Algorithm::Selection,
        Algorithm::Insertion,
        Algorithm::Heap,
        Algorithm::Counting,
        Algorithm::Radix,
        Algorithm::BinarySearch,
        Algorithm::RotationPoint,
        Algorithm::ProductOfIdx,
        Algorithm::HighestProductOf3,
        Algorithm::IsSingleRiffle,
        Algorithm::Shuffle,
        Algorithm::MergeRanges,
    ];

    /// The canonical name of the algorithm.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Selection => "selection",
            Self::Insertion => "insertion",
            Self::Heap => "heap",
            Self::Counting => "counting",
            Self::Radix => "radix",
            Self::BinarySearch => "binary_search",
            Self::RotationPoint => "rotation_point",
            Self::ProductOfIdx => "product_of_idx",
            Self::HighestProductOf3 => "highest_product_of_3",
            Self::IsSingleRiffle => "is_single_riffle",
            Self::Shuffle => "shuffle",
            Self::MergeRanges => "merge_ranges",
        }
    }

    /// Maps a sorting identifier to its `SortMethod`.
    pub fn sort_method(&self) -> Option<SortMethod> {
        match self {
            Self::Selection => Some(SortMethod::Selection),
            Self::Insertion => Some(SortMethod::Insertion),
            Self::Heap => Some(SortMethod::Heap),
            Self::Counting => Some(SortMethod::Counting),
            Self::Radix => Some(SortMethod::Radix),
            _ => None,
        }
    }

    /// Returns `true` if the algorithm is one of the five sorts.
    pub fn is_sort(&self) -> bool {
        self.sort_method().is_some()
    }

    /// Returns `true` if the algorithm also runs over a sequence of words.
    pub fn accepts_words(&self) -> bool {
        matches!(self, Self::Shuffle | Self::RotationPoint)
    }
}

impl FromStr for Algorithm {
    type Err = PrepError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::ALL
            .iter()
            .copied()
            .find(|algorithm| algorithm.name() == s)
            .ok_or_else(|| PrepError::UnknownAlgorithm(s.to_string()))
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

//==================================================================================
// Unit Tests
//==================================================================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_roundtrip_through_from_str() {
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.name().parse::<Algorithm>().unwrap(), algorithm);
        }
    }

    #[test]
    fn test_serde_name_matches_display() {
        let json = serde_json::to_string(&Algorithm::HighestProductOf3).unwrap();
        assert_eq!(json, "\"highest_product_of_3\"");
    }

    #[test]
    fn test_unknown_name_is_rejected() {
        let err = "bogo".parse::<Algorithm>().unwrap_err();
        assert!(matches!(err, PrepError::UnknownAlgorithm(name) if name == "bogo"));
    }

    #[test]
    fn test_classification() {
        assert!(Algorithm::Radix.is_sort());
        assert!(!Algorithm::MergeRanges.is_sort());
        assert!(Algorithm::Shuffle.accepts_words());
        assert!(!Algorithm::BinarySearch.accepts_words());
    }
}
