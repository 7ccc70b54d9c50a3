//! The algorithm registry: a lookup table from `Algorithm` to a function value.
//!
//! The table is built once by [`Registry::standard`] and is immutable
//! afterwards. Every entry has the same shape, `AlgorithmFn`, which unwraps
//! the `Input`, calls the algorithm and wraps its result in an `Outcome`.
//! [`Registry::run`] adds timing and logging around each call.

use rand::RngCore;
use std::collections::HashMap;
use std::time::Instant;

use crate::error::PrepError;
use crate::problems;
use crate::search;
use crate::sorting::{self, SortMethod};
use crate::types::{Algorithm, Input, Outcome};

/// The uniform signature of every registry entry.
///
/// The random source is only consumed by `shuffle`.
pub type AlgorithmFn = fn(Input, &mut dyn RngCore) -> Result<Outcome, PrepError>;

pub struct Registry {
    table: HashMap<Algorithm, AlgorithmFn>,
}

impl Registry {
    /// Builds the table holding every algorithm.
    pub fn standard() -> Self {
        let entries: [(Algorithm, AlgorithmFn); 12] = [
            (Algorithm::Selection, run_selection),
            (Algorithm::Insertion, run_insertion),
            (Algorithm::Heap, run_heap),
            (Algorithm::Counting, run_counting),
            (Algorithm::Radix, run_radix),
            (Algorithm::BinarySearch, run_binary_search),
            (Algorithm::RotationPoint, run_rotation_point),
            (Algorithm::ProductOfIdx, run_product_of_idx),
            (Algorithm::HighestProductOf3, run_highest_product_of_3),
            (Algorithm::IsSingleRiffle, run_is_single_riffle),
            (Algorithm::Shuffle, run_shuffle),
            (Algorithm::MergeRanges, run_merge_ranges),
        ];
        Self {
            table: entries.into_iter().collect(),
        }
    }

    /// Looks up the function registered for `algorithm`.
    pub fn get(&self, algorithm: Algorithm) -> Option<AlgorithmFn> {
        self.table.get(&algorithm).copied()
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Runs `algorithm` on `input`, logging its duration.
    pub fn run(
        &self,
        algorithm: Algorithm,
        input: Input,
        rng: &mut dyn RngCore,
    ) -> Result<Outcome, PrepError> {
        let func = self
            .get(algorithm)
            .ok_or_else(|| PrepError::UnknownAlgorithm(algorithm.to_string()))?;

        let input_len = input.len();
        let start = Instant::now();
        let result = func(input, rng);
        let duration = start.elapsed();

        match &result {
            Ok(_) => log::info!(
                "{:<22} | n = {:<8} | Time: {:.2?}",
                algorithm.name(),
                input_len,
                duration
            ),
            Err(e) => log::warn!("{} rejected its input: {}", algorithm.name(), e),
        }
        result
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::standard()
    }
}

//==================================================================================
// Entry Adapters
//==================================================================================

fn expect_ints(algorithm: Algorithm, input: Input) -> Result<Vec<i64>, PrepError> {
    match input {
        Input::Ints(values) => Ok(values),
        Input::Words(_) => Err(PrepError::UnsupportedInput {
            algorithm: algorithm.to_string(),
            reason: "expected integers, got words".to_string(),
        }),
    }
}

fn run_sort(method: SortMethod, algorithm: Algorithm, input: Input) -> Result<Outcome, PrepError> {
    let mut values = expect_ints(algorithm, input)?;
    sorting::sort(method, &mut values)?;
    Ok(Outcome::Sequence(values))
}

fn run_selection(input: Input, _: &mut dyn RngCore) -> Result<Outcome, PrepError> {
    run_sort(SortMethod::Selection, Algorithm::Selection, input)
}

fn run_insertion(input: Input, _: &mut dyn RngCore) -> Result<Outcome, PrepError> {
    run_sort(SortMethod::Insertion, Algorithm::Insertion, input)
}

fn run_heap(input: Input, _: &mut dyn RngCore) -> Result<Outcome, PrepError> {
    run_sort(SortMethod::Heap, Algorithm::Heap, input)
}

fn run_counting(input: Input, _: &mut dyn RngCore) -> Result<Outcome, PrepError> {
    run_sort(SortMethod::Counting, Algorithm::Counting, input)
}

fn run_radix(input: Input, _: &mut dyn RngCore) -> Result<Outcome, PrepError> {
    run_sort(SortMethod::Radix, Algorithm::Radix, input)
}

fn run_binary_search(input: Input, _: &mut dyn RngCore) -> Result<Outcome, PrepError> {
    let values = expect_ints(Algorithm::BinarySearch, input)?;
    let outcome = search::binary_search(&values)?;
    Ok(Outcome::Search {
        needle: outcome.needle,
        index: outcome.index_or_sentinel(),
    })
}

fn run_rotation_point(input: Input, _: &mut dyn RngCore) -> Result<Outcome, PrepError> {
    let point = match &input {
        Input::Ints(values) => search::rotation_point(values),
        Input::Words(words) => search::rotation_point(words),
    };
    Ok(Outcome::Rotation(point))
}

fn run_product_of_idx(input: Input, _: &mut dyn RngCore) -> Result<Outcome, PrepError> {
    let values = expect_ints(Algorithm::ProductOfIdx, input)?;
    Ok(Outcome::Sequence(problems::product_of_others(&values)?))
}

fn run_highest_product_of_3(input: Input, _: &mut dyn RngCore) -> Result<Outcome, PrepError> {
    let values = expect_ints(Algorithm::HighestProductOf3, input)?;
    Ok(Outcome::Product(problems::highest_product_of_three(&values)?))
}

fn run_is_single_riffle(input: Input, _: &mut dyn RngCore) -> Result<Outcome, PrepError> {
    let cards = expect_ints(Algorithm::IsSingleRiffle, input)?;
    Ok(Outcome::Riffle(problems::is_single_riffle(&cards)?))
}

fn run_shuffle(input: Input, rng: &mut dyn RngCore) -> Result<Outcome, PrepError> {
    match input {
        Input::Ints(mut values) => {
            problems::shuffle(&mut values, rng);
            Ok(Outcome::Sequence(values))
        }
        Input::Words(mut words) => {
            problems::shuffle(&mut words, rng);
            Ok(Outcome::Words(words))
        }
    }
}

fn run_merge_ranges(input: Input, _: &mut dyn RngCore) -> Result<Outcome, PrepError> {
    let values = expect_ints(Algorithm::MergeRanges, input)?;
    Ok(Outcome::Intervals(problems::merge_ranges(&values)?))
}

//==================================================================================
// Unit Tests
//==================================================================================
#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Interval;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn run(algorithm: Algorithm, input: impl Into<Input>) -> Result<Outcome, PrepError> {
        let mut rng = StdRng::seed_from_u64(11);
        Registry::standard().run(algorithm, input.into(), &mut rng)
    }

    #[test]
    fn test_every_algorithm_is_registered() {
        let registry = Registry::standard();
        assert_eq!(registry.len(), Algorithm::ALL.len());
        for algorithm in Algorithm::ALL {
            assert!(registry.get(algorithm).is_some(), "{} missing", algorithm);
        }
    }

    #[test]
    fn test_sorts_through_registry() {
        for algorithm in Algorithm::ALL.into_iter().filter(Algorithm::is_sort) {
            let outcome = run(algorithm, vec![3i64, 1, 2]).unwrap();
            assert_eq!(outcome, Outcome::Sequence(vec![1, 2, 3]), "{}", algorithm);
        }
    }

    #[test]
    fn test_problems_through_registry() {
        assert_eq!(
            run(Algorithm::ProductOfIdx, vec![1i64, 2, 3, 4]).unwrap(),
            Outcome::Sequence(vec![24, 12, 8, 6])
        );
        assert_eq!(
            run(Algorithm::HighestProductOf3, vec![-10i64, -10, 1, 3, 2]).unwrap(),
            Outcome::Product(300)
        );
        assert_eq!(
            run(Algorithm::BinarySearch, vec![5i64, 1, 9, 3, 7, 5]).unwrap(),
            Outcome::Search { needle: Some(5), index: 2 }
        );
        assert_eq!(
            run(Algorithm::RotationPoint, vec![4i64, 5, 6, 7, 0, 1, 2]).unwrap(),
            Outcome::Rotation(4)
        );
        assert_eq!(
            run(Algorithm::MergeRanges, vec![1i64, 4, 4, 5]).unwrap(),
            Outcome::Intervals(vec![Interval::new(1, 5)])
        );
        let deck: Vec<i64> = (1..=52).collect();
        assert_eq!(run(Algorithm::IsSingleRiffle, deck).unwrap(), Outcome::Riffle(true));
    }

    #[test]
    fn test_word_inputs() {
        let words: Vec<String> = ["c", "d", "a", "b"].iter().map(|s| s.to_string()).collect();
        assert_eq!(run(Algorithm::RotationPoint, words.clone()).unwrap(), Outcome::Rotation(2));

        match run(Algorithm::Shuffle, words).unwrap() {
            Outcome::Words(mut shuffled) => {
                shuffled.sort();
                assert_eq!(shuffled, vec!["a", "b", "c", "d"]);
            }
            other => panic!("unexpected outcome {:?}", other),
        }

        let err = run(Algorithm::Heap, vec!["x".to_string()]).unwrap_err();
        assert!(matches!(err, PrepError::UnsupportedInput { .. }));
    }

    #[test]
    fn test_precondition_errors_surface() {
        let err = run(Algorithm::HighestProductOf3, vec![1i64, 2]).unwrap_err();
        assert!(err.is_precondition_violation());

        let err = run(Algorithm::IsSingleRiffle, vec![1i64; 10]).unwrap_err();
        assert!(matches!(err, PrepError::DeckLength(10)));

        let err = run(Algorithm::MergeRanges, vec![1i64]).unwrap_err();
        assert!(matches!(err, PrepError::OddLength(1)));
    }
}
