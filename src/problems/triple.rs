//! Highest product of any three elements in one greedy O(n) pass.
//!
//! The pass tracks five running values: the highest and lowest single element,
//! the highest and lowest product of two, and the highest product of three.
//! Keeping the lowest product of two is what lets two large negatives win.

use crate::error::PrepError;

const WHAT: &str = "highest product of three";

// Products of two i64 values always fit in i128. Products of three saturate,
// which keeps their order, so only the final answer needs a range check.
#[inline]
fn mul(a: i128, b: i128) -> i128 {
    a.saturating_mul(b)
}

/// Returns the largest product obtainable from three distinct positions.
///
/// # Errors
/// `PrepError::InsufficientValues` for fewer than three elements, and
/// `PrepError::ArithmeticOverflow` if the highest product leaves the `i64` range.
pub fn highest_product_of_three(values: &[i64]) -> Result<i64, PrepError> {
    if values.len() < 3 {
        return Err(PrepError::InsufficientValues {
            required: 3,
            actual: values.len(),
        });
    }

    let first = i128::from(values[0]);
    let second = i128::from(values[1]);
    let mut highest = first.max(second);
    let mut lowest = first.min(second);
    let mut highest_product_of_2 = first * second;
    let mut lowest_product_of_2 = highest_product_of_2;
    let mut highest_product_of_3 = mul(highest_product_of_2, i128::from(values[2]));

    for current in values[2..].iter().map(|&v| i128::from(v)) {
        // Every update reads only the previous step's values.
        highest_product_of_3 = highest_product_of_3
            .max(mul(current, highest_product_of_2))
            .max(mul(current, lowest_product_of_2));

        let with_highest = current * highest;
        let with_lowest = current * lowest;
        highest_product_of_2 = highest_product_of_2.max(with_highest).max(with_lowest);
        lowest_product_of_2 = lowest_product_of_2.min(with_highest).min(with_lowest);

        highest = highest.max(current);
        lowest = lowest.min(current);
    }

    i64::try_from(highest_product_of_3).map_err(|_| PrepError::ArithmeticOverflow(WHAT))
}

//==================================================================================
// Unit Tests
//==================================================================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_negatives_win() {
        assert_eq!(highest_product_of_three(&[-10, -10, 1, 3, 2]).unwrap(), 300);
    }

    #[test]
    fn test_all_positive() {
        assert_eq!(highest_product_of_three(&[1, 10, -5, 1, -100]).unwrap(), 5000);
        assert_eq!(highest_product_of_three(&[5, 4, 3, 2, 1]).unwrap(), 60);
    }

    #[test]
    fn test_all_negative() {
        assert_eq!(highest_product_of_three(&[-5, -4, -3, -2, -1]).unwrap(), -6);
    }

    #[test]
    fn test_exactly_three() {
        assert_eq!(highest_product_of_three(&[2, -3, 4]).unwrap(), -24);
    }

    #[test]
    fn test_fewer_than_three_is_precondition_violation() {
        let err = highest_product_of_three(&[1, 2]).unwrap_err();
        assert!(matches!(err, PrepError::InsufficientValues { required: 3, actual: 2 }));
        assert!(err.is_precondition_violation());
        assert!(highest_product_of_three(&[]).is_err());
    }

    #[test]
    fn test_large_pairs_with_zero_answer() {
        assert_eq!(highest_product_of_three(&[1 << 32, 1 << 32, 0]).unwrap(), 0);
        assert_eq!(highest_product_of_three(&[1 << 62, 1 << 62, -(1 << 62), 0]).unwrap(), 0);
    }

    #[test]
    fn test_overflowing_answer_is_reported() {
        assert!(matches!(
            highest_product_of_three(&[1 << 32, 1 << 32, 1 << 32]),
            Err(PrepError::ArithmeticOverflow(_))
        ));
    }
}
