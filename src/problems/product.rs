//! The "product of every other element" array, computed without division.
//!
//! A left-to-right pass stores the running product of everything before `i`,
//! then a right-to-left pass multiplies in the running product of everything
//! after `i`. Zeros are counted up front: two or more make every entry zero,
//! and a single zero leaves one non-zero entry at its own position.

use crate::error::PrepError;

const WHAT: &str = "product of other elements";

/// Returns `out` where `out[i]` is the product of all `values[j]` with `j != i`.
///
/// # Errors
/// `PrepError::ArithmeticOverflow` if an entry of the result leaves the `i64` range.
pub fn product_of_others(values: &[i64]) -> Result<Vec<i64>, PrepError> {
    let mut zeros = values.iter().enumerate().filter(|(_, v)| **v == 0).map(|(i, _)| i);
    match (zeros.next(), zeros.next()) {
        (Some(_), Some(_)) => return Ok(vec![0; values.len()]),
        (Some(zero_at), None) => {
            let mut products = vec![0i64; values.len()];
            products[zero_at] = values
                .iter()
                .filter(|&&v| v != 0)
                .try_fold(1i64, |acc, &v| acc.checked_mul(v))
                .ok_or(PrepError::ArithmeticOverflow(WHAT))?;
            return Ok(products);
        }
        _ => {}
    }

    // Without zeros every running product divides some entry of the result,
    // so an overflow here is an overflow of the answer.
    let mut products = vec![1i64; values.len()];

    // product of all values before i
    let mut so_far: i64 = 1;
    for (i, &value) in values.iter().enumerate() {
        products[i] = so_far;
        if i + 1 < values.len() {
            so_far = so_far.checked_mul(value).ok_or(PrepError::ArithmeticOverflow(WHAT))?;
        }
    }

    // now product of all values after i
    so_far = 1;
    for (i, &value) in values.iter().enumerate().rev() {
        products[i] = products[i]
            .checked_mul(so_far)
            .ok_or(PrepError::ArithmeticOverflow(WHAT))?;
        if i > 0 {
            so_far = so_far.checked_mul(value).ok_or(PrepError::ArithmeticOverflow(WHAT))?;
        }
    }

    Ok(products)
}
