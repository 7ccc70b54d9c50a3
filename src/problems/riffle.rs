//! Single-riffle validation against the canonical deck `1..=52`.
//!
//! The canonical deck is split into `1..=26` and `27..=52`. A candidate is a
//! single riffle if it can be read as an interleaving of the two halves with
//! each half kept in its original order.

use crate::error::PrepError;

pub const DECK_SIZE: usize = 52;
const HALF: usize = DECK_SIZE / 2;

/// Returns `true` if `cards` is a single riffle of the canonical deck.
///
/// Each card is matched against the next expected card of the first half,
/// then of the second half; a card matching neither fails immediately.
/// Duplicates are not detected.
///
/// # Errors
/// `PrepError::DeckLength` if `cards` does not hold exactly 52 cards.
pub fn is_single_riffle(cards: &[i64]) -> Result<bool, PrepError> {
    if cards.len() != DECK_SIZE {
        return Err(PrepError::DeckLength(cards.len()));
    }

    let deck: Vec<i64> = (1..=DECK_SIZE as i64).collect();
    let (half1, half2) = deck.split_at(HALF);
    let mut half1_idx = 0;
    let mut half2_idx = 0;

    for &card in cards {
        if half1_idx < HALF && card == half1[half1_idx] {
            half1_idx += 1;
        } else if half2_idx < HALF && card == half2[half2_idx] {
            half2_idx += 1;
        } else {
            return Ok(false);
        }
    }
    Ok(true)
}
