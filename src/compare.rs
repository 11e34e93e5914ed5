//! Stateless card orderings.
//!
//! These compare raw card values, so a low ace (1) sorts below a two while a
//! high ace (14) sorts above a king. Builders use them both to sort their
//! working set and to break ties between hands of one category.

use crate::cards::Card;
use core::cmp::Ordering;

/// Signature shared by every element comparator in this module.
pub type CardComparator = fn(&Card, &Card) -> Ordering;

pub fn by_value_asc(a: &Card, b: &Card) -> Ordering {
    a.value().cmp(&b.value())
}

pub fn by_value_desc(a: &Card, b: &Card) -> Ordering {
    b.value().cmp(&a.value())
}

/// Suit first, then value, both ascending.
pub fn by_suit_then_value_asc(a: &Card, b: &Card) -> Ordering {
    a.suit().cmp(&b.suit()).then(a.value().cmp(&b.value()))
}

/// Suit first, then value, both descending.
pub fn by_suit_then_value_desc(a: &Card, b: &Card) -> Ordering {
    b.suit().cmp(&a.suit()).then(b.value().cmp(&a.value()))
}

/// Lexicographic comparison of two card sequences.
///
/// Elements are compared pairwise over the shorter length; the first
/// non-equal pair decides. If every compared pair ties, the shorter sequence
/// is the lesser one and equal-length sequences are equal.
///
/// ```
/// use poker_hands::cards::parse_cards;
/// use poker_hands::compare::{by_value_asc, compare_card_sequences};
/// use std::cmp::Ordering;
///
/// let a = parse_cards("Kh Qd 9c").unwrap();
/// let b = parse_cards("Kc Qs").unwrap();
/// assert_eq!(compare_card_sequences(&a, &b, by_value_asc), Ordering::Greater);
/// ```
pub fn compare_card_sequences(a: &[Card], b: &[Card], cmp: CardComparator) -> Ordering {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| cmp(x, y))
        .find(|ord| ord.is_ne())
        .unwrap_or_else(|| a.len().cmp(&b.len()))
}
