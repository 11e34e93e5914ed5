use crate::cards::Card;
use crate::compare::{by_value_asc, compare_card_sequences};
use core::cmp::Ordering;
use tracing::{event, Level};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CompareError {
    #[error("cannot compare a {left} hand with a {right} hand of the same rank")]
    CategoryMismatch { left: String, right: String },
}

/// Category-specific decomposition of the classified cards.
///
/// Every card list is stored highest value first. Kicker lists hold the
/// cards that did not take part in the category's shape.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum HandData {
    HighCard(Vec<Card>),
    Tuples { tuples: Vec<Vec<Card>>, remaining: Vec<Card> },
    FullHouse { n_group: Vec<Card>, m_group: Vec<Card>, remaining: Vec<Card> },
    Flush { flush_cards: Vec<Card>, remaining: Vec<Card> },
    Straight { straight_cards: Vec<Card>, remaining: Vec<Card> },
}

impl HandData {
    /// Short label of the payload shape, used in error messages.
    pub const fn shape(&self) -> &'static str {
        match self {
            HandData::HighCard(_) => "high-card",
            HandData::Tuples { .. } => "tuples",
            HandData::FullHouse { .. } => "full-house",
            HandData::Flush { .. } => "flush",
            HandData::Straight { .. } => "straight",
        }
    }

    /// All cards held by the payload, category cards first.
    pub fn cards(&self) -> Vec<Card> {
        match self {
            HandData::HighCard(cards) => cards.clone(),
            HandData::Tuples { tuples, remaining } => {
                tuples.iter().flatten().chain(remaining.iter()).copied().collect()
            }
            HandData::FullHouse { n_group, m_group, remaining } => {
                n_group.iter().chain(m_group).chain(remaining).copied().collect()
            }
            HandData::Flush { flush_cards: shape, remaining }
            | HandData::Straight { straight_cards: shape, remaining } => {
                shape.iter().chain(remaining).copied().collect()
            }
        }
    }

    /// Tie-break two payloads of the same shape. `None` when shapes differ.
    fn compare_same_shape(&self, other: &HandData) -> Option<Ordering> {
        let ord = match (self, other) {
            (HandData::HighCard(a), HandData::HighCard(b)) => {
                compare_card_sequences(a, b, by_value_asc)
            }
            (
                HandData::Tuples { tuples: ta, remaining: ra },
                HandData::Tuples { tuples: tb, remaining: rb },
            ) => ta
                .len()
                .cmp(&tb.len())
                .then_with(|| {
                    ta.iter()
                        .zip(tb)
                        .map(|(a, b)| compare_card_sequences(a, b, by_value_asc))
                        .find(|ord| ord.is_ne())
                        .unwrap_or(Ordering::Equal)
                })
                .then_with(|| compare_card_sequences(ra, rb, by_value_asc)),
            // Kickers never separate full houses: the two groups are the hand.
            (
                HandData::FullHouse { n_group: na, m_group: ma, .. },
                HandData::FullHouse { n_group: nb, m_group: mb, .. },
            ) => compare_card_sequences(na, nb, by_value_asc)
                .then_with(|| compare_card_sequences(ma, mb, by_value_asc)),
            (
                HandData::Flush { flush_cards: a, remaining: ra },
                HandData::Flush { flush_cards: b, remaining: rb },
            )
            | (
                HandData::Straight { straight_cards: a, remaining: ra },
                HandData::Straight { straight_cards: b, remaining: rb },
            ) => compare_card_sequences(a, b, by_value_asc)
                .then_with(|| compare_card_sequences(ra, rb, by_value_asc)),
            _ => return None,
        };
        Some(ord)
    }
}

/// A classified hand: the winning builder's category name, its rank within
/// the chain that produced it, and the decomposed cards.
///
/// Hands are only produced by [`crate::builder::BuilderChain::classify`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hand {
    rank: usize,
    name: String,
    data: HandData,
}

impl Hand {
    pub(crate) fn new(rank: usize, name: impl Into<String>, data: HandData) -> Self {
        Self { rank, name: name.into(), data }
    }

    /// Strength of the category within its chain; higher is stronger.
    pub fn rank(&self) -> usize {
        self.rank
    }

    /// Category name given by the builder that produced this hand.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn data(&self) -> &HandData {
        &self.data
    }

    /// Compare against a hand of the same category.
    pub fn compare_to(&self, other: &Hand) -> Result<Ordering, CompareError> {
        let mismatch = || CompareError::CategoryMismatch {
            left: self.name.clone(),
            right: other.name.clone(),
        };
        if self.name != other.name {
            return Err(mismatch());
        }
        self.data.compare_same_shape(&other.data).ok_or_else(mismatch)
    }
}

/// Order two classified hands: rank first, then the category's own tie-break.
///
/// Two hands with the same rank must come from the same category; anything
/// else is reported as [`CompareError::CategoryMismatch`].
///
/// ```
/// use poker_hands::builder::BuilderChain;
/// use poker_hands::cards::parse_cards;
/// use poker_hands::hand::compare_hands;
///
/// let chain = BuilderChain::standard();
/// let aces = chain.classify(&parse_cards("Ah Ad Ac Kh Kd").unwrap()).unwrap();
/// let kings = chain.classify(&parse_cards("Kh Kd Kc Ah Ad").unwrap()).unwrap();
/// assert!(compare_hands(&aces, &kings).unwrap().is_gt());
/// ```
pub fn compare_hands(a: &Hand, b: &Hand) -> Result<Ordering, CompareError> {
    if a.rank != b.rank {
        return Ok(a.rank.cmp(&b.rank));
    }
    let ord = a.compare_to(b);
    if let Err(err) = &ord {
        event!(Level::DEBUG, rank = a.rank, %err, "refusing to order hands");
    }
    ord
}
