pub(crate) mod flush;
pub(crate) mod full_house;
pub(crate) mod high_card;
pub(crate) mod runs;
pub(crate) mod straight;
pub(crate) mod suit_set;
pub(crate) mod tuples;

pub use flush::FlushBuilder;
pub use full_house::FullHouseBuilder;
pub use high_card::HighCardBuilder;
pub use straight::{
    AnyCard, CommonSuit, Grouper, RoyalCommonSuit, StraightBuilder, Window, MAX_RUN_LENGTH,
};
pub use suit_set::{find_common_suit, SuitSet};
pub use tuples::TuplesBuilder;

use crate::cards::{normalize_aces_high, Card};
use crate::compare::CardComparator;
use crate::hand::{Hand, HandData};
use crate::rules::StandardRules;
use std::fmt;
use tracing::{event, Level};

/// Strategy pattern: each builder tries to carve the cards into one category.
///
/// `build` works on its own copy of `cards`; the caller's slice is never
/// reordered or re-valued. `None` means the cards do not have this
/// category's shape, which is a routine outcome while walking a chain.
pub trait HandBuilder: Send + Sync {
    fn name(&self) -> &str;
    fn build(&self, cards: &[Card]) -> Option<HandData>;
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("group size must be at least 1, got {0}")]
    GroupSize(usize),
    #[error("minimum group count {min} exceeds maximum {max}")]
    GroupBounds { min: usize, max: usize },
    #[error("run length {0} outside 1..={max}", max = straight::MAX_RUN_LENGTH)]
    RunLength(usize),
    #[error("a builder chain needs at least one builder")]
    EmptyChain,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ClassifyError {
    #[error("none of the {builders} builders matched; the chain lacks an always-matching fallback")]
    ChainExhausted { builders: usize },
}

/// Ordered builders, strongest category first.
///
/// The winning builder's rank is `len - index`, so the first builder in the
/// chain produces the highest rank.
pub struct BuilderChain {
    builders: Vec<Box<dyn HandBuilder>>,
}

impl BuilderChain {
    pub fn new(builders: Vec<Box<dyn HandBuilder>>) -> Result<Self, ConfigError> {
        if builders.is_empty() {
            return Err(ConfigError::EmptyChain);
        }
        Ok(Self { builders })
    }

    /// The ten standard poker categories for five-card runs.
    pub fn standard() -> Self {
        match StandardRules::default().build_chain() {
            Ok(chain) => chain,
            Err(err) => unreachable!("default rules are valid: {err}"),
        }
    }

    pub fn len(&self) -> usize {
        self.builders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.builders.is_empty()
    }

    /// Builder names, strongest first.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.builders.iter().map(|b| b.name())
    }

    /// Classify `cards` with the first builder that accepts them.
    ///
    /// ```
    /// use poker_hands::builder::BuilderChain;
    /// use poker_hands::cards::parse_cards;
    ///
    /// let chain = BuilderChain::standard();
    /// let hand = chain.classify(&parse_cards("Ah Kh Qh Jh Th").unwrap()).unwrap();
    /// assert_eq!(hand.name(), "RoyalFlush");
    /// assert_eq!(hand.rank(), 10);
    /// ```
    pub fn classify(&self, cards: &[Card]) -> Result<Hand, ClassifyError> {
        let total = self.builders.len();
        for (index, builder) in self.builders.iter().enumerate() {
            match builder.build(cards) {
                Some(data) => {
                    let rank = total - index;
                    event!(Level::DEBUG, builder = builder.name(), rank, "hand classified");
                    return Ok(Hand::new(rank, builder.name(), data));
                }
                None => event!(Level::TRACE, builder = builder.name(), "builder rejected cards"),
            }
        }
        Err(ClassifyError::ChainExhausted { builders: total })
    }
}

impl fmt::Debug for BuilderChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}

/// Classify `cards` against `chain`; see [`BuilderChain::classify`].
pub fn classify(cards: &[Card], chain: &BuilderChain) -> Result<Hand, ClassifyError> {
    chain.classify(cards)
}

/// Copy `cards`, put aces high and sort with `order`, breaking ties by
/// descending suit so the result does not depend on input order.
pub(crate) fn working_set(cards: &[Card], order: CardComparator) -> Vec<Card> {
    let mut working = cards.to_vec();
    normalize_aces_high(&mut working);
    working.sort_by(|a, b| order(a, b).then_with(|| b.suit().cmp(&a.suit())));
    working
}
