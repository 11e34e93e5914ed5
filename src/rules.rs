//! Standard poker ranking expressed as a builder chain.

use crate::builder::{
    AnyCard, BuilderChain, CommonSuit, ConfigError, FlushBuilder, FullHouseBuilder, HandBuilder,
    HighCardBuilder, RoyalCommonSuit, StraightBuilder, TuplesBuilder,
};

/// Category names produced by the standard chain.
pub mod names {
    pub const ROYAL_FLUSH: &str = "RoyalFlush";
    pub const STRAIGHT_FLUSH: &str = "StraightFlush";
    pub const FOUR_OF_A_KIND: &str = "FourOfAKind";
    pub const FULL_HOUSE: &str = "FullHouse";
    pub const FLUSH: &str = "Flush";
    pub const STRAIGHT: &str = "Straight";
    pub const THREE_OF_A_KIND: &str = "ThreeOfAKind";
    pub const TWO_PAIR: &str = "TwoPair";
    pub const PAIR: &str = "Pair";
    pub const HIGH_CARD: &str = "HighestCard";
}

/// Parameters of the standard ranking.
///
/// `run_length` is the number of cards a straight or flush must span.
///
/// ```
/// use poker_hands::cards::parse_cards;
/// use poker_hands::rules::{names, StandardRules};
///
/// let chain = StandardRules { run_length: 3 }.build_chain().unwrap();
/// let hand = chain.classify(&parse_cards("4h 5h 6h").unwrap()).unwrap();
/// assert_eq!(hand.name(), names::STRAIGHT_FLUSH);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StandardRules {
    pub run_length: usize,
}

impl Default for StandardRules {
    fn default() -> Self {
        Self { run_length: 5 }
    }
}

impl StandardRules {
    pub fn build_chain(&self) -> Result<BuilderChain, ConfigError> {
        let run = self.run_length;
        let builders: Vec<Box<dyn HandBuilder>> = vec![
            Box::new(StraightBuilder::try_new(names::ROYAL_FLUSH, run, RoyalCommonSuit)?),
            Box::new(StraightBuilder::try_new(names::STRAIGHT_FLUSH, run, CommonSuit)?),
            Box::new(TuplesBuilder::try_new(names::FOUR_OF_A_KIND, 4, None, None)?),
            Box::new(FullHouseBuilder::try_new(names::FULL_HOUSE, 3, 2)?),
            Box::new(FlushBuilder::try_new(names::FLUSH, run)?),
            Box::new(StraightBuilder::try_new(names::STRAIGHT, run, AnyCard)?),
            Box::new(TuplesBuilder::try_new(names::THREE_OF_A_KIND, 3, None, None)?),
            Box::new(TuplesBuilder::try_new(names::TWO_PAIR, 2, Some(2), None)?),
            Box::new(TuplesBuilder::try_new(names::PAIR, 2, None, Some(1))?),
            Box::new(HighCardBuilder::new(names::HIGH_CARD)),
        ];
        BuilderChain::new(builders)
    }
}
