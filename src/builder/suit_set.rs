use crate::cards::{Card, Suit};

/// Set of suits packed into the low four bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SuitSet(u8);

impl SuitSet {
    pub const EMPTY: SuitSet = SuitSet(0);

    /// Suits present among `cards`.
    pub fn of(cards: &[Card]) -> Self {
        cards.iter().fold(Self::EMPTY, |set, card| set.with(card.suit()))
    }

    pub const fn with(self, suit: Suit) -> Self {
        SuitSet(self.0 | 1 << suit.index())
    }

    pub const fn contains(self, suit: Suit) -> bool {
        self.0 & (1 << suit.index()) != 0
    }

    pub const fn intersect(self, other: SuitSet) -> Self {
        SuitSet(self.0 & other.0)
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Lowest-indexed suit in the set.
    pub fn first(self) -> Option<Suit> {
        Suit::ALL.into_iter().find(|&suit| self.contains(suit))
    }
}

/// Find a suit represented in every group of a straight window.
///
/// Starts from the suits of the first group and narrows by intersection at
/// each following group, so the cost is linear in the number of cards.
///
/// ```
/// use poker_hands::builder::find_common_suit;
/// use poker_hands::cards::{parse_cards, Suit};
///
/// let groups = vec![
///     parse_cards("Kh Kd").unwrap(),
///     parse_cards("Qh Qs").unwrap(),
///     parse_cards("Jh").unwrap(),
/// ];
/// assert_eq!(find_common_suit(&groups), Some(Suit::Hearts));
/// ```
pub fn find_common_suit(groups: &[Vec<Card>]) -> Option<Suit> {
    let (first, rest) = groups.split_first()?;
    let mut viable = SuitSet::of(first);
    for group in rest {
        viable = viable.intersect(SuitSet::of(group));
        if viable.is_empty() {
            return None;
        }
    }
    viable.first()
}
