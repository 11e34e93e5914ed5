use super::suit_set::find_common_suit;
use super::{ConfigError, HandBuilder};
use crate::cards::{Card, ACE_HIGH, ACE_LOW, KING};
use crate::hand::HandData;

/// Longest run a window can span without needing an ace at both ends.
pub const MAX_RUN_LENGTH: usize = 13;

/// A candidate run of consecutive values, highest position first.
///
/// `groups[i]` holds every card that can fill position `top - i`. Aces
/// appear in the group at position 14 or 1 already carrying that value.
#[derive(Debug, Clone, Copy)]
pub struct Window<'a> {
    top: u8,
    groups: &'a [Vec<Card>],
}

impl<'a> Window<'a> {
    pub fn new(top: u8, groups: &'a [Vec<Card>]) -> Self {
        Self { top, groups }
    }

    /// Value of the highest position in the window.
    pub fn top(&self) -> u8 {
        self.top
    }

    pub fn groups(&self) -> &'a [Vec<Card>] {
        self.groups
    }
}

/// Decides whether a complete window forms this builder's straight and
/// which card of each group it uses.
pub trait Grouper: Send + Sync {
    /// One index per group, or `None` to reject the window.
    fn select(&self, window: &Window<'_>) -> Option<Vec<usize>>;
}

/// Plain straight: suits are irrelevant, take the first card at each value.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnyCard;

impl Grouper for AnyCard {
    fn select(&self, window: &Window<'_>) -> Option<Vec<usize>> {
        Some(vec![0; window.groups().len()])
    }
}

/// Straight flush: every position must offer a card of one shared suit.
#[derive(Debug, Clone, Copy, Default)]
pub struct CommonSuit;

impl Grouper for CommonSuit {
    fn select(&self, window: &Window<'_>) -> Option<Vec<usize>> {
        let suit = find_common_suit(window.groups())?;
        window.groups().iter().map(|group| group.iter().position(|c| c.suit() == suit)).collect()
    }
}

/// Royal flush: a common-suit run topped by the high ace.
#[derive(Debug, Clone, Copy, Default)]
pub struct RoyalCommonSuit;

impl Grouper for RoyalCommonSuit {
    fn select(&self, window: &Window<'_>) -> Option<Vec<usize>> {
        if window.top() != ACE_HIGH {
            return None;
        }
        CommonSuit.select(window)
    }
}

/// Straight family builder: slides a window of `ncards` consecutive values
/// from the ace-high end downwards and commits the first window its
/// [`Grouper`] accepts.
///
/// ```
/// use poker_hands::builder::{AnyCard, HandBuilder, StraightBuilder};
/// use poker_hands::cards::parse_cards;
/// use poker_hands::hand::HandData;
///
/// let straight = StraightBuilder::try_new("Straight", 5, AnyCard).unwrap();
/// let Some(HandData::Straight { straight_cards, .. }) =
///     straight.build(&parse_cards("Ah 2d 3c 4s 5h").unwrap())
/// else {
///     panic!("wheel is a straight");
/// };
/// let values: Vec<u8> = straight_cards.iter().map(|c| c.value()).collect();
/// assert_eq!(values, vec![5, 4, 3, 2, 1]);
/// ```
#[derive(Debug, Clone)]
pub struct StraightBuilder<G> {
    name: String,
    ncards: usize,
    grouper: G,
}

impl<G: Grouper> StraightBuilder<G> {
    pub fn try_new(name: impl Into<String>, ncards: usize, grouper: G) -> Result<Self, ConfigError> {
        if ncards == 0 || ncards > MAX_RUN_LENGTH {
            return Err(ConfigError::RunLength(ncards));
        }
        Ok(Self { name: name.into(), ncards, grouper })
    }
}

impl<G: Grouper> HandBuilder for StraightBuilder<G> {
    fn name(&self) -> &str {
        &self.name
    }

    fn build(&self, cards: &[Card]) -> Option<HandData> {
        let mut buckets = Buckets::new(cards);
        let len = self.ncards as u8;

        let mut found = None;
        for top in (len..=ACE_HIGH).rev() {
            let positions = window_positions(top, len);
            let groups: Vec<Vec<Card>> = positions.clone().map(|pos| buckets.at(pos)).collect();
            if groups.iter().any(Vec::is_empty) {
                continue;
            }
            let picks = self.grouper.select(&Window::new(top, &groups));
            if let Some(picks) = picks.filter(|picks| fits(picks, &groups)) {
                found = Some((positions, picks));
                break;
            }
        }

        let (positions, picks) = found?;
        let straight_cards: Vec<Card> =
            positions.zip(picks).map(|(pos, pick)| buckets.take(pos, pick)).collect();
        Some(HandData::Straight { straight_cards, remaining: buckets.into_kickers() })
    }
}

fn window_positions(top: u8, len: u8) -> impl Iterator<Item = u8> + Clone {
    (top + 1 - len..=top).rev()
}

/// Groupers are pluggable; ignore selections that do not index every group.
fn fits(picks: &[usize], groups: &[Vec<Card>]) -> bool {
    picks.len() == groups.len() && picks.iter().zip(groups).all(|(&pick, group)| pick < group.len())
}

/// Cards bucketed by value. Aces live in their own pool because they can
/// serve position 14 (above the king) or position 1 (below the two).
struct Buckets {
    by_value: [Vec<Card>; KING as usize + 1],
    aces: Vec<Card>,
}

impl Buckets {
    fn new(cards: &[Card]) -> Self {
        let mut sorted = cards.to_vec();
        sorted.sort_by(|a, b| b.cmp(a));

        let mut buckets =
            Buckets { by_value: std::array::from_fn(|_| Vec::new()), aces: Vec::new() };
        for card in sorted {
            if card.is_ace() {
                buckets.aces.push(card.ace_as(ACE_HIGH));
            } else {
                buckets.by_value[card.value() as usize].push(card);
            }
        }
        buckets
    }

    /// Cards able to fill `pos`, with aces re-valued to match it.
    fn at(&self, pos: u8) -> Vec<Card> {
        match pos {
            ACE_LOW | ACE_HIGH => self.aces.iter().map(|ace| ace.ace_as(pos)).collect(),
            _ => self.by_value[pos as usize].clone(),
        }
    }

    fn take(&mut self, pos: u8, index: usize) -> Card {
        match pos {
            ACE_LOW | ACE_HIGH => self.aces.remove(index).ace_as(pos),
            _ => self.by_value[pos as usize].remove(index),
        }
    }

    /// Leftover cards, highest first; unused aces stay high.
    fn into_kickers(self) -> Vec<Card> {
        let Buckets { by_value, aces } = self;
        aces.into_iter().chain(by_value.into_iter().rev().flatten()).collect()
    }
}
