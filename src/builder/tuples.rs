use super::runs::runs_by;
use super::{working_set, ConfigError, HandBuilder};
use crate::cards::Card;
use crate::compare::by_value_desc;
use crate::hand::HandData;

/// N-of-a-kind family: pairs, two pair, trips, quads.
///
/// Every run of equal values at least `group_size` long contributes one
/// tuple made of its first `group_size` cards; everything else is a kicker.
/// The hand matches when the tuple count lies in `min_groups..=max_groups`.
///
/// ```
/// use poker_hands::builder::{HandBuilder, TuplesBuilder};
/// use poker_hands::cards::parse_cards;
///
/// let two_pair = TuplesBuilder::try_new("TwoPair", 2, Some(2), Some(2)).unwrap();
/// assert!(two_pair.build(&parse_cards("9h 9d 4c 4s Ah").unwrap()).is_some());
/// assert!(two_pair.build(&parse_cards("2h 2d 2c 2s 7h").unwrap()).is_none());
/// ```
#[derive(Debug, Clone)]
pub struct TuplesBuilder {
    name: String,
    group_size: usize,
    min_groups: usize,
    max_groups: Option<usize>,
}

impl TuplesBuilder {
    /// `min_groups` defaults to 1, `max_groups` to unbounded.
    pub fn try_new(
        name: impl Into<String>,
        group_size: usize,
        min_groups: Option<usize>,
        max_groups: Option<usize>,
    ) -> Result<Self, ConfigError> {
        if group_size == 0 {
            return Err(ConfigError::GroupSize(group_size));
        }
        let min_groups = min_groups.unwrap_or(1);
        if let Some(max) = max_groups.filter(|&max| max < min_groups) {
            return Err(ConfigError::GroupBounds { min: min_groups, max });
        }
        Ok(Self { name: name.into(), group_size, min_groups, max_groups })
    }
}

impl HandBuilder for TuplesBuilder {
    fn name(&self) -> &str {
        &self.name
    }

    fn build(&self, cards: &[Card]) -> Option<HandData> {
        let working = working_set(cards, by_value_desc);
        let mut tuples = Vec::new();
        let mut remaining = Vec::new();
        for run in runs_by(&working, |c| c.value()) {
            if run.len() >= self.group_size {
                let (tuple, rest) = run.split_at(self.group_size);
                tuples.push(tuple.to_vec());
                remaining.extend_from_slice(rest);
            } else {
                remaining.extend_from_slice(run);
            }
        }

        let count = tuples.len();
        if count < self.min_groups || self.max_groups.is_some_and(|max| count > max) {
            return None;
        }
        Some(HandData::Tuples { tuples, remaining })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;

    fn build(builder: &TuplesBuilder, s: &str) -> Option<(Vec<Vec<u8>>, Vec<u8>)> {
        match builder.build(&parse_cards(s).unwrap())? {
            HandData::Tuples { tuples, remaining } => Some((
                tuples.iter().map(|t| t.iter().map(|c| c.value()).collect()).collect(),
                remaining.iter().map(|c| c.value()).collect(),
            )),
            other => panic!("unexpected payload {other:?}"),
        }
    }

    #[test]
    fn rejects_bad_parameters() {
        assert_eq!(TuplesBuilder::try_new("x", 0, None, None).err(), Some(ConfigError::GroupSize(0)));
        assert_eq!(
            TuplesBuilder::try_new("x", 2, Some(3), Some(2)).err(),
            Some(ConfigError::GroupBounds { min: 3, max: 2 })
        );
        assert_eq!(
            TuplesBuilder::try_new("x", 2, None, Some(0)).err(),
            Some(ConfigError::GroupBounds { min: 1, max: 0 })
        );
    }

    #[test]
    fn single_pair_with_kickers() {
        let pair = TuplesBuilder::try_new("Pair", 2, None, Some(1)).unwrap();
        let (tuples, kickers) = build(&pair, "5c Ah 9d 5s 2h").unwrap();
        assert_eq!(tuples, vec![vec![5, 5]]);
        assert_eq!(kickers, vec![14, 9, 2]);
    }

    #[test]
    fn excess_run_cards_become_kickers() {
        let pair = TuplesBuilder::try_new("Pair", 2, None, None).unwrap();
        let (tuples, kickers) = build(&pair, "8c 8d 8h Kc 3s").unwrap();
        assert_eq!(tuples, vec![vec![8, 8]]);
        assert_eq!(kickers, vec![13, 8, 3]);
    }

    #[test]
    fn four_of_a_kind_is_not_two_pair() {
        let two_pair = TuplesBuilder::try_new("TwoPair", 2, Some(2), Some(2)).unwrap();
        assert!(build(&two_pair, "2c 2d 2h 2s 7c").is_none());
        let quads = TuplesBuilder::try_new("FourOfAKind", 4, None, None).unwrap();
        let (tuples, kickers) = build(&quads, "2c 2d 2h 2s 7c").unwrap();
        assert_eq!(tuples, vec![vec![2, 2, 2, 2]]);
        assert_eq!(kickers, vec![7]);
    }

    #[test]
    fn tuples_in_descending_value_order() {
        let two_pair = TuplesBuilder::try_new("TwoPair", 2, Some(2), None).unwrap();
        let (tuples, kickers) = build(&two_pair, "3c Jd 3h Js Qc 4d 4s").unwrap();
        assert_eq!(tuples, vec![vec![11, 11], vec![4, 4], vec![3, 3]]);
        assert_eq!(kickers, vec![12]);
    }

    #[test]
    fn too_many_groups_fails() {
        let pair = TuplesBuilder::try_new("Pair", 2, None, Some(1)).unwrap();
        assert!(build(&pair, "3c 3d 9h 9s Kc").is_none());
        assert!(build(&pair, "3c 4d 9h Ts Kc").is_none());
    }

    #[test]
    fn low_aces_are_grouped_as_high() {
        use crate::cards::{Suit, ACE_LOW};
        let pair = TuplesBuilder::try_new("Pair", 2, None, None).unwrap();
        let cards = vec![
            Card::from_value(ACE_LOW, Suit::Clubs).unwrap(),
            parse_cards("Ah").unwrap()[0],
            parse_cards("Kh").unwrap()[0],
        ];
        let Some(HandData::Tuples { tuples, .. }) = pair.build(&cards) else {
            panic!("aces pair up");
        };
        assert!(tuples[0].iter().all(|c| c.value() == 14));
    }
}
