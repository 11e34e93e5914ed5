use crate::cards::Card;

/// Split a sorted slice into maximal runs of cards sharing `key`.
///
/// Single linear pass with a start and an end cursor. Equal keys must be
/// contiguous in `cards` for each key to land in exactly one run.
pub(crate) fn runs_by<K, F>(cards: &[Card], key: F) -> Vec<&[Card]>
where
    K: PartialEq,
    F: Fn(&Card) -> K,
{
    let mut runs = Vec::new();
    let mut start = 0;
    while start < cards.len() {
        let current = key(&cards[start]);
        let mut end = start + 1;
        while end < cards.len() && key(&cards[end]) == current {
            end += 1;
        }
        runs.push(&cards[start..end]);
        start = end;
    }
    runs
}
