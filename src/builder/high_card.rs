use super::{working_set, HandBuilder};
use crate::cards::Card;
use crate::compare::by_value_desc;
use crate::hand::HandData;

/// Fallback category: every card, highest first. Always matches.
#[derive(Debug, Clone)]
pub struct HighCardBuilder {
    name: String,
}

impl HighCardBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl HandBuilder for HighCardBuilder {
    fn name(&self) -> &str {
        &self.name
    }

    fn build(&self, cards: &[Card]) -> Option<HandData> {
        Some(HandData::HighCard(working_set(cards, by_value_desc)))
    }
}
