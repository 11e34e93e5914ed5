use super::runs::runs_by;
use super::{working_set, ConfigError, HandBuilder};
use crate::cards::Card;
use crate::compare::{by_suit_then_value_desc, by_value_desc};
use crate::hand::HandData;

#[derive(Debug, Clone)]
pub struct FlushBuilder {
    name: String,
    ncards: usize,
}

impl FlushBuilder {
    pub fn try_new(name: impl Into<String>, ncards: usize) -> Result<Self, ConfigError> {
        if ncards == 0 {
            return Err(ConfigError::RunLength(ncards));
        }
        Ok(Self { name: name.into(), ncards })
    }
}

impl HandBuilder for FlushBuilder {
    fn name(&self) -> &str {
        &self.name
    }

    fn build(&self, cards: &[Card]) -> Option<HandData> {
        let working = working_set(cards, by_suit_then_value_desc);
        let runs = runs_by(&working, |c| c.suit());
        let flush_run = runs.iter().position(|run| run.len() >= self.ncards)?;

        let mut remaining = Vec::new();
        for (i, run) in runs.iter().enumerate() {
            let claimed = if i == flush_run { self.ncards } else { 0 };
            remaining.extend_from_slice(&run[claimed..]);
        }
        remaining.sort_by(by_value_desc);
        Some(HandData::Flush { flush_cards: runs[flush_run][..self.ncards].to_vec(), remaining })
    }
}
