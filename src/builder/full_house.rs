use super::runs::runs_by;
use super::{working_set, ConfigError, HandBuilder};
use crate::cards::Card;
use crate::compare::by_value_desc;
use crate::hand::HandData;

/// Two groups of equal-valued cards taken from different value runs.
///
/// The n-group is the highest run holding at least `n_size` cards; the
/// m-group is the highest *other* run holding at least `m_size`.
#[derive(Debug, Clone)]
pub struct FullHouseBuilder {
    name: String,
    n_size: usize,
    m_size: usize,
}

impl FullHouseBuilder {
    pub fn try_new(
        name: impl Into<String>,
        n_size: usize,
        m_size: usize,
    ) -> Result<Self, ConfigError> {
        if let Some(bad) = [n_size, m_size].into_iter().find(|&size| size == 0) {
            return Err(ConfigError::GroupSize(bad));
        }
        Ok(Self { name: name.into(), n_size, m_size })
    }
}

impl HandBuilder for FullHouseBuilder {
    fn name(&self) -> &str {
        &self.name
    }

    fn build(&self, cards: &[Card]) -> Option<HandData> {
        let working = working_set(cards, by_value_desc);
        let runs = runs_by(&working, |c| c.value());
        let n_run = runs.iter().position(|run| run.len() >= self.n_size)?;
        let m_run = (0..runs.len()).find(|&i| i != n_run && runs[i].len() >= self.m_size)?;

        let mut remaining = Vec::new();
        for (i, run) in runs.iter().enumerate() {
            let claimed = match i {
                _ if i == n_run => self.n_size,
                _ if i == m_run => self.m_size,
                _ => 0,
            };
            remaining.extend_from_slice(&run[claimed..]);
        }
        Some(HandData::FullHouse {
            n_group: runs[n_run][..self.n_size].to_vec(),
            m_group: runs[m_run][..self.m_size].to_vec(),
            remaining,
        })
    }
}
