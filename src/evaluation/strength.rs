use super::evaluator::Evaluator;
use super::kicks::Kickers;
use super::ranking::Ranking;
use crate::cards::hand::Hand;
use crate::error::Error;

/// A fully-evaluated hand strength.
///
/// Combines a Ranking (the category and its defining ranks) with the
/// Kickers that break ties inside the category. The derived Ord is
/// lexicographic, ranking first, which is the total showdown order:
/// equal-strength hands compare equal regardless of suits or the order
/// their cards arrived in.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord)]
pub struct Strength {
    value: Ranking,
    kicks: Kickers,
}

impl Strength {
    pub fn ranking(&self) -> Ranking {
        self.value
    }
    pub fn kickers(&self) -> Kickers {
        self.kicks
    }
}

impl From<(Ranking, Kickers)> for Strength {
    fn from((value, kicks): (Ranking, Kickers)) -> Self {
        Self { value, kicks }
    }
}

/// five-card evaluation; see Evaluator::best for the five-of-seven path
impl TryFrom<Hand> for Strength {
    type Error = Error;
    fn try_from(hand: Hand) -> Result<Self, Self::Error> {
        Evaluator::try_from(hand).map(|e| e.strength())
    }
}

impl std::fmt::Display for Strength {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:<18}{}", self.value, self.kicks)
    }
}
