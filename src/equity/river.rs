use super::showdown::Showdown;
use crate::cards::board::Board;
use crate::cards::deck::Deck;
use crate::cards::hand::Hand;
use crate::cards::hands::HandIterator;
use crate::cards::hole::Hole;
use crate::error::Error;
use crate::evaluation::evaluator::Evaluator;
use crate::evaluation::strength::Strength;
use rayon::prelude::*;

/// A fully-dealt scenario: two hole cards and a five-card board.
///
/// All seven cards are mutually distinct by construction. Equity is
/// settled exhaustively against every one of the C(45,2) = 990 opponent
/// holdings from the undealt deck; there is nothing to sample and
/// nothing to approximate.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq)]
pub struct River {
    hole: Hole,
    board: Board,
}

impl River {
    pub fn hole(&self) -> Hole {
        self.hole
    }
    pub fn board(&self) -> Board {
        self.board
    }

    /// Hero's best five-of-seven strength, computed once per scenario.
    pub fn hero(&self) -> Strength {
        Evaluator::best(Hand::from(*self)).expect("seven cards")
    }

    /// Every possible opponent holding from the 45 undealt cards.
    pub fn pockets(&self) -> HandIterator {
        let deck = Deck::without(&Hand::from(*self));
        HandIterator::subsets(Hand::from(deck), 2)
    }

    /// Settle all 990 showdowns.
    ///
    /// The opponent enumeration is embarrassingly parallel: workers share
    /// the read-only board and hero strength, tally privately, and merge
    /// by summation.
    pub fn showdown(&self) -> Showdown {
        let hero = self.hero();
        let board = Hand::from(self.board);
        self.pockets()
            .collect::<Vec<Hand>>()
            .into_par_iter()
            .map(|pocket| Hand::add(pocket, board))
            .map(|seven| Evaluator::best(seven).expect("seven cards"))
            .map(|villain| hero.cmp(&villain))
            .fold(Showdown::empty, Showdown::tally)
            .reduce(Showdown::empty, Showdown::merge)
    }
}

/// assemble from validated parts; overlap is a caller bug
impl From<(Hole, Board)> for River {
    fn from((hole, board): (Hole, Board)) -> Self {
        assert!(!Hand::from(hole).intersects(&Hand::from(board)));
        Self { hole, board }
    }
}

/// coalesce hole + board into a single seven-card Hand
impl From<River> for Hand {
    fn from(river: River) -> Self {
        Hand::add(Hand::from(river.hole), Hand::from(river.board))
    }
}

/// str isomorphism, hole and board split on the separator
impl TryFrom<&str> for River {
    type Error = Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let (hole, board) = s
            .split_once(Self::SEPARATOR)
            .ok_or_else(|| Error::InvalidCardFormat(s.to_string()))?;
        let hole = Hole::try_from(hole)?;
        let board = Board::try_from(board)?;
        let union = u64::from(Hand::from(hole)) | u64::from(Hand::from(board));
        match Hand::from(union).size() {
            7 => Ok(Self { hole, board }),
            n => Err(Error::InvalidHandSize {
                expected: 7,
                found: n,
            }),
        }
    }
}

impl River {
    /// String separator between hole and board.
    pub const SEPARATOR: &'static str = "~";
}

impl std::fmt::Display for River {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} {} {}", self.hole, Self::SEPARATOR, self.board)
    }
}

impl crate::Arbitrary for River {
    fn random() -> Self {
        let mut deck = Deck::new();
        let hole = deck.hole();
        let board = Board::try_from(deck.deal(5)).expect("five dealt cards");
        Self { hole, board }
    }
}
