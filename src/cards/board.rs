use super::deck::Deck;
use super::hand::Hand;
use crate::error::Error;

/// The five community cards of a fully-dealt board.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub struct Board(Hand);

impl From<Board> for Hand {
    fn from(board: Board) -> Self {
        board.0
    }
}

impl TryFrom<Hand> for Board {
    type Error = Error;
    fn try_from(hand: Hand) -> Result<Self, Self::Error> {
        match hand.size() {
            5 => Ok(Self(hand)),
            n => Err(Error::InvalidHandSize {
                expected: 5,
                found: n,
            }),
        }
    }
}

impl TryFrom<&str> for Board {
    type Error = Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Hand::try_from(s).and_then(Self::try_from)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl crate::Arbitrary for Board {
    fn random() -> Self {
        Self(Deck::new().deal(5))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exactly_five() {
        assert!(Board::try_from("Ac As 2h 3d 4c").is_ok());
        assert!(Board::try_from("Ac As 2h 3d").is_err());
        assert!(Board::try_from("Ac As 2h 3d 4c 5s").is_err());
    }
}
