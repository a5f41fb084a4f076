use super::card::Card;
use super::deck::Deck;
use super::hand::Hand;
use crate::error::Error;

/// A player's two private cards.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub struct Hole(Hand);

impl From<Hole> for Hand {
    fn from(hole: Hole) -> Self {
        hole.0
    }
}

impl From<(Card, Card)> for Hole {
    fn from((a, b): (Card, Card)) -> Self {
        Self(Hand::add(Hand::from(a), Hand::from(b)))
    }
}

impl TryFrom<Hand> for Hole {
    type Error = Error;
    fn try_from(hand: Hand) -> Result<Self, Self::Error> {
        match hand.size() {
            2 => Ok(Self(hand)),
            n => Err(Error::InvalidHandSize {
                expected: 2,
                found: n,
            }),
        }
    }
}

impl TryFrom<&str> for Hole {
    type Error = Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Hand::try_from(s).and_then(Self::try_from)
    }
}

impl std::fmt::Display for Hole {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl crate::Arbitrary for Hole {
    fn random() -> Self {
        Deck::new().hole()
    }
}
