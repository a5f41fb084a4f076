use super::rank::Rank;
use super::suit::Suit;
use crate::error::Error;

/// A playing card encoded as a single byte.
///
/// The 52 cards are bijectively mapped to `0..52` where the encoding is
/// `rank * 4 + suit`. Sorting follows the byte, so cards order by rank
/// first; suits never contribute to strength and only matter for equality
/// and flush grouping.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Card(u8);

impl Card {
    pub fn rank(&self) -> Rank {
        Rank::from(self.0 / 4)
    }
    pub fn suit(&self) -> Suit {
        Suit::from(self.0 % 4)
    }
}

/// (Rank, Suit) isomorphism
impl From<(Rank, Suit)> for Card {
    fn from((r, s): (Rank, Suit)) -> Self {
        Self(u8::from(r) * 4 + u8::from(s))
    }
}

/// u8 isomorphism
/// each card is mapped to its location in a sorted deck 0-51
impl From<Card> for u8 {
    fn from(c: Card) -> u8 {
        c.0
    }
}
impl From<u8> for Card {
    fn from(n: u8) -> Self {
        Self(n)
    }
}

/// u64 injection
/// each card is just one bit turned on
impl From<Card> for u64 {
    fn from(c: Card) -> u64 {
        1 << u8::from(c)
    }
}

/// str isomorphism
///
/// exactly two characters, rank symbol then suit symbol. anything else
/// comes back as InvalidCardFormat carrying the offending token.
impl TryFrom<&str> for Card {
    type Error = Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let token = s.trim();
        let mut chars = token.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(r), Some(s), None) => {
                let rank = Rank::try_from(r)?;
                let suit = Suit::try_from(s)?;
                Ok(Card::from((rank, suit)))
            }
            _ => Err(Error::InvalidCardFormat(token.to_string())),
        }
    }
}

impl Card {
    /// Parses a string of card notations into a vector of cards.
    ///
    /// Whitespace is ignored, so `"Ah Ad"` and `"AhAd"` both work.
    pub fn parse(s: &str) -> Result<Vec<Self>, Error> {
        s.replace(char::is_whitespace, "")
            .chars()
            .collect::<Vec<_>>()
            .chunks(2)
            .map(|pair| pair.iter().collect::<String>())
            .map(|pair| Self::try_from(pair.as_str()))
            .collect()
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.rank(), self.suit())
    }
}

impl crate::Arbitrary for Card {
    fn random() -> Self {
        super::deck::Deck::new().draw()
    }
}
