use super::card::Card;
use super::suit::Suit;
use crate::error::Error;

/// An unordered set of cards stored as a 52-bit bitmask.
///
/// One bit per unique card, so membership, union, and complement are
/// single instructions, and a full seven-card hand costs no more than an
/// empty one. Anything order-dependent (dealing, display) goes through
/// the iterator, which walks cards in deck order.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Hand(u64);

impl Hand {
    pub const fn empty() -> Self {
        Self(0)
    }
    pub const fn mask() -> u64 {
        0x000FFFFFFFFFFFFF
    }

    /// Disjoint union. Overlapping operands are a caller bug.
    pub fn add(lhs: Self, rhs: Self) -> Self {
        assert!(lhs.0 & rhs.0 == 0);
        Self(lhs.0 | rhs.0)
    }

    /// The undealt remainder of the 52-card deck.
    pub fn complement(&self) -> Self {
        Self(self.0 ^ Self::mask())
    }
    pub fn size(&self) -> usize {
        self.0.count_ones() as usize
    }
    pub fn contains(&self, card: &Card) -> bool {
        self.0 & u64::from(*card) != 0
    }
    pub fn intersects(&self, other: &Self) -> bool {
        self.0 & other.0 != 0
    }
    /// The sub-hand holding only cards of one suit.
    pub fn of(&self, suit: &Suit) -> Self {
        Self(self.0 & u64::from(*suit))
    }
    pub fn remove(&mut self, card: Card) {
        self.0 &= !u64::from(card);
    }
}

/// we can empty a hand from low to high
/// by removing the lowest card until the hand is empty
impl Iterator for Hand {
    type Item = Card;
    fn next(&mut self) -> Option<Self::Item> {
        if self.size() == 0 {
            None
        } else {
            let card = Card::from(self.0.trailing_zeros() as u8);
            self.remove(card);
            Some(card)
        }
    }
}

/// u64 isomorphism
impl From<u64> for Hand {
    fn from(n: u64) -> Self {
        Self(n & Self::mask())
    }
}
impl From<Hand> for u64 {
    fn from(h: Hand) -> Self {
        h.0
    }
}

/// singleton lifting
impl From<Card> for Hand {
    fn from(c: Card) -> Self {
        Self(u64::from(c))
    }
}

/// Vec<Card> isomorphism (up to permutation, this always comes out sorted)
impl From<Vec<Card>> for Hand {
    fn from(cards: Vec<Card>) -> Self {
        Self(cards.into_iter().map(u64::from).fold(0u64, |a, b| a | b))
    }
}
impl From<Hand> for Vec<Card> {
    fn from(h: Hand) -> Self {
        h.into_iter().collect()
    }
}

/// one-way conversion to the 13-bit rank mask
///
/// any card of a rank sets that rank's bit; each rank owns one
/// nibble of the hand, so we just test nibbles
impl From<Hand> for u16 {
    fn from(h: Hand) -> Self {
        (0..13)
            .filter(|r| (h.0 >> (r * 4)) & 0xF != 0)
            .fold(0u16, |mask, r| mask | 1 << r)
    }
}

/// str isomorphism
///
/// duplicate tokens collapse under set semantics; callers that care
/// about cardinality check size() afterward.
impl TryFrom<&str> for Hand {
    type Error = Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Card::parse(s).map(Self::from)
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for card in *self {
            write!(f, "{}", card)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::deck::Deck;
    use super::super::rank::Rank;

    #[test]
    fn bijective_u64() {
        let hand = Deck::new().deal(7);
        assert!(hand == Hand::from(u64::from(hand)));
    }

    #[test]
    fn card_iteration() {
        let mut iter = Hand::try_from("Jc Ts 2c Js").unwrap().into_iter();
        assert!(iter.next() == Card::try_from("2c").ok());
        assert!(iter.next() == Card::try_from("Ts").ok());
        assert!(iter.next() == Card::try_from("Jc").ok());
        assert!(iter.next() == Card::try_from("Js").ok());
        assert!(iter.next() == None);
    }

    #[test]
    fn ranks_in_suit() {
        let hand = Hand::try_from("2c 3d 4h 5s 6c 7d 8h 9s Tc Jd Qh Ks Ac").unwrap();
        assert!(u16::from(hand.of(&Suit::Club)) == 0b_1000100010001); // 2c 6c Tc Ac
        assert!(u16::from(hand.of(&Suit::Diamond)) == 0b_0001000100010); // 3d 7d Jd
        assert!(u16::from(hand.of(&Suit::Heart)) == 0b_0010001000100); // 4h 8h Qh
        assert!(u16::from(hand.of(&Suit::Spade)) == 0b_0100010001000); // 5s 9s Ks
    }

    #[test]
    fn rank_mask_collapses_suits() {
        let hand = Hand::try_from("Ah Ad As Ac 2c").unwrap();
        assert!(u16::from(hand) == u16::from(Rank::Ace) | u16::from(Rank::Two));
    }

    #[test]
    fn complement_partitions_deck() {
        let hand = Deck::new().deal(7);
        assert!(hand.complement().size() == 45);
        assert!(!hand.intersects(&hand.complement()));
    }

    #[test]
    fn duplicates_collapse() {
        let hand = Hand::try_from("As As Kh").unwrap();
        assert!(hand.size() == 2);
    }
}
