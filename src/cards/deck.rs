use super::card::Card;
use super::hand::Hand;
use super::hole::Hole;

/// The undealt remainder of the 52-card universe.
///
/// Derived fresh per scenario and only ever filtered, never mutated in
/// place by the engine; random draws exist for dealing test and benchmark
/// scenarios, not for equity (which enumerates, never samples).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deck(Hand);

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Deck {
    /// A fresh 52-card deck.
    pub fn new() -> Self {
        Self(Hand::from(Hand::mask()))
    }
    /// The deck minus every card already seen.
    pub fn without(seen: &Hand) -> Self {
        Self(seen.complement())
    }
    pub fn contains(&self, card: &Card) -> bool {
        self.0.contains(card)
    }
    /// Draws and removes a uniformly random card.
    pub fn draw(&mut self) -> Card {
        assert!(self.0.size() > 0);
        let n = self.0.size();
        let i = rand::random_range(0..n);
        let mut rest = self.0;
        let card = rest.nth(i).expect("index within deck size");
        self.0.remove(card);
        card
    }
    /// Deals n random cards as a Hand.
    pub fn deal(&mut self, n: usize) -> Hand {
        (0..n)
            .map(|_| self.draw())
            .map(Hand::from)
            .fold(Hand::empty(), Hand::add)
    }
    /// Deals two random cards as a Hole.
    pub fn hole(&mut self) -> Hole {
        let a = self.draw();
        let b = self.draw();
        Hole::from((a, b))
    }
}

impl From<Deck> for Hand {
    fn from(deck: Deck) -> Self {
        deck.0
    }
}
impl From<Hand> for Deck {
    fn from(hand: Hand) -> Self {
        Self(hand)
    }
}

impl Iterator for Deck {
    type Item = Card;
    fn next(&mut self) -> Option<Self::Item> {
        if self.0.size() > 0 {
            Some(self.draw())
        } else {
            None
        }
    }
}
