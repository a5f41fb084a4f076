use super::kicks::Kickers;
use super::ranking::Ranking;
use super::strength::Strength;
use crate::cards::hand::Hand;
use crate::cards::hands::HandIterator;
use crate::cards::rank::Rank;
use crate::cards::suit::Suit;
use crate::error::Error;

/// The A-5-4-3-2 rank pattern. Its straight high card is the Five.
const WHEEL: u16 = 0b_1000000001111;

/// A five-card hand evaluator.
///
/// Construction validates cardinality; card uniqueness is structural in
/// the Hand bitset and is not re-checked. The category search walks the
/// showdown priority order, so a hand qualifying for several categories
/// always reports the strongest one.
pub struct Evaluator(Hand);

impl TryFrom<Hand> for Evaluator {
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

impl Evaluator {
    /// The strongest five-card Strength within a hand of five or more.
    ///
    /// Five cards short-circuit to a single evaluation. Larger hands are
    /// settled exhaustively over every five-card subset, C(7,5) = 21 for
    /// the seven-card showdown case.
    pub fn best(hand: Hand) -> Result<Strength, Error> {
        match hand.size() {
            n if n < 5 => Err(Error::InvalidHandSize {
                expected: 5,
                found: n,
            }),
            5 => Ok(Self(hand).strength()),
            _ => Ok(HandIterator::subsets(hand, 5)
                .map(Self)
                .map(|e| e.strength())
                .max()
                .expect("at least one five-card subset")),
        }
    }

    pub fn strength(&self) -> Strength {
        let ranking = self.ranking();
        let kickers = self.kickers(ranking);
        Strength::from((ranking, kickers))
    }

    fn ranking(&self) -> Ranking {
        None.or_else(|| self.find_straight_flush())
            .or_else(|| self.find_4_oak())
            .or_else(|| self.find_full_house())
            .or_else(|| self.find_flush())
            .or_else(|| self.find_straight())
            .or_else(|| self.find_3_oak())
            .or_else(|| self.find_2_oak_2_oak())
            .or_else(|| self.find_2_oak())
            .or_else(|| self.find_1_oak())
            .expect("five cards always rank")
    }

    /// Whatever the category leaves behind is the kicker set; with five
    /// cards the leftover rank count always matches n_kickers exactly.
    fn kickers(&self, ranking: Ranking) -> Kickers {
        match ranking.n_kickers() {
            0 => Kickers::default(),
            n => {
                let ranks = u16::from(self.0) & ranking.mask();
                debug_assert!(ranks.count_ones() as usize == n);
                Kickers::from(ranks)
            }
        }
    }

    fn find_straight_flush(&self) -> Option<Ranking> {
        self.suit_of_flush().and_then(|suit| {
            // the wheel test runs on the flush-suited cards alone; a
            // mixed-suit straight alongside a flush is no straight flush
            Self::rank_of_straight(u16::from(self.0.of(&suit))).map(Ranking::StraightFlush)
        })
    }
    fn find_4_oak(&self) -> Option<Ranking> {
        self.rank_of_n_oak(4, None).map(Ranking::FourOAK)
    }
    fn find_full_house(&self) -> Option<Ranking> {
        self.rank_of_n_oak(3, None).and_then(|triple| {
            self.rank_of_n_oak(2, Some(triple))
                .map(|paired| Ranking::FullHouse(triple, paired))
        })
    }
    fn find_flush(&self) -> Option<Ranking> {
        self.suit_of_flush()
            .map(|suit| u16::from(self.0.of(&suit)))
            .map(Rank::from)
            .map(Ranking::Flush)
    }
    fn find_straight(&self) -> Option<Ranking> {
        Self::rank_of_straight(u16::from(self.0)).map(Ranking::Straight)
    }
    fn find_3_oak(&self) -> Option<Ranking> {
        self.rank_of_n_oak(3, None).map(Ranking::ThreeOAK)
    }
    fn find_2_oak_2_oak(&self) -> Option<Ranking> {
        self.rank_of_n_oak(2, None).and_then(|hi| {
            self.rank_of_n_oak(2, Some(hi))
                .map(|lo| Ranking::TwoPair(hi, lo))
        })
    }
    fn find_2_oak(&self) -> Option<Ranking> {
        self.rank_of_n_oak(2, None).map(Ranking::OnePair)
    }
    fn find_1_oak(&self) -> Option<Ranking> {
        self.rank_of_n_oak(1, None).map(Ranking::HighCard)
    }

    /// Five consecutive set bits in a rank mask, else the wheel.
    fn rank_of_straight(ranks: u16) -> Option<Rank> {
        let mut bits = ranks;
        bits &= bits << 1;
        bits &= bits << 1;
        bits &= bits << 1;
        bits &= bits << 1;
        if bits > 0 {
            Some(Rank::from(bits))
        } else if WHEEL & ranks == WHEEL {
            Some(Rank::Five)
        } else {
            None
        }
    }

    fn suit_of_flush(&self) -> Option<Suit> {
        Suit::all().into_iter().find(|s| self.0.of(s).size() >= 5)
    }

    /// The highest rank held at least n times, skipping at most one
    /// already-claimed rank. Each rank owns one nibble of the hand.
    fn rank_of_n_oak(&self, n: u32, skip: Option<Rank>) -> Option<Rank> {
        let hand = u64::from(self.0);
        (0u8..13)
            .rev()
            .map(Rank::from)
            .filter(|r| Some(*r) != skip)
            .find(|r| ((hand >> (u8::from(*r) * 4)) & 0xF).count_ones() >= n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strength(s: &str) -> Strength {
        Evaluator::try_from(Hand::try_from(s).unwrap())
            .unwrap()
            .strength()
    }

    fn ranking(s: &str) -> Ranking {
        strength(s).ranking()
    }

    fn kickers(s: &str) -> Kickers {
        strength(s).kickers()
    }

    #[test]
    fn high_card() {
        assert!(ranking("As Kh Qd Jc 9s") == Ranking::HighCard(Rank::Ace));
        assert!(
            kickers("As Kh Qd Jc 9s")
                == Kickers::from(vec![Rank::King, Rank::Queen, Rank::Jack, Rank::Nine])
        );
    }

    #[test]
    fn one_pair() {
        assert!(ranking("As Ah Kd Qc Js") == Ranking::OnePair(Rank::Ace));
        assert!(
            kickers("As Ah Kd Qc Js") == Kickers::from(vec![Rank::King, Rank::Queen, Rank::Jack])
        );
    }

    #[test]
    fn two_pair() {
        assert!(ranking("As Ah Kd Kc Qs") == Ranking::TwoPair(Rank::Ace, Rank::King));
        assert!(kickers("As Ah Kd Kc Qs") == Kickers::from(vec![Rank::Queen]));
    }

    #[test]
    fn three_oak() {
        assert!(ranking("As Ah Ad Kc Qs") == Ranking::ThreeOAK(Rank::Ace));
        assert!(kickers("As Ah Ad Kc Qs") == Kickers::from(vec![Rank::King, Rank::Queen]));
    }

    #[test]
    fn straight() {
        assert!(ranking("Ts Jh Qd Kc As") == Ranking::Straight(Rank::Ace));
        assert!(kickers("Ts Jh Qd Kc As") == Kickers::default());
    }

    #[test]
    fn wheel_straight() {
        assert!(ranking("As 2h 3d 4c 5s") == Ranking::Straight(Rank::Five));
    }

    #[test]
    fn flush() {
        assert!(ranking("As Ks Qs Js 9s") == Ranking::Flush(Rank::Ace));
        assert!(
            kickers("As Ks Qs Js 9s")
                == Kickers::from(vec![Rank::King, Rank::Queen, Rank::Jack, Rank::Nine])
        );
    }

    #[test]
    fn full_house() {
        assert!(ranking("2s 2h 2d 3c 3s") == Ranking::FullHouse(Rank::Two, Rank::Three));
        assert!(kickers("2s 2h 2d 3c 3s") == Kickers::default());
    }

    #[test]
    fn four_oak() {
        assert!(ranking("As Ah Ad Ac Ks") == Ranking::FourOAK(Rank::Ace));
        assert!(kickers("As Ah Ad Ac Ks") == Kickers::from(vec![Rank::King]));
    }

    #[test]
    fn straight_flush() {
        assert!(ranking("Ts Js Qs Ks As") == Ranking::StraightFlush(Rank::Ace));
    }

    #[test]
    fn wheel_straight_flush() {
        assert!(ranking("Ah 2h 3h 4h 5h") == Ranking::StraightFlush(Rank::Five));
    }

    #[test]
    fn fifth_flush_card_breaks_ties() {
        assert!(strength("As Ks Qs Js 9s") > strength("Ad Kd Qd Jd 8d"));
    }

    #[test]
    fn suits_never_break_ties() {
        assert!(strength("As Ks Qs Js 9s") == strength("Ad Kd Qd Jd 9d"));
        assert!(strength("As Kh Qd Jc 9s") == strength("Ac Ks Qh Jd 9c"));
    }

    #[test]
    fn input_order_is_irrelevant() {
        assert!(strength("9s Jc Qd Kh As") == strength("As Kh Qd Jc 9s"));
    }

    #[test]
    fn exactly_five_cards() {
        let four = Hand::try_from("As Kh Qd Jc").unwrap();
        assert!(
            Evaluator::try_from(four).err()
                == Some(Error::InvalidHandSize {
                    expected: 5,
                    found: 4
                })
        );
        let six = Hand::try_from("As Kh Qd Jc 9s 8d").unwrap();
        assert!(Evaluator::try_from(six).is_err());
    }

    #[test]
    fn best_short_circuits_five() {
        let five = Hand::try_from("As Ah Kd Kc Qs").unwrap();
        assert!(Evaluator::best(five).unwrap() == strength("As Ah Kd Kc Qs"));
    }

    #[test]
    fn best_rejects_underfull() {
        let four = Hand::try_from("As Kh Qd Jc").unwrap();
        assert!(
            Evaluator::best(four).err()
                == Some(Error::InvalidHandSize {
                    expected: 5,
                    found: 4
                })
        );
    }

    #[test]
    fn best_of_seven() {
        let hand = Hand::try_from("As Ah Kd Kc Qs Jh 9d").unwrap();
        let best = Evaluator::best(hand).unwrap();
        assert!(best.ranking() == Ranking::TwoPair(Rank::Ace, Rank::King));
        assert!(best.kickers() == Kickers::from(vec![Rank::Queen]));
    }

    #[test]
    fn best_matches_subset_bruteforce() {
        let hand = Hand::try_from("4h 6h 7h 8h 9h Ts 9c").unwrap();
        let cards = Vec::from(hand);
        let mut bruteforce = Vec::new();
        for i in 0..cards.len() {
            for j in (i + 1)..cards.len() {
                let mut five = hand;
                five.remove(cards[i]);
                five.remove(cards[j]);
                bruteforce.push(Evaluator::try_from(five).unwrap().strength());
            }
        }
        assert!(bruteforce.len() == 21);
        assert!(Evaluator::best(hand).unwrap() == bruteforce.into_iter().max().unwrap());
    }

    #[test]
    fn three_pairs_keep_best_two() {
        let hand = Hand::try_from("As Ah Kd Kc Qs Qh Jd").unwrap();
        let best = Evaluator::best(hand).unwrap();
        assert!(best.ranking() == Ranking::TwoPair(Rank::Ace, Rank::King));
        assert!(best.kickers() == Kickers::from(vec![Rank::Queen]));
    }

    #[test]
    fn two_triples_make_a_full_house() {
        let hand = Hand::try_from("As Ah Ad Kc Ks Kh Qd").unwrap();
        let best = Evaluator::best(hand).unwrap();
        assert!(best.ranking() == Ranking::FullHouse(Rank::Ace, Rank::King));
    }

    #[test]
    fn flush_without_straight_flush() {
        // a 5-9 straight across suits and a K-high heart flush coexist;
        // the hearts alone are no straight, so the flush wins
        let hand = Hand::try_from("5h 6d 7h 8s 9h Kh 2h").unwrap();
        let best = Evaluator::best(hand).unwrap();
        assert!(best.ranking() == Ranking::Flush(Rank::King));
    }

    #[test]
    fn six_card_low_straight() {
        let hand = Hand::try_from("As 2s 3h 4d 5c 6s").unwrap();
        let best = Evaluator::best(hand).unwrap();
        assert!(best.ranking() == Ranking::Straight(Rank::Six));
    }
}
