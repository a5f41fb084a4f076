use crate::CALL_THRESHOLD;
use crate::Probability;
use crate::RAISE_THRESHOLD;

/// A discrete action suggestion thresholded from a win probability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum Advice {
    Raise,
    Call,
    Fold,
}

/// both cuts are strict: sitting exactly on a threshold takes the
/// weaker action
impl From<Probability> for Advice {
    fn from(equity: Probability) -> Self {
        if equity > RAISE_THRESHOLD {
            Self::Raise
        } else if equity > CALL_THRESHOLD {
            Self::Call
        } else {
            Self::Fold
        }
    }
}

impl std::fmt::Display for Advice {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Raise => write!(f, "Raise"),
            Self::Call => write!(f, "Call"),
            Self::Fold => write!(f, "Fold"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds_are_strict() {
        assert!(Advice::from(0.7) == Advice::Call);
        assert!(Advice::from(0.4) == Advice::Fold);
    }

    #[test]
    fn open_intervals() {
        assert!(Advice::from(1.0) == Advice::Raise);
        assert!(Advice::from(0.71) == Advice::Raise);
        assert!(Advice::from(0.69) == Advice::Call);
        assert!(Advice::from(0.41) == Advice::Call);
        assert!(Advice::from(0.39) == Advice::Fold);
        assert!(Advice::from(0.0) == Advice::Fold);
    }
}
