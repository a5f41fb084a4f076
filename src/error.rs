use thiserror::Error;

/// Input-validation failures surfaced to callers.
///
/// Both variants are local and deterministic. Nothing in the crate retries
/// or coerces them; a caller that feeds the engine malformed tokens or the
/// wrong number of cards gets the failure back, typed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A card token whose length or symbols fall outside the
    /// `23456789TJQKA` / `cdhs` alphabets.
    #[error("invalid card format: {0:?}")]
    InvalidCardFormat(String),
    /// A hand of the wrong cardinality handed to a constructor that
    /// demands an exact count.
    #[error("expected {expected} cards, found {found}")]
    InvalidHandSize { expected: usize, found: usize },
}
