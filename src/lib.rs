//! Exact showdown equity for Texas Hold-Em rivers.
//!
//! Given two hole cards and a complete five-card board, we enumerate all
//! C(45,2) = 990 opponent holdings from the undealt deck, settle every
//! showdown with a full best-five-of-seven evaluation, and report an exact
//! win probability plus a discrete action suggestion.
//!
//! ## Core Types
//!
//! - [`cards::Card`] — A single card as a `(Rank, Suit)` pair in one byte
//! - [`cards::Hand`] — An unordered set of cards as a 52-bit bitmask
//! - [`evaluation::Strength`] — Totally-ordered hand strength (category + kickers)
//! - [`equity::River`] — A fully-dealt scenario (hole + board)
//! - [`equity::Showdown`] — Win / tie / loss tallies over all 990 showdowns
//! - [`advice::Advice`] — Raise / Call / Fold from a win probability

pub mod advice;
pub mod cards;
pub mod equity;
pub mod error;
pub mod evaluation;

/// Win probabilities and equity fractions.
pub type Probability = f64;

// ============================================================================
// SUGGESTION THRESHOLDS
// Strict inequalities: exactly 0.7 is a Call, exactly 0.4 is a Fold.
// ============================================================================
/// Equity above this suggests raising.
pub const RAISE_THRESHOLD: Probability = 0.7;
/// Equity above this (but not above the raise line) suggests calling.
pub const CALL_THRESHOLD: Probability = 0.4;

/// Random instance generation for tests and benchmarks.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

/// Initialize terminal logging.
pub fn log() {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    simplelog::TermLogger::init(
        log::LevelFilter::Info,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )
    .expect("initialize logger");
}
