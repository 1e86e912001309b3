//! Hint economy
//!
//! Every three non-theme words bank one hint. Spending a hint highlights a
//! random unfound theme word; spending another while one is showing consumes
//! the credit without revealing anything new.

use super::GameState;
use crate::puzzle::Puzzle;
use rand::Rng;
use rand::prelude::IndexedRandom;
use tracing::debug;

/// Mistakes needed to earn one hint
pub const MISTAKES_PER_HINT: u32 = 3;

/// Result of asking for a hint
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HintOutcome {
    /// No hint credit available; nothing changed
    Unavailable,
    /// A theme word is now highlighted
    Revealed(String),
    /// A hint was already showing; the credit was spent silently
    Banked,
    /// Every theme word is found; the credit was spent with nothing to show
    Exhausted,
}

/// State of the hint button
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HintMeter {
    /// Fraction of the button filled, `0.0..=1.0`
    pub fill: f64,
    /// A hint can be spent right now (button shown inverted)
    pub ready: bool,
}

/// Hints earned so far
#[inline]
#[must_use]
pub const fn hints_earned(mistakes: u32) -> u32 {
    mistakes / MISTAKES_PER_HINT
}

/// Hints earned but not yet spent
///
/// # Examples
/// ```
/// use strands::game::hints::hints_available;
///
/// assert_eq!(hints_available(2, 0), 0);
/// assert_eq!(hints_available(3, 0), 1);
/// assert_eq!(hints_available(7, 1), 1);
/// ```
#[inline]
#[must_use]
pub const fn hints_available(mistakes: u32, spent: u32) -> u32 {
    hints_earned(mistakes).saturating_sub(spent)
}

/// Hint button fill: progress towards the next hint, or full when one is banked
#[must_use]
pub fn meter(mistakes: u32, spent: u32) -> HintMeter {
    if hints_available(mistakes, spent) > 0 {
        HintMeter {
            fill: 1.0,
            ready: true,
        }
    } else {
        HintMeter {
            fill: f64::from(mistakes % MISTAKES_PER_HINT) / f64::from(MISTAKES_PER_HINT),
            ready: false,
        }
    }
}

/// Spend a hint if one is available
pub fn request_hint<R: Rng + ?Sized>(
    state: &mut GameState,
    puzzle: &Puzzle,
    rng: &mut R,
) -> HintOutcome {
    if hints_available(state.mistake_count(), state.spent_hints()) == 0 {
        return HintOutcome::Unavailable;
    }
    state.spend_hint();

    if state.active_hint().is_some() {
        debug!(spent = state.spent_hints(), "Hint banked while one is active");
        return HintOutcome::Banked;
    }

    let unsolved: Vec<&str> = puzzle
        .theme_words()
        .map(|s| s.word.as_str())
        .filter(|word| !state.is_found(word))
        .collect();

    match unsolved.choose(rng) {
        Some(&word) => {
            debug!(word, "Hint revealed");
            state.set_active_hint(Some(word.to_string()));
            HintOutcome::Revealed(word.to_string())
        }
        None => HintOutcome::Exhausted,
    }
}
