//! Interval classification.
//!
//! Pure function of (edge direction, elapsed duration, base unit).
//! No state, no side effects.
//!
//! # Timing grid
//!
//! ```text
//! mark  (ended by falling edge):   [0, 2u)  dot      [2u, inf)  dash
//! space (ended by rising edge):    [0, 2u)  intra    [2u, 6u)   letter gap
//!                                                    [6u, inf)  word gap
//! ```
//!
//! Boundaries are inclusive on the lower bound: exactly 2 units is a
//! dash (or a letter gap), exactly 6 units is a word gap. A mark has no
//! upper bound; an arbitrarily long mark is still a dash. That is
//! intentional, a stuck sender is not this layer's problem.

use crate::config::ReaderConfig;
use crate::sample::EdgeKind;
use crate::symbol::Symbol;

/// What an elapsed interval between two edges meant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IntervalClass {
    /// Mark shorter than two units.
    Dot,
    /// Mark of two units or more.
    Dash,
    /// Space within a letter, between two symbols. No action.
    IntraGap,
    /// Space ending a letter.
    LetterGap,
    /// Space ending a word (implies the letter also ended).
    WordGap,
}

impl IntervalClass {
    /// The symbol this interval contributes, if it was a mark.
    #[inline]
    pub fn symbol(self) -> Option<Symbol> {
        match self {
            IntervalClass::Dot => Some(Symbol::Dot),
            IntervalClass::Dash => Some(Symbol::Dash),
            _ => None,
        }
    }
}

/// Classify the interval that ended with the given edge.
///
/// A falling edge ends a mark, so the elapsed time is compared against
/// the dot/dash threshold. A rising edge ends a space, so it is
/// compared against the letter- and word-gap thresholds.
#[inline]
pub fn classify(edge: EdgeKind, elapsed_us: i64, config: &ReaderConfig) -> IntervalClass {
    match edge {
        EdgeKind::Falling => {
            if elapsed_us < config.dash_threshold_us() {
                IntervalClass::Dot
            } else {
                IntervalClass::Dash
            }
        }
        EdgeKind::Rising => {
            if elapsed_us >= config.word_gap_threshold_us() {
                IntervalClass::WordGap
            } else if elapsed_us >= config.letter_gap_threshold_us() {
                IntervalClass::LetterGap
            } else {
                IntervalClass::IntraGap
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg() -> ReaderConfig {
        ReaderConfig::with_unit_us(20_000)
    }

    #[test]
    fn test_short_mark_is_dot() {
        assert_eq!(classify(EdgeKind::Falling, 0, &cfg()), IntervalClass::Dot);
        assert_eq!(
            classify(EdgeKind::Falling, 15_000, &cfg()),
            IntervalClass::Dot
        );
        assert_eq!(
            classify(EdgeKind::Falling, 39_999, &cfg()),
            IntervalClass::Dot
        );
    }

    #[test]
    fn test_mark_boundary_two_units_is_dash() {
        assert_eq!(
            classify(EdgeKind::Falling, 40_000, &cfg()),
            IntervalClass::Dash
        );
    }

    #[test]
    fn test_long_mark_is_still_dash() {
        // No upper bound on marks
        assert_eq!(
            classify(EdgeKind::Falling, i64::MAX, &cfg()),
            IntervalClass::Dash
        );
    }

    #[test]
    fn test_short_space_is_intra_gap() {
        assert_eq!(
            classify(EdgeKind::Rising, 15_000, &cfg()),
            IntervalClass::IntraGap
        );
        assert_eq!(
            classify(EdgeKind::Rising, 39_999, &cfg()),
            IntervalClass::IntraGap
        );
    }

    #[test]
    fn test_space_boundary_two_units_is_letter_gap() {
        assert_eq!(
            classify(EdgeKind::Rising, 40_000, &cfg()),
            IntervalClass::LetterGap
        );
        assert_eq!(
            classify(EdgeKind::Rising, 119_999, &cfg()),
            IntervalClass::LetterGap
        );
    }

    #[test]
    fn test_space_boundary_six_units_is_word_gap() {
        assert_eq!(
            classify(EdgeKind::Rising, 120_000, &cfg()),
            IntervalClass::WordGap
        );
        assert_eq!(
            classify(EdgeKind::Rising, 10_000_000, &cfg()),
            IntervalClass::WordGap
        );
    }

    #[test]
    fn test_symbol_projection() {
        assert_eq!(IntervalClass::Dot.symbol(), Some(Symbol::Dot));
        assert_eq!(IntervalClass::Dash.symbol(), Some(Symbol::Dash));
        assert_eq!(IntervalClass::IntraGap.symbol(), None);
        assert_eq!(IntervalClass::LetterGap.symbol(), None);
        assert_eq!(IntervalClass::WordGap.symbol(), None);
    }
}
