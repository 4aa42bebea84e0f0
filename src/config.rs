//! Reader configuration.
//!
//! All timing thresholds derive from a single base unit: the nominal
//! duration of one dot. The sender and receiver must agree on it.
//! Configuration is fixed at session start and never mutated at runtime.

/// Usable symbol slots per character (longest standard code is 6 symbols,
/// extra headroom tolerates sloppy senders before the buffer saturates).
pub const SYMBOL_CAPACITY: usize = 15;

/// Receiver timing and digitizer configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReaderConfig {
    /// Base unit in microseconds: nominal duration of one dot.
    /// Must match the sender's unit.
    pub unit_us: i64,

    /// Raw ADC intensity above which the signal counts as active.
    /// Tuned to ambient light conditions.
    pub threshold: u16,

    /// Polling period in microseconds. Independent of `unit_us`, but
    /// must be short enough to catch every mark and gap.
    pub sample_period_us: i64,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            unit_us: 20_000,         // 20 ms dot, matches reference sender
            threshold: 32,
            sample_period_us: 10_000, // 10 ms poll
        }
    }
}

impl ReaderConfig {
    /// Create config for a given base unit with default threshold and poll rate.
    pub fn with_unit_us(unit_us: i64) -> Self {
        Self {
            unit_us,
            ..Default::default()
        }
    }

    /// Marks at or above this duration are dashes; below, dots.
    #[inline]
    pub fn dash_threshold_us(&self) -> i64 {
        self.unit_us * 2
    }

    /// Gaps at or above this duration end the current letter.
    #[inline]
    pub fn letter_gap_threshold_us(&self) -> i64 {
        self.unit_us * 2
    }

    /// Gaps at or above this duration end the current word.
    #[inline]
    pub fn word_gap_threshold_us(&self) -> i64 {
        self.unit_us * 6
    }
}
