//! Receive session: the decoder state machine.
//!
//! Pure logic, no hardware dependencies. Consumes digitized samples,
//! produces decoded characters. Fully testable on host.
//!
//! One [`MorseReader`] owns all mutable receive state (previous level,
//! pending interval, symbol buffer), so a session can be driven from a
//! hardware polling loop or from a canned sample list in a test, with
//! identical behavior.

use crate::classify::{classify, IntervalClass};
use crate::config::{ReaderConfig, SYMBOL_CAPACITY};
use crate::decode::decode;
use crate::edge::EdgeDetector;
use crate::sample::SignalLevel;
use crate::symbol::SymbolBuffer;

/// Output of one session tick.
///
/// A word gap can end a pending letter and mark the word boundary in
/// the same tick, so both fields may be set at once.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Decoded {
    /// Character decoded this tick ('?' for unrecognized sequences).
    pub character: Option<char>,
    /// A word gap was observed this tick.
    pub word_boundary: bool,
}

impl Decoded {
    /// Nothing decoded.
    pub const NONE: Self = Self {
        character: None,
        word_boundary: false,
    };

    /// True when this tick produced any output event.
    #[inline]
    pub fn is_event(&self) -> bool {
        self.character.is_some() || self.word_boundary
    }
}

/// Morse receive session.
///
/// Drives the edge detector, interval classifier, symbol buffer and
/// letter decoder from periodic signal samples.
///
/// # Example
///
/// ```
/// use optical_morse_reader::config::ReaderConfig;
/// use optical_morse_reader::sample::SignalLevel;
/// use optical_morse_reader::session::MorseReader;
///
/// let mut reader: MorseReader = MorseReader::new(ReaderConfig::default());
///
/// // dot: light on for one unit
/// reader.tick(0, SignalLevel::Inactive);
/// reader.tick(20_000, SignalLevel::Active);
/// reader.tick(40_000, SignalLevel::Inactive);
///
/// // letter gap ends the 'E'
/// let out = reader.tick(100_000, SignalLevel::Active);
/// assert_eq!(out.character, Some('E'));
/// ```
pub struct MorseReader<const N: usize = SYMBOL_CAPACITY> {
    config: ReaderConfig,
    detector: EdgeDetector,
    buffer: SymbolBuffer<N>,
}

impl<const N: usize> MorseReader<N> {
    /// Create a session with the given configuration.
    pub fn new(config: ReaderConfig) -> Self {
        Self {
            config,
            detector: EdgeDetector::new(),
            buffer: SymbolBuffer::new(),
        }
    }

    /// Session configuration.
    pub fn config(&self) -> &ReaderConfig {
        &self.config
    }

    /// Process one digitized sample.
    ///
    /// Steady-state samples return [`Decoded::NONE`] immediately. On a
    /// transition, the elapsed interval is classified and the pipeline
    /// advances: dot/dash symbols accumulate, letter and word gaps
    /// flush and decode the buffer.
    pub fn tick(&mut self, now_us: i64, level: SignalLevel) -> Decoded {
        let transition = match self.detector.observe(level, now_us) {
            Some(t) => t,
            None => return Decoded::NONE,
        };

        match classify(transition.edge, transition.elapsed_us, &self.config) {
            class @ (IntervalClass::Dot | IntervalClass::Dash) => {
                // Overflow is tolerated; the truncated letter will decode
                // as unknown and the session moves on.
                if let Some(symbol) = class.symbol() {
                    let _ = self.buffer.push(symbol);
                }
                Decoded::NONE
            }
            IntervalClass::IntraGap => Decoded::NONE,
            IntervalClass::LetterGap => Decoded {
                character: self.finish_letter(),
                word_boundary: false,
            },
            IntervalClass::WordGap => Decoded {
                character: self.finish_letter(),
                word_boundary: true,
            },
        }
    }

    /// Digitize a raw intensity reading and process it.
    #[inline]
    pub fn feed_raw(&mut self, now_us: i64, raw: u16) -> Decoded {
        self.tick(now_us, SignalLevel::from_raw(raw, self.config.threshold))
    }

    /// Symbols currently buffered for the in-progress letter.
    #[inline]
    pub fn pending_symbols(&self) -> usize {
        self.buffer.len()
    }

    /// Symbols dropped to buffer overflow since session start.
    #[inline]
    pub fn overflowed(&self) -> u32 {
        self.buffer.overflowed()
    }

    /// Discard any partial letter and the edge baseline.
    ///
    /// Used on shutdown or after an acquisition fault; a half-received
    /// letter is dropped, not decoded.
    pub fn reset(&mut self) {
        self.detector.reset();
        let _ = self.buffer.take();
    }

    fn finish_letter(&mut self) -> Option<char> {
        if self.buffer.is_empty() {
            return None;
        }
        let sequence = self.buffer.take();
        Some(decode(&sequence))
    }
}
