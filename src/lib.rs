//! # OpticalMorseReader
//!
//! Receiving half of an optical Morse link: a photodiode is sampled
//! periodically, on/off transitions are timed, and the durations are
//! classified into dots, dashes and gaps until letters fall out.
//!
//! ## Architecture
//!
//! The pipeline is pure, synchronous and owns all of its state:
//!
//! ```text
//! ADC ──▶ digitize ──▶ EdgeDetector ──▶ classify ──▶ SymbolBuffer
//!                                                        │ letter/word gap
//!                                                        ▼
//!                                       TextStream ◀── decode
//! ```
//!
//! Everything above the HAL runs without hardware and is tested on
//! host. The firmware entry point just wires an ADC source and a UART
//! log drain around [`session::MorseReader`].

#![cfg_attr(not(test), no_std)]

pub mod classify;
pub mod config;
pub mod decode;
pub mod edge;
pub mod fault;
pub mod logging;
pub mod sample;
pub mod session;
pub mod source;
pub mod symbol;
pub mod text_stream;
pub mod uart_logger;

#[cfg(feature = "esp32")]
pub mod hal;

pub use classify::{classify, IntervalClass};
pub use config::{ReaderConfig, SYMBOL_CAPACITY};
pub use decode::{decode, encode, UNKNOWN};
pub use edge::EdgeDetector;
pub use fault::{FaultCode, FaultState};
pub use sample::{EdgeKind, SignalLevel, Transition};
pub use session::{Decoded, MorseReader};
pub use source::{IntensitySource, SliceSource, SourceError};
pub use symbol::{Push, Sequence, Symbol, SymbolBuffer};
pub use text_stream::{TextEvent, TextStream};

use logging::LogStream;

/// Diagnostic log ring, drained to UART by the background task.
pub static DIAG_LOG: LogStream = LogStream::new();

/// Decoded text events, drained by whichever consumer is attached.
pub static TEXT_STREAM: TextStream = TextStream::new();

/// Receiver fault latch.
pub static FAULT_STATE: FaultState = FaultState::new();
