//! Hardware Abstraction Layer for the optical Morse reader.
//!
//! Thin wrappers around ESP-IDF peripherals. Decoding logic stays in
//! the core modules, HAL is just I/O. Only built for device targets.

pub mod adc;

pub use adc::AdcSource;
