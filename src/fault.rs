//! Fault state for the receiver.
//!
//! Decoding is best-effort: overflow and unknown sequences are not
//! faults. Faults are the things the core cannot paper over, like the
//! ADC refusing to produce a reading. The session loop sets the fault
//! and stops feeding the decoder; diagnostics read it from anywhere.

use core::sync::atomic::{AtomicBool, AtomicU32, AtomicU8, Ordering};

/// Why the receiver stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum FaultCode {
    /// No fault (normal operation).
    None = 0,

    /// The intensity source failed to produce a reading.
    AcquisitionFailed = 1,

    /// ADC or peripheral setup error.
    HardwareFault = 2,
}

impl FaultCode {
    pub fn from_u8(value: u8) -> Self {
        match value {
            1 => FaultCode::AcquisitionFailed,
            2 => FaultCode::HardwareFault,
            _ => FaultCode::None,
        }
    }
}

/// Thread-safe fault latch.
///
/// Set from the sampling loop, readable from any task. Clearing keeps
/// the cumulative count for diagnostics.
pub struct FaultState {
    active: AtomicBool,
    code: AtomicU8,
    /// Extra context, meaning depends on the code (e.g. raw esp error).
    data: AtomicU32,
    /// Total faults since boot, never cleared.
    count: AtomicU32,
}

impl FaultState {
    pub const fn new() -> Self {
        Self {
            active: AtomicBool::new(false),
            code: AtomicU8::new(0),
            data: AtomicU32::new(0),
            count: AtomicU32::new(0),
        }
    }

    /// Latch a fault with its code and context word.
    #[inline]
    pub fn set(&self, code: FaultCode, data: u32) {
        self.code.store(code as u8, Ordering::Release);
        self.data.store(data, Ordering::Release);
        self.count.fetch_add(1, Ordering::Relaxed);
        self.active.store(true, Ordering::Release);
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::Acquire)
    }

    /// Only meaningful while `is_active()`.
    #[inline]
    pub fn code(&self) -> FaultCode {
        FaultCode::from_u8(self.code.load(Ordering::Acquire))
    }

    #[inline]
    pub fn data(&self) -> u32 {
        self.data.load(Ordering::Acquire)
    }

    #[inline]
    pub fn count(&self) -> u32 {
        self.count.load(Ordering::Relaxed)
    }

    /// Clear the latch after recovery. The counter is preserved.
    #[inline]
    pub fn clear(&self) {
        self.active.store(false, Ordering::Release);
    }
}

impl Default for FaultState {
    fn default() -> Self {
        Self::new()
    }
}
