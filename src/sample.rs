//! Module: sample
//!
//! Purpose: signal-level and transition types for the receive pipeline.
//! A sample is one digitized reading of the photodiode at a specific
//! moment; a transition marks the instant the level changes.
//!
//! Safety: Safe. No unsafe blocks. Copy types only.

/// Digitized signal level for one sample.
///
/// Derived from a raw intensity reading and a fixed threshold. The
/// edge detector only ever sees this boolean view of the light.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SignalLevel {
    /// Light detected: a mark (dot or dash) is in progress.
    Active,
    /// No light: a gap is in progress.
    Inactive,
}

impl SignalLevel {
    /// Digitize a raw intensity reading against the configured threshold.
    ///
    /// Strictly-greater comparison: a reading equal to the threshold is
    /// still Inactive.
    #[inline]
    pub fn from_raw(raw: u16, threshold: u16) -> Self {
        if raw > threshold {
            SignalLevel::Active
        } else {
            SignalLevel::Inactive
        }
    }

    /// Check whether this level is Active.
    #[inline]
    pub fn is_active(self) -> bool {
        matches!(self, SignalLevel::Active)
    }
}

/// Direction of a level change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EdgeKind {
    /// Inactive -> Active: a gap just ended.
    Rising,
    /// Active -> Inactive: a mark just ended.
    Falling,
}

impl EdgeKind {
    /// The edge that must follow this one. Edges strictly alternate.
    #[inline]
    pub fn opposite(self) -> Self {
        match self {
            EdgeKind::Rising => EdgeKind::Falling,
            EdgeKind::Falling => EdgeKind::Rising,
        }
    }
}

/// A detected level change.
///
/// `elapsed_us` is the duration of the interval that just ended: the
/// time between the previous transition and this one. On a falling
/// edge that is the length of the mark; on a rising edge, the length
/// of the gap.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
    pub edge: EdgeKind,
    pub at_us: i64,
    pub elapsed_us: i64,
}
