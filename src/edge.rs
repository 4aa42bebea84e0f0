//! Edge detection over periodic signal samples.
//!
//! Pure logic, no hardware dependencies. Consumes digitized levels,
//! produces transitions. Fully testable on host.
//!
//! The detector owns the last observed level and the timestamp of the
//! most recent transition (the pending interval). Callers must feed it
//! consecutive samples with non-decreasing timestamps.

use crate::sample::{EdgeKind, SignalLevel, Transition};

/// Detects level changes between consecutive samples.
///
/// Emits nothing while the level holds steady; on a change it reports
/// the edge direction together with how long the previous level lasted.
///
/// # Example
///
/// ```
/// use optical_morse_reader::edge::EdgeDetector;
/// use optical_morse_reader::sample::{EdgeKind, SignalLevel};
///
/// let mut detector = EdgeDetector::new();
/// assert!(detector.observe(SignalLevel::Inactive, 0).is_none()); // baseline
/// assert!(detector.observe(SignalLevel::Inactive, 10_000).is_none());
///
/// let t = detector.observe(SignalLevel::Active, 20_000).unwrap();
/// assert_eq!(t.edge, EdgeKind::Rising);
/// assert_eq!(t.elapsed_us, 20_000);
/// ```
pub struct EdgeDetector {
    last_level: Option<SignalLevel>,
    last_transition_us: i64,
}

impl EdgeDetector {
    /// Create a detector with no baseline yet.
    pub const fn new() -> Self {
        Self {
            last_level: None,
            last_transition_us: 0,
        }
    }

    /// Observe one sample.
    ///
    /// Returns `None` when the level matches the previous sample, or a
    /// [`Transition`] when it changed. The first observation only
    /// establishes the baseline and never emits.
    #[inline]
    pub fn observe(&mut self, level: SignalLevel, now_us: i64) -> Option<Transition> {
        let prev = match self.last_level {
            Some(prev) => prev,
            None => {
                self.last_level = Some(level);
                self.last_transition_us = now_us;
                return None;
            }
        };

        if level == prev {
            return None;
        }

        let elapsed_us = now_us - self.last_transition_us;
        self.last_level = Some(level);
        self.last_transition_us = now_us;

        let edge = match level {
            SignalLevel::Active => EdgeKind::Rising,
            SignalLevel::Inactive => EdgeKind::Falling,
        };

        Some(Transition {
            edge,
            at_us: now_us,
            elapsed_us,
        })
    }

    /// Last observed level, if a baseline exists.
    #[inline]
    pub fn level(&self) -> Option<SignalLevel> {
        self.last_level
    }

    /// Timestamp of the most recent transition (or baseline).
    #[inline]
    pub fn last_transition_us(&self) -> i64 {
        self.last_transition_us
    }

    /// Forget the baseline and pending interval.
    pub fn reset(&mut self) {
        self.last_level = None;
        self.last_transition_us = 0;
    }
}

impl Default for EdgeDetector {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_sample_sets_baseline_silently() {
        let mut detector = EdgeDetector::new();
        assert!(detector.observe(SignalLevel::Active, 1_000).is_none());
        assert_eq!(detector.level(), Some(SignalLevel::Active));
        assert_eq!(detector.last_transition_us(), 1_000);
    }

    #[test]
    fn test_steady_state_emits_nothing() {
        let mut detector = EdgeDetector::new();
        detector.observe(SignalLevel::Inactive, 0);
        for i in 1..100 {
            assert!(detector.observe(SignalLevel::Inactive, i * 10_000).is_none());
        }
        // Pending interval still points at the baseline
        assert_eq!(detector.last_transition_us(), 0);
    }

    #[test]
    fn test_rising_edge_reports_gap_length() {
        let mut detector = EdgeDetector::new();
        detector.observe(SignalLevel::Inactive, 0);
        detector.observe(SignalLevel::Inactive, 10_000);

        let t = detector.observe(SignalLevel::Active, 50_000).unwrap();
        assert_eq!(t.edge, EdgeKind::Rising);
        assert_eq!(t.at_us, 50_000);
        assert_eq!(t.elapsed_us, 50_000);
    }

    #[test]
    fn test_falling_edge_reports_mark_length() {
        let mut detector = EdgeDetector::new();
        detector.observe(SignalLevel::Inactive, 0);
        detector.observe(SignalLevel::Active, 30_000);

        let t = detector.observe(SignalLevel::Inactive, 45_000).unwrap();
        assert_eq!(t.edge, EdgeKind::Falling);
        assert_eq!(t.elapsed_us, 15_000);
    }

    #[test]
    fn test_edges_alternate() {
        let mut detector = EdgeDetector::new();
        detector.observe(SignalLevel::Inactive, 0);

        let mut last_edge = None;
        let levels = [
            SignalLevel::Active,
            SignalLevel::Inactive,
            SignalLevel::Active,
            SignalLevel::Inactive,
        ];
        for (i, level) in levels.iter().enumerate() {
            let t = detector.observe(*level, (i as i64 + 1) * 20_000).unwrap();
            if let Some(prev) = last_edge {
                assert_eq!(t.edge, EdgeKind::opposite(prev));
            }
            last_edge = Some(t.edge);
        }
    }

    #[test]
    fn test_reset_requires_new_baseline() {
        let mut detector = EdgeDetector::new();
        detector.observe(SignalLevel::Active, 5_000);
        detector.reset();

        assert!(detector.level().is_none());
        assert!(detector.observe(SignalLevel::Inactive, 10_000).is_none());
    }
}
