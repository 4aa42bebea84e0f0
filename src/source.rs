//! Intensity sample acquisition.
//!
//! The decoder core never touches hardware; it consumes readings from
//! an [`IntensitySource`]. The firmware implements it over the ADC
//! (see `hal::adc`), tests and host tools replay canned readings.

/// Acquisition failure.
///
/// The core assumes a reading is available every tick; translating a
/// failure into a halt or a safe default is the session loop's job.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SourceError {
    /// The underlying device could not produce a reading.
    ReadFailed,
    /// No more samples (finite sources only, e.g. replay).
    Exhausted,
}

/// A source of raw light-intensity readings.
///
/// Units are implementation-defined; only the configured threshold
/// gives them meaning.
pub trait IntensitySource {
    /// Read one raw intensity sample.
    fn read_intensity(&mut self) -> Result<u16, SourceError>;
}

/// Replay source over a fixed slice of readings.
///
/// Yields each reading once, then [`SourceError::Exhausted`].
pub struct SliceSource<'a> {
    readings: &'a [u16],
    pos: usize,
}

impl<'a> SliceSource<'a> {
    pub fn new(readings: &'a [u16]) -> Self {
        Self { readings, pos: 0 }
    }

    /// Readings not yet consumed.
    pub fn remaining(&self) -> usize {
        self.readings.len() - self.pos
    }
}

impl<'a> IntensitySource for SliceSource<'a> {
    fn read_intensity(&mut self) -> Result<u16, SourceError> {
        match self.readings.get(self.pos) {
            Some(&raw) => {
                self.pos += 1;
                Ok(raw)
            }
            None => Err(SourceError::Exhausted),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slice_source_replays_in_order() {
        let mut source = SliceSource::new(&[0, 100, 0]);
        assert_eq!(source.remaining(), 3);
        assert_eq!(source.read_intensity(), Ok(0));
        assert_eq!(source.read_intensity(), Ok(100));
        assert_eq!(source.read_intensity(), Ok(0));
        assert_eq!(source.read_intensity(), Err(SourceError::Exhausted));
        assert_eq!(source.remaining(), 0);
    }
}
