//! Lock-free stream of decoded text events.
//!
//! The session loop produces; one consumer (log drain, display, remote
//! forwarder) drains. Push never blocks: when the ring is full the
//! event is dropped and counted. Drained events come out in decode
//! order.
//!
//! Single producer, single consumer. Coordination is purely atomic, no
//! locks anywhere on the sampling path.

use core::cell::UnsafeCell;
use core::sync::atomic::{AtomicU32, Ordering};

use crate::session::Decoded;

/// Default ring capacity. Must be a power of 2.
pub const TEXT_STREAM_SIZE: usize = 64;

/// One decoded output event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextEvent {
    /// A decoded character ('?' when the sequence was unrecognized).
    Character(char),
    /// Inter-word space.
    WordBoundary,
}

impl TextEvent {
    /// Printable form: the character itself, or a space for boundaries.
    #[inline]
    pub fn glyph(self) -> char {
        match self {
            TextEvent::Character(c) => c,
            TextEvent::WordBoundary => ' ',
        }
    }
}

/// Lock-free ring of [`TextEvent`]s.
///
/// # Memory Ordering
///
/// Producer publishes the slot before bumping `write_idx` (Release);
/// the consumer loads `write_idx` with Acquire before reading the
/// slot. Indices grow monotonically and wrap through the mask.
pub struct TextStream<const N: usize = TEXT_STREAM_SIZE> {
    slots: UnsafeCell<[TextEvent; N]>,
    write_idx: AtomicU32,
    read_idx: AtomicU32,
    dropped: AtomicU32,
}

// SAFETY: Single producer, single consumer, coordinated through the
// atomic indices. A slot is only written while the consumer cannot
// reach it and only read after the Release store of write_idx.
unsafe impl<const N: usize> Sync for TextStream<N> {}
unsafe impl<const N: usize> Send for TextStream<N> {}

impl<const N: usize> TextStream<N> {
    const MASK: usize = N - 1;

    /// Create an empty stream.
    ///
    /// # Panics
    ///
    /// Panics at compile time if N is not a power of 2.
    pub const fn new() -> Self {
        assert!(N.is_power_of_two(), "Text stream size must be power of 2");

        Self {
            slots: UnsafeCell::new([TextEvent::WordBoundary; N]),
            write_idx: AtomicU32::new(0),
            read_idx: AtomicU32::new(0),
            dropped: AtomicU32::new(0),
        }
    }

    /// Push one event (producer side, never blocks).
    ///
    /// Returns `false` and counts a drop when the ring is full.
    #[inline]
    pub fn push(&self, event: TextEvent) -> bool {
        let write = self.write_idx.load(Ordering::Relaxed);
        let read = self.read_idx.load(Ordering::Acquire);

        if write.wrapping_sub(read) >= N as u32 {
            self.dropped.fetch_add(1, Ordering::Relaxed);
            return false;
        }

        // SAFETY: single producer; this slot is not yet visible to the
        // consumer until write_idx is published below.
        unsafe {
            (*self.slots.get())[(write as usize) & Self::MASK] = event;
        }
        self.write_idx.store(write.wrapping_add(1), Ordering::Release);
        true
    }

    /// Push everything one session tick produced, character first so
    /// the letter lands before its word boundary.
    #[inline]
    pub fn push_decoded(&self, decoded: Decoded) {
        if let Some(c) = decoded.character {
            self.push(TextEvent::Character(c));
        }
        if decoded.word_boundary {
            self.push(TextEvent::WordBoundary);
        }
    }

    /// Drain the next event (consumer side).
    #[inline]
    pub fn drain(&self) -> Option<TextEvent> {
        let read = self.read_idx.load(Ordering::Relaxed);
        let write = self.write_idx.load(Ordering::Acquire);

        if read == write {
            return None;
        }

        // SAFETY: single consumer; slot was published by the Release
        // store of write_idx.
        let event = unsafe { (*self.slots.get())[(read as usize) & Self::MASK] };
        self.read_idx.store(read.wrapping_add(1), Ordering::Release);
        Some(event)
    }

    /// Events waiting to be drained.
    #[inline]
    pub fn pending(&self) -> u32 {
        let read = self.read_idx.load(Ordering::Relaxed);
        let write = self.write_idx.load(Ordering::Acquire);
        write.wrapping_sub(read)
    }

    /// Events dropped because the ring was full.
    #[inline]
    pub fn dropped(&self) -> u32 {
        self.dropped.load(Ordering::Relaxed)
    }
}

impl<const N: usize> Default for TextStream<N> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_drain_preserves_order() {
        let stream = TextStream::<16>::new();

        stream.push(TextEvent::Character('H'));
        stream.push(TextEvent::Character('I'));
        stream.push(TextEvent::WordBoundary);

        assert_eq!(stream.pending(), 3);
        assert_eq!(stream.drain(), Some(TextEvent::Character('H')));
        assert_eq!(stream.drain(), Some(TextEvent::Character('I')));
        assert_eq!(stream.drain(), Some(TextEvent::WordBoundary));
        assert_eq!(stream.drain(), None);
    }

    #[test]
    fn test_full_ring_drops_and_counts() {
        let stream = TextStream::<4>::new();

        for _ in 0..4 {
            assert!(stream.push(TextEvent::Character('X')));
        }
        assert!(!stream.push(TextEvent::Character('Y')));
        assert_eq!(stream.dropped(), 1);

        // Draining frees a slot
        stream.drain();
        assert!(stream.push(TextEvent::Character('Z')));
    }

    #[test]
    fn test_push_decoded_orders_char_before_boundary() {
        let stream = TextStream::<16>::new();
        stream.push_decoded(Decoded {
            character: Some('A'),
            word_boundary: true,
        });

        assert_eq!(stream.drain(), Some(TextEvent::Character('A')));
        assert_eq!(stream.drain(), Some(TextEvent::WordBoundary));
    }

    #[test]
    fn test_push_decoded_none_is_noop() {
        let stream = TextStream::<16>::new();
        stream.push_decoded(Decoded::NONE);
        assert_eq!(stream.pending(), 0);
    }

    #[test]
    fn test_glyphs() {
        assert_eq!(TextEvent::Character('K').glyph(), 'K');
        assert_eq!(TextEvent::WordBoundary.glyph(), ' ');
    }
}
