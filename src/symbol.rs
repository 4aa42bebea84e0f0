//! Symbol buffer: the in-progress Morse code of one character.
//!
//! Bounded, ordered, overflow-tolerant. Once full, further symbols are
//! silently dropped and counted; decoding of the truncated sequence
//! still proceeds (and will usually come back unknown). Overflow never
//! halts the session.

use crate::config::SYMBOL_CAPACITY;

/// A single Morse symbol.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Symbol {
    Dot,
    Dash,
}

impl Symbol {
    /// Printable form, `.` or `-`.
    #[inline]
    pub fn glyph(self) -> char {
        match self {
            Symbol::Dot => '.',
            Symbol::Dash => '-',
        }
    }
}

/// Outcome of a push into the symbol buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Push {
    /// Symbol stored.
    Stored,
    /// Buffer full, symbol dropped.
    Overflow,
}

impl Push {
    #[inline]
    pub fn is_overflow(self) -> bool {
        matches!(self, Push::Overflow)
    }
}

/// Immutable snapshot of a symbol buffer's contents.
#[derive(Clone, Copy)]
pub struct Sequence<const N: usize = SYMBOL_CAPACITY> {
    symbols: [Symbol; N],
    len: usize,
}

impl<const N: usize> Sequence<N> {
    /// Empty sequence.
    pub const fn empty() -> Self {
        Self {
            symbols: [Symbol::Dot; N],
            len: 0,
        }
    }

    /// Build a sequence from a slice of symbols.
    ///
    /// Returns `None` if the slice exceeds the capacity.
    pub fn from_symbols(symbols: &[Symbol]) -> Option<Self> {
        if symbols.len() > N {
            return None;
        }
        let mut seq = Self::empty();
        seq.symbols[..symbols.len()].copy_from_slice(symbols);
        seq.len = symbols.len();
        Some(seq)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Symbols in receipt order.
    #[inline]
    pub fn as_slice(&self) -> &[Symbol] {
        &self.symbols[..self.len]
    }

    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, Symbol> {
        self.as_slice().iter()
    }
}

impl<const N: usize> PartialEq for Sequence<N> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<const N: usize> Eq for Sequence<N> {}

impl<const N: usize> core::fmt::Debug for Sequence<N> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        for s in self.iter() {
            f.write_fmt(format_args!("{}", s.glyph()))?;
        }
        Ok(())
    }
}

/// Bounded buffer of symbols for the character currently being received.
///
/// Cleared by [`take`](SymbolBuffer::take) after every decode attempt.
pub struct SymbolBuffer<const N: usize = SYMBOL_CAPACITY> {
    symbols: [Symbol; N],
    len: usize,
    overflowed: u32,
}

impl<const N: usize> SymbolBuffer<N> {
    /// Create an empty buffer.
    pub const fn new() -> Self {
        Self {
            symbols: [Symbol::Dot; N],
            len: 0,
            overflowed: 0,
        }
    }

    /// Append a symbol.
    ///
    /// At capacity the symbol is dropped, the overflow counter bumps,
    /// and [`Push::Overflow`] is returned. Never fails harder than that.
    #[inline]
    pub fn push(&mut self, symbol: Symbol) -> Push {
        if self.len >= N {
            self.overflowed = self.overflowed.saturating_add(1);
            return Push::Overflow;
        }
        self.symbols[self.len] = symbol;
        self.len += 1;
        Push::Stored
    }

    /// Snapshot the contents and clear the buffer.
    #[inline]
    pub fn take(&mut self) -> Sequence<N> {
        let seq = Sequence {
            symbols: self.symbols,
            len: self.len,
        };
        self.len = 0;
        seq
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Symbols dropped to overflow since creation. Never reset by `take`.
    #[inline]
    pub fn overflowed(&self) -> u32 {
        self.overflowed
    }
}

impl<const N: usize> Default for SymbolBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}
