//! Letter decoding: exact-match lookup of a symbol sequence.
//!
//! The table covers A-Z and 0-9. Sequences are keyed by a bit-packed
//! code: start from 1 (length sentinel), then shift in one bit per
//! symbol, dot = 0, dash = 1. `.-` becomes `0b101`. The sentinel keeps
//! different lengths from colliding (`.` is `0b10`, `..` is `0b100`).
//!
//! Lookup of anything not in the table, including the empty sequence,
//! yields [`UNKNOWN`]. Decoding never fails.

use crate::symbol::{Sequence, Symbol};

/// Returned for any sequence the table does not contain.
pub const UNKNOWN: char = '?';

/// (packed key, character), sorted by key for binary search.
static MORSE_TABLE: [(u16, char); 36] = [
    (0b10, 'E'),      // .
    (0b11, 'T'),      // -
    (0b100, 'I'),     // ..
    (0b101, 'A'),     // .-
    (0b110, 'N'),     // -.
    (0b111, 'M'),     // --
    (0b1000, 'S'),    // ...
    (0b1001, 'U'),    // ..-
    (0b1010, 'R'),    // .-.
    (0b1011, 'W'),    // .--
    (0b1100, 'D'),    // -..
    (0b1101, 'K'),    // -.-
    (0b1110, 'G'),    // --.
    (0b1111, 'O'),    // ---
    (0b10000, 'H'),   // ....
    (0b10001, 'V'),   // ...-
    (0b10010, 'F'),   // ..-.
    (0b10100, 'L'),   // .-..
    (0b10110, 'P'),   // .--.
    (0b10111, 'J'),   // .---
    (0b11000, 'B'),   // -...
    (0b11001, 'X'),   // -..-
    (0b11010, 'C'),   // -.-.
    (0b11011, 'Y'),   // -.--
    (0b11100, 'Z'),   // --..
    (0b11101, 'Q'),   // --.-
    (0b100000, '5'),  // .....
    (0b100001, '4'),  // ....-
    (0b100011, '3'),  // ...--
    (0b100111, '2'),  // ..---
    (0b101111, '1'),  // .----
    (0b110000, '6'),  // -....
    (0b111000, '7'),  // --...
    (0b111100, '8'),  // ---..
    (0b111110, '9'),  // ----.
    (0b111111, '0'),  // -----
];

/// Pack a sequence into its table key.
#[inline]
fn pack<const N: usize>(sequence: &Sequence<N>) -> u32 {
    sequence.iter().fold(1u32, |key, symbol| {
        (key << 1)
            | match symbol {
                Symbol::Dot => 0,
                Symbol::Dash => 1,
            }
    })
}

/// Decode a symbol sequence to a character.
///
/// Exact match against the fixed table; [`UNKNOWN`] on a miss. Callers
/// that dislike `'?'` for the empty sequence must not decode it.
pub fn decode<const N: usize>(sequence: &Sequence<N>) -> char {
    let key = pack(sequence);
    if key > u16::MAX as u32 {
        // Longer than anything in the table (buffer capacity allows it)
        return UNKNOWN;
    }
    match MORSE_TABLE.binary_search_by_key(&(key as u16), |&(k, _)| k) {
        Ok(idx) => MORSE_TABLE[idx].1,
        Err(_) => UNKNOWN,
    }
}

/// Reverse lookup: the canonical sequence for a character.
///
/// Returns `None` for characters outside A-Z / 0-9 or when the
/// sequence does not fit in `N` symbols. Used by tests and tooling;
/// the receive path never needs it.
pub fn encode<const N: usize>(ch: char) -> Option<Sequence<N>> {
    let key = MORSE_TABLE
        .iter()
        .find(|&&(_, c)| c == ch)
        .map(|&(k, _)| k)?;

    let len = (16 - key.leading_zeros() - 1) as usize;
    if len > N {
        return None;
    }

    let mut symbols = [Symbol::Dot; 16];
    for i in 0..len {
        let bit = (key >> (len - 1 - i)) & 1;
        symbols[i] = if bit == 1 { Symbol::Dash } else { Symbol::Dot };
    }
    Sequence::from_symbols(&symbols[..len])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seq(text: &str) -> Sequence {
        let mut symbols = [Symbol::Dot; 16];
        for (i, c) in text.chars().enumerate() {
            symbols[i] = match c {
                '.' => Symbol::Dot,
                '-' => Symbol::Dash,
                _ => panic!("bad glyph"),
            };
        }
        Sequence::from_symbols(&symbols[..text.len()]).unwrap()
    }

    #[test]
    fn test_table_sorted_and_unique() {
        for pair in MORSE_TABLE.windows(2) {
            assert!(pair[0].0 < pair[1].0, "table must be strictly sorted");
        }
    }

    #[test]
    fn test_decode_known_letters() {
        assert_eq!(decode(&seq(".-")), 'A');
        assert_eq!(decode(&seq("...")), 'S');
        assert_eq!(decode(&seq("---")), 'O');
        assert_eq!(decode(&seq("-----")), '0');
        assert_eq!(decode(&seq(".----")), '1');
        assert_eq!(decode(&seq(".")), 'E');
        assert_eq!(decode(&seq("-")), 'T');
    }

    #[test]
    fn test_decode_unknown_sequences() {
        assert_eq!(decode(&seq("......")), UNKNOWN); // 6 dots, not in table
        assert_eq!(decode(&seq("--..--")), UNKNOWN); // punctuation not covered
    }

    #[test]
    fn test_decode_empty_is_unknown() {
        let empty: Sequence = Sequence::empty();
        assert_eq!(decode(&empty), UNKNOWN);
    }

    #[test]
    fn test_decode_over_length_sequence() {
        // 15 dots: fits the buffer, far longer than any table entry
        let symbols = [Symbol::Dot; 15];
        let long: Sequence = Sequence::from_symbols(&symbols).unwrap();
        assert_eq!(decode(&long), UNKNOWN);
    }

    #[test]
    fn test_encode_round_trips_whole_table() {
        for &(_, ch) in MORSE_TABLE.iter() {
            let sequence: Sequence = encode(ch).unwrap();
            assert_eq!(decode(&sequence), ch, "round trip for {}", ch);
        }
    }

    #[test]
    fn test_encode_unsupported_char() {
        assert!(encode::<15>(' ').is_none());
        assert!(encode::<15>('a').is_none()); // table is uppercase only
        assert!(encode::<15>('?').is_none());
    }

    #[test]
    fn test_encode_respects_capacity() {
        // '0' needs five symbols, does not fit in 4
        assert!(encode::<4>('0').is_none());
        assert!(encode::<5>('0').is_some());
    }
}
