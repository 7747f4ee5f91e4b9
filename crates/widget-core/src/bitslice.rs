// Copyright 2024 The PECOS Developers
//
// Licensed under the Apache License, Version 2.0 (the "License"); you may not use this file except
// in compliance with the License.You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software distributed under the License
// is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express
// or implied. See the License for the specific language governing permissions and limitations under
// the License.

//! Word-packed bit-vector primitives.
//!
//! Every column of the tableau (one X or Z column, or the shared phase
//! vector) is stored as a slice of `u64` words, one bit per row. These
//! helpers are the only place that indexes into a word by bit position;
//! everything above this module works in terms of qubit/row indices.

/// Bits per word.
pub const WORD_BITS: usize = 64;

/// Words per cache line (64-byte line / 8-byte word), matching the
/// `CACHE_SIZE`-aligned allocations the original engine requires for its
/// slice buffers.
pub const CACHE_LINE_WORDS: usize = 8;

/// Returned by [`first_set_bit`] when no bit in range is set.
pub const CTZ_SENTINEL: usize = usize::MAX;

/// Number of `u64` words needed to hold `n_bits` bits.
#[must_use]
pub fn words_for(n_bits: usize) -> usize {
    n_bits.div_ceil(WORD_BITS)
}

/// Allocates a zeroed word buffer sized to a cache-line multiple.
///
/// `Vec<u64>`'s allocator does not expose an alignment knob the way
/// `posix_memalign` does; rounding the word count up to a full cache line
/// keeps every buffer a whole number of lines, which is the property the
/// rewrite rules' unrolled sweeps rely on.
#[must_use]
pub fn alloc_words(n_bits: usize) -> Vec<u64> {
    let words = words_for(n_bits);
    let lines = words.div_ceil(CACHE_LINE_WORDS);
    vec![0u64; lines * CACHE_LINE_WORDS]
}

#[must_use]
pub fn get_bit(words: &[u64], idx: usize) -> bool {
    let word = words[idx / WORD_BITS];
    (word >> (idx % WORD_BITS)) & 1 != 0
}

pub fn set_bit(words: &mut [u64], idx: usize, value: bool) {
    let w = idx / WORD_BITS;
    let b = idx % WORD_BITS;
    if value {
        words[w] |= 1u64 << b;
    } else {
        words[w] &= !(1u64 << b);
    }
}

/// Index of the first set bit among the first `n_bits` bits of `words`, or
/// [`CTZ_SENTINEL`] if none are set.
#[must_use]
pub fn first_set_bit(words: &[u64], n_bits: usize) -> usize {
    let full_words = n_bits / WORD_BITS;
    for (w, word) in words.iter().take(full_words).enumerate() {
        if *word != 0 {
            return w * WORD_BITS + word.trailing_zeros() as usize;
        }
    }
    let rem = n_bits % WORD_BITS;
    if rem != 0 {
        let mask = (1u64 << rem) - 1;
        let tail = words[full_words] & mask;
        if tail != 0 {
            return full_words * WORD_BITS + tail.trailing_zeros() as usize;
        }
    }
    CTZ_SENTINEL
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_for_rounds_up() {
        assert_eq!(words_for(0), 0);
        assert_eq!(words_for(1), 1);
        assert_eq!(words_for(64), 1);
        assert_eq!(words_for(65), 2);
    }

    #[test]
    fn get_set_bit_round_trip() {
        let mut words = alloc_words(130);
        assert!(!get_bit(&words, 70));
        set_bit(&mut words, 70, true);
        assert!(get_bit(&words, 70));
        set_bit(&mut words, 70, false);
        assert!(!get_bit(&words, 70));
    }

    #[test]
    fn first_set_bit_finds_within_range() {
        let mut words = alloc_words(10);
        assert_eq!(first_set_bit(&words, 10), CTZ_SENTINEL);
        set_bit(&mut words, 9, true);
        assert_eq!(first_set_bit(&words, 10), 9);
        // Bits beyond n_bits must not be reported, even if set.
        let mut words2 = alloc_words(10);
        set_bit(&mut words2, 12, true);
        assert_eq!(first_set_bit(&words2, 10), CTZ_SENTINEL);
    }

    #[test]
    fn alloc_words_rounds_to_cache_line() {
        let words = alloc_words(1);
        assert_eq!(words.len() % CACHE_LINE_WORDS, 0);
    }
}
