use crate::crypto::error::DesError;
use bitvec::prelude::{BitSlice, BitVec, Msb0};

/// Ordered bit sequence used for blocks, keys and every intermediate value.
/// Index 0 is the most significant bit.
pub type Bitstring = BitVec<u8, Msb0>;

/// Borrowed view of a [`Bitstring`].
pub type Bits = BitSlice<u8, Msb0>;

/// Reorders `data` according to a 1-based selection table.
///
/// The output has one bit per table entry, so the same routine covers plain
/// permutations (IP, FP, P), expansions (E) and contractions (PC1, PC2).
pub fn permute(data: &Bits, table: &[usize]) -> Bitstring {
    table.iter().map(|&pos| data[pos - 1]).collect()
}

/// # Panics
///
/// Panics if `a` and `b` differ in length.
pub fn xor_bits(a: &Bits, b: &Bits) -> Bitstring {
    assert_eq!(a.len(), b.len(), "xor of bit strings with different lengths");
    a.iter()
        .by_vals()
        .zip(b.iter().by_vals())
        .map(|(x, y)| x ^ y)
        .collect()
}

/// Circular left rotation by `amount`: `half[amount..] ++ half[..amount]`.
/// The input is left untouched.
pub fn rotate_left(half: &Bits, amount: usize) -> Bitstring {
    let mut rotated = half.to_bitvec();
    if !rotated.is_empty() {
        rotated.rotate_left(amount % half.len());
    }
    rotated
}

/// Big-endian bit expansion of the low `width` bits of `value`.
pub fn u64_to_bits(value: u64, width: usize) -> Bitstring {
    debug_assert!(width <= 64);
    (0..width).rev().map(|i| (value >> i) & 1 == 1).collect()
}

/// Folds at most 64 bits back into an integer, first bit most significant.
pub fn bits_to_u64(bits: &Bits) -> u64 {
    debug_assert!(bits.len() <= 64);
    bits.iter()
        .by_vals()
        .fold(0u64, |acc, bit| (acc << 1) | u64::from(bit))
}

pub fn bytes_to_bits(input: &[u8]) -> Bitstring {
    let mut bits = Bitstring::with_capacity(input.len() * 8);
    for &byte in input {
        for i in (0..8).rev() {
            bits.push((byte >> i) & 1 != 0);
        }
    }
    bits
}

pub fn bits_to_bytes(bits: &Bits) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(bits.len().div_ceil(8));

    for chunk in bits.chunks(8) {
        let mut byte = 0;
        for (i, bit) in chunk.iter().by_vals().enumerate() {
            if bit {
                byte |= 1 << (7 - i);
            }
        }
        bytes.push(byte);
    }
    bytes
}

pub(crate) fn expect_len(what: &'static str, bits: &Bits, expected: usize) -> Result<(), DesError> {
    if bits.len() != expected {
        return Err(DesError::InvalidLength {
            what,
            expected,
            actual: bits.len(),
        });
    }
    Ok(())
}
