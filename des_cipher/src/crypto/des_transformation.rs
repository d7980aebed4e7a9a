use crate::crypto::cipher_types::RoundKey;
use crate::crypto::des_tables::{E, P, S_BOXES};
use crate::crypto::encryption_transformation::EncryptionTransformation;
use crate::crypto::utils::{bits_to_u64, permute, u64_to_bits, xor_bits, Bits, Bitstring};

const HALF_BLOCK_SIZE: usize = 32;
const ROUND_KEY_SIZE: usize = 48;

/// The DES round function `f(R, K) = P(S(E(R) ⊕ K))`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DesTransformation;

impl DesTransformation {
    /// Looks up S-box `index` (0-based) for a 6-bit input.
    ///
    /// Returns `None` when `index` is not one of the eight boxes.
    pub fn substitute(&self, index: usize, input: u8) -> Option<u8> {
        S_BOXES.get(index).map(|sbox| lookup(sbox, input))
    }
}

// Outer bits pick the row, the middle four the column.
fn lookup(sbox: &[u8; 64], input: u8) -> u8 {
    let row = ((input >> 4) & 0b10) | (input & 1);
    let col = (input >> 1) & 0x0F;
    sbox[(row * 16 + col) as usize]
}

impl EncryptionTransformation for DesTransformation {
    /// # Panics
    ///
    /// Panics unless `r_block` is 32 bits and `round_key` is 48 bits.
    fn transform(&self, r_block: &Bits, round_key: &RoundKey) -> Bitstring {
        assert_eq!(r_block.len(), HALF_BLOCK_SIZE, "DES half block must be 32 bits");
        assert_eq!(round_key.len(), ROUND_KEY_SIZE, "DES round key must be 48 bits");

        // 1. Expansion
        let expanded = permute(r_block, &E);

        // 2. XOR
        let mixed = xor_bits(&expanded, round_key.as_bits());

        // 3. S-boxes
        let mut s_result = Bitstring::with_capacity(32);
        for (sbox, group) in S_BOXES.iter().zip(mixed.chunks(6)) {
            let s_val = lookup(sbox, bits_to_u64(group) as u8);
            s_result.extend_from_bitslice(&u64_to_bits(u64::from(s_val), 4));
        }

        // 4. P-permutation
        permute(&s_result, &P)
    }
}
