use crate::crypto::cipher_types::RoundKey;
use crate::crypto::encryption_transformation::EncryptionTransformation;
use crate::crypto::utils::{xor_bits, Bits, Bitstring};

/// Balanced Feistel network driven by a round function `T`.
///
/// The number of rounds is the number of round keys handed to each call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FeistelNetwork<T> {
    transformation: T,
}

impl<T: EncryptionTransformation> FeistelNetwork<T> {
    pub fn new(transformation: T) -> Self {
        Self { transformation }
    }

    /// One round: `L ‖ R` becomes `R ‖ L ⊕ f(R, K)`.
    pub fn round(&self, state: &Bits, round_key: &RoundKey) -> Bitstring {
        assert_eq!(state.len() % 2, 0, "Block size must be even");

        let (left, right) = state.split_at(state.len() / 2);
        let feistel_out = self.transformation.transform(right, round_key);

        let mut next = right.to_bitvec();
        next.extend_from_bitslice(&xor_bits(left, &feistel_out));
        next
    }

    /// Runs the rounds in key order and emits `R_n ‖ L_n`, so the last round
    /// is not followed by a swap.
    pub fn encrypt_with_round_keys<'a, I>(&self, block: &Bits, round_keys: I) -> Bitstring
    where
        I: IntoIterator<Item = &'a RoundKey>,
    {
        let mut state = block.to_bitvec();
        for (index, round_key) in round_keys.into_iter().enumerate() {
            state = self.round(&state, round_key);
            log::trace!("feistel round {} done", index + 1);
        }

        let (left, right) = state.split_at(state.len() / 2);
        let mut output = right.to_bitvec();
        output.extend_from_bitslice(left);
        output
    }

    /// Same structure as encryption with the key order reversed.
    pub fn decrypt_with_round_keys(&self, block: &Bits, round_keys: &[RoundKey]) -> Bitstring {
        self.encrypt_with_round_keys(block, round_keys.iter().rev())
    }
}
