use crate::crypto::cipher_types::RoundKey;
use crate::crypto::utils::{Bits, Bitstring};

/// Round function `f` of a Feistel network.
///
/// Implementations may panic when `input_block` or `round_key` is not the
/// width they are built for. Callers taking untrusted widths check them first,
/// as `Des::round` does.
pub trait EncryptionTransformation {
    fn transform(&self, input_block: &Bits, round_key: &RoundKey) -> Bitstring;
}
