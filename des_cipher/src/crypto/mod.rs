pub mod cipher_traits;
pub mod cipher_types;
pub mod des;
pub mod des_key_expansion;
pub mod des_tables;
pub mod des_transformation;
pub mod encryption_transformation;
pub mod error;
pub mod feistel_network;
pub mod key_expansion;
pub mod utils;

use crate::crypto::cipher_types::RoundKey;
use crate::crypto::encryption_transformation::EncryptionTransformation;
use crate::crypto::error::DesError;
use crate::crypto::key_expansion::KeyExpansion;
use crate::crypto::utils::{Bits, Bitstring};
use std::sync::Arc;

impl<T: KeyExpansion + ?Sized> KeyExpansion for Arc<T> {
    fn generate_round_keys(&self, key: &Bits) -> Result<Vec<RoundKey>, DesError> {
        (**self).generate_round_keys(key)
    }
}

impl<T: EncryptionTransformation + ?Sized> EncryptionTransformation for Arc<T> {
    fn transform(&self, input_block: &Bits, round_key: &RoundKey) -> Bitstring {
        (**self).transform(input_block, round_key)
    }
}
