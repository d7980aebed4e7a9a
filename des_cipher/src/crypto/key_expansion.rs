use crate::crypto::cipher_types::RoundKey;
use crate::crypto::error::DesError;
use crate::crypto::utils::Bits;

pub trait KeyExpansion {
    fn generate_round_keys(&self, key: &Bits) -> Result<Vec<RoundKey>, DesError>;
}
