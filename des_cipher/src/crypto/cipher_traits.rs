use crate::crypto::error::DesError;
use crate::crypto::utils::{Bits, Bitstring};

pub trait CipherAlgorithm {
    fn encrypt_block(&self, block: &Bits, key: &Bits) -> Result<Bitstring, DesError>;
    fn decrypt_block(&self, block: &Bits, key: &Bits) -> Result<Bitstring, DesError>;
    fn block_size(&self) -> usize;
    fn rounds(&self) -> usize;
}
