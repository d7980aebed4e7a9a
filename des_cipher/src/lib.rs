//! DES (FIPS 46-3) block cipher with a configurable, truncatable key schedule.
pub mod crypto;
pub use crypto::cipher_traits::*;
pub use crypto::cipher_types::*;
pub use crypto::des::{Des, BLOCK_SIZE};
pub use crypto::des_key_expansion::{DesKeySchedule, RoundKeys, MAX_ROUNDS};
pub use crypto::error::DesError;
pub use crypto::utils::{Bits, Bitstring};
