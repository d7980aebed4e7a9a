use crate::crypto::cipher_traits::CipherAlgorithm;
use crate::crypto::cipher_types::{BlockValue, Mode, RoundKey};
use crate::crypto::des_key_expansion::DesKeySchedule;
use crate::crypto::des_tables::{FP, IP};
use crate::crypto::des_transformation::DesTransformation;
use crate::crypto::error::DesError;
use crate::crypto::feistel_network::FeistelNetwork;
use crate::crypto::key_expansion::KeyExpansion;
use crate::crypto::utils::{expect_len, permute, Bits, Bitstring};
use std::fmt;

/// DES block size in bits.
pub const BLOCK_SIZE: usize = 64;

const ROUND_KEY_SIZE: usize = 48;

/// DES with a configurable number of rounds.
///
/// A cipher with fewer rounds than its key schedule uses the leading round
/// keys only, which is what reduced-round experiments expect.
#[derive(Clone, Debug)]
pub struct Des {
    rounds: usize,
    blocksize: usize,
    key_schedule: DesKeySchedule,
    feistel_network: FeistelNetwork<DesTransformation>,
}

impl Des {
    /// `rounds` defaults to the key schedule's rounds, the key schedule to the
    /// standard 16-round one.
    pub fn new(rounds: Option<usize>, key_schedule: Option<DesKeySchedule>) -> Result<Self, DesError> {
        let key_schedule = key_schedule.unwrap_or_default();
        let rounds = match rounds {
            None => key_schedule.rounds(),
            Some(rounds) if rounds <= key_schedule.rounds() => rounds,
            Some(rounds) => {
                return Err(DesError::configuration(format!(
                    "number of rounds must be less than or equal to the number of rounds \
                     of the key schedule ({rounds} > {})",
                    key_schedule.rounds()
                )));
            }
        };

        log::debug!("DES configured with {rounds} rounds ({key_schedule})");

        Ok(Des {
            rounds,
            blocksize: BLOCK_SIZE,
            key_schedule,
            feistel_network: FeistelNetwork::new(DesTransformation),
        })
    }

    pub fn rounds(&self) -> usize {
        self.rounds
    }

    pub fn blocksize(&self) -> usize {
        self.blocksize
    }

    pub fn key_schedule(&self) -> &DesKeySchedule {
        &self.key_schedule
    }

    /// Encrypts `plaintext` under `key`; the result has the plaintext's type.
    pub fn encrypt<B: BlockValue, K: BlockValue>(&self, plaintext: &B, key: &K) -> Result<B, DesError> {
        let (block, key) = self.prepare(plaintext, key)?;
        let ciphertext = self.encrypt_block(&block, &key)?;
        Ok(B::from_bits(&ciphertext))
    }

    /// Decrypts `ciphertext` under `key`; the result has the ciphertext's type.
    pub fn decrypt<B: BlockValue, K: BlockValue>(&self, ciphertext: &B, key: &K) -> Result<B, DesError> {
        let (block, key) = self.prepare(ciphertext, key)?;
        let plaintext = self.decrypt_block(&block, &key)?;
        Ok(B::from_bits(&plaintext))
    }

    pub fn apply<B: BlockValue, K: BlockValue>(&self, block: &B, key: &K, mode: Mode) -> Result<B, DesError> {
        match mode {
            Mode::Encrypt => self.encrypt(block, key),
            Mode::Decrypt => self.decrypt(block, key),
        }
    }

    /// A single Feistel round on a 64-bit state `L ‖ R`, giving
    /// `R ‖ L ⊕ f(R, K)`.
    pub fn round(&self, state: &Bits, round_key: &RoundKey) -> Result<Bitstring, DesError> {
        expect_len("state", state, BLOCK_SIZE)?;
        expect_len("round key", round_key.as_bits(), ROUND_KEY_SIZE)?;
        Ok(self.feistel_network.round(state, round_key))
    }

    fn prepare<B: BlockValue, K: BlockValue>(&self, block: &B, key: &K) -> Result<(Bitstring, Bitstring), DesError> {
        let block = block.to_bits("block", self.blocksize)?;
        let key = key.to_bits("key", self.key_schedule.key_size().bits())?;
        Ok((block, key))
    }

    fn round_keys(&self, key: &Bits) -> Result<Vec<RoundKey>, DesError> {
        let mut round_keys = self.key_schedule.generate_round_keys(key)?;
        round_keys.truncate(self.rounds);
        Ok(round_keys)
    }
}

impl Default for Des {
    fn default() -> Self {
        Des {
            rounds: DesKeySchedule::default().rounds(),
            blocksize: BLOCK_SIZE,
            key_schedule: DesKeySchedule::default(),
            feistel_network: FeistelNetwork::new(DesTransformation),
        }
    }
}

impl PartialEq for Des {
    fn eq(&self, other: &Self) -> bool {
        self.rounds == other.rounds
            && self.key_schedule == other.key_schedule
            && self.blocksize == other.blocksize
    }
}

impl Eq for Des {}

impl CipherAlgorithm for Des {
    fn encrypt_block(&self, block: &Bits, key: &Bits) -> Result<Bitstring, DesError> {
        expect_len("block", block, self.blocksize)?;
        let round_keys = self.round_keys(key)?;

        let permuted = permute(block, &IP);
        let result = self
            .feistel_network
            .encrypt_with_round_keys(&permuted, &round_keys);
        Ok(permute(&result, &FP))
    }

    fn decrypt_block(&self, block: &Bits, key: &Bits) -> Result<Bitstring, DesError> {
        expect_len("block", block, self.blocksize)?;
        let round_keys = self.round_keys(key)?;

        let permuted = permute(block, &IP);
        let result = self
            .feistel_network
            .decrypt_with_round_keys(&permuted, &round_keys);
        Ok(permute(&result, &FP))
    }

    fn block_size(&self) -> usize {
        self.blocksize
    }

    fn rounds(&self) -> usize {
        self.rounds
    }
}

impl fmt::Display for Des {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "DES block cipher with {} rounds and the following key schedule:\n{}",
            self.rounds, self.key_schedule
        )
    }
}
