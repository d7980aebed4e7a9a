use crate::crypto::cipher_types::{BlockValue, KeySize, RoundKey};
use crate::crypto::des_tables::{PC1, PC2, SHIFT_BITS};
use crate::crypto::error::DesError;
use crate::crypto::key_expansion::KeyExpansion;
use crate::crypto::utils::{permute, rotate_left, Bits, Bitstring};
use std::fmt;

/// Largest number of rounds the standard shift table covers.
pub const MAX_ROUNDS: usize = SHIFT_BITS.len();

const HALF_LEN: usize = 28;

/// The DES key schedule.
///
/// An `Unbound` schedule derives round keys from whatever master key a call
/// supplies. A `Bound` schedule carries its own master key and can be indexed
/// and iterated directly.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DesKeySchedule {
    Unbound {
        rounds: usize,
        key_size: KeySize,
    },
    Bound {
        rounds: usize,
        key_size: KeySize,
        master_key: Bitstring,
    },
}

impl Default for DesKeySchedule {
    fn default() -> Self {
        DesKeySchedule::Unbound {
            rounds: MAX_ROUNDS,
            key_size: KeySize::Bits64,
        }
    }
}

impl DesKeySchedule {
    pub fn new(rounds: usize) -> Result<Self, DesError> {
        Self::with_key_size(rounds, KeySize::Bits64)
    }

    pub fn with_key_size(rounds: usize, key_size: KeySize) -> Result<Self, DesError> {
        if rounds > MAX_ROUNDS {
            return Err(DesError::configuration(format!(
                "the DES key schedule covers at most {MAX_ROUNDS} rounds, got {rounds}"
            )));
        }
        Ok(DesKeySchedule::Unbound { rounds, key_size })
    }

    /// Standard 64-bit key schedule bound to `master_key`.
    pub fn with_master_key<K: BlockValue>(rounds: usize, master_key: &K) -> Result<Self, DesError> {
        Self::new(rounds)?.bind(master_key)
    }

    /// Returns a bound copy of this schedule using `master_key`.
    pub fn bind<K: BlockValue>(&self, master_key: &K) -> Result<Self, DesError> {
        let master_key = master_key.to_bits("master key", self.key_size().bits())?;
        Ok(DesKeySchedule::Bound {
            rounds: self.rounds(),
            key_size: self.key_size(),
            master_key,
        })
    }

    pub fn rounds(&self) -> usize {
        match self {
            DesKeySchedule::Unbound { rounds, .. } | DesKeySchedule::Bound { rounds, .. } => *rounds,
        }
    }

    pub fn key_size(&self) -> KeySize {
        match self {
            DesKeySchedule::Unbound { key_size, .. } | DesKeySchedule::Bound { key_size, .. } => {
                *key_size
            }
        }
    }

    pub fn master_key(&self) -> Option<&Bits> {
        match self {
            DesKeySchedule::Unbound { .. } => None,
            DesKeySchedule::Bound { master_key, .. } => Some(master_key.as_bitslice()),
        }
    }

    pub fn is_bound(&self) -> bool {
        matches!(self, DesKeySchedule::Bound { .. })
    }

    /// All round keys for `master_key`, in round order.
    pub fn derive<K: BlockValue>(&self, master_key: &K) -> Result<Vec<RoundKey>, DesError> {
        let key = master_key.to_bits("master key", self.key_size().bits())?;
        log::debug!(
            "deriving {} round keys from a {}-bit master key",
            self.rounds(),
            self.key_size().bits()
        );
        Ok(self.iter_from(&key).collect())
    }

    /// Lazy iterator over the bound master key's round keys.
    ///
    /// Every call starts over from round 1.
    pub fn round_keys(&self) -> Result<RoundKeys, DesError> {
        let master_key = self.bound_key()?;
        Ok(self.iter_from(master_key))
    }

    /// Round key `round` (0-based) of the bound master key.
    pub fn round_key(&self, round: usize) -> Result<RoundKey, DesError> {
        let master_key = self.bound_key()?;
        if round >= self.rounds() {
            return Err(DesError::RoundOutOfRange {
                round,
                rounds: self.rounds(),
            });
        }
        self.iter_from(master_key)
            .nth(round)
            .ok_or(DesError::RoundOutOfRange {
                round,
                rounds: self.rounds(),
            })
    }

    /// Rotates a key half left by the shift amount of 1-based round `round`.
    ///
    /// `half` itself is not modified.
    pub fn left_shift(half: &Bits, round: usize) -> Result<Bitstring, DesError> {
        let amount = round
            .checked_sub(1)
            .and_then(|i| SHIFT_BITS.get(i).copied())
            .ok_or(DesError::RoundOutOfRange {
                round,
                rounds: MAX_ROUNDS,
            })?;
        Ok(rotate_left(half, amount))
    }

    fn bound_key(&self) -> Result<&Bits, DesError> {
        self.master_key()
            .ok_or_else(|| DesError::configuration("key not set during initialisation"))
    }

    fn iter_from(&self, key: &Bits) -> RoundKeys {
        let full_key = match self.key_size() {
            KeySize::Bits64 => key.to_bitvec(),
            KeySize::Bits56 => insert_parity_bits(key),
        };
        RoundKeys::new(&full_key, self.rounds())
    }
}

// 7 key bits followed by a zero parity bit, eight times over.
fn insert_parity_bits(key: &Bits) -> Bitstring {
    let mut full = Bitstring::with_capacity(64);
    for chunk in key.chunks(7) {
        full.extend_from_bitslice(chunk);
        full.push(false);
    }
    full
}

impl KeyExpansion for DesKeySchedule {
    fn generate_round_keys(&self, key: &Bits) -> Result<Vec<RoundKey>, DesError> {
        self.derive(&key.to_bitvec())
    }
}

impl fmt::Display for DesKeySchedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Original DES key schedule with {}-bit keys and {} rounds",
            self.key_size().bits(),
            self.rounds()
        )
    }
}

/// Round keys computed one round per `next()`.
#[derive(Clone, Debug)]
pub struct RoundKeys {
    c: Bitstring,
    d: Bitstring,
    round: usize,
    rounds: usize,
}

impl RoundKeys {
    fn new(key: &Bits, rounds: usize) -> Self {
        // PC-1 drops the parity bits, then the result splits into C0 and D0
        let permuted = permute(key, &PC1);
        let (c, d) = permuted.split_at(HALF_LEN);
        RoundKeys {
            c: c.to_bitvec(),
            d: d.to_bitvec(),
            round: 0,
            rounds: rounds.min(MAX_ROUNDS),
        }
    }
}

impl Iterator for RoundKeys {
    type Item = RoundKey;

    fn next(&mut self) -> Option<RoundKey> {
        if self.round >= self.rounds {
            return None;
        }
        let shift = SHIFT_BITS[self.round];
        self.round += 1;

        self.c = rotate_left(&self.c, shift);
        self.d = rotate_left(&self.d, shift);

        let mut cd = Bitstring::with_capacity(2 * HALF_LEN);
        cd.extend_from_bitslice(&self.c);
        cd.extend_from_bitslice(&self.d);

        let subkey = RoundKey::from(permute(&cd, &PC2));
        log::trace!("round key {}: {}", self.round, subkey);
        Some(subkey)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.rounds - self.round;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for RoundKeys {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::utils::u64_to_bits;

    #[test]
    fn parity_bits_land_in_every_eighth_position() {
        let key = u64_to_bits((1 << 56) - 1, 56);
        let full = insert_parity_bits(&key);
        assert_eq!(full.len(), 64);
        for (i, bit) in full.iter().by_vals().enumerate() {
            assert_eq!(bit, i % 8 != 7, "bit {i}");
        }
    }

    #[test]
    fn iterator_reports_exact_length() {
        let schedule = DesKeySchedule::with_master_key(5, &0u64).unwrap();
        let mut keys = schedule.round_keys().unwrap();
        assert_eq!(keys.len(), 5);
        keys.next();
        assert_eq!(keys.len(), 4);
    }
}
