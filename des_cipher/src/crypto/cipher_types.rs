use crate::crypto::error::DesError;
use crate::crypto::utils::{bits_to_bytes, bits_to_u64, bytes_to_bits, expect_len, u64_to_bits, Bits, Bitstring};
use std::fmt;
use std::str::FromStr;

/// Direction of a cipher call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mode {
    Encrypt,
    Decrypt,
}

impl FromStr for Mode {
    type Err = DesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "encrypt" => Ok(Mode::Encrypt),
            "decrypt" => Ok(Mode::Decrypt),
            other => Err(DesError::configuration(format!(
                "algorithm must be 'encrypt' or 'decrypt' and not '{other}'"
            ))),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Encrypt => f.write_str("encrypt"),
            Mode::Decrypt => f.write_str("decrypt"),
        }
    }
}

/// Width of the master key handed to the key schedule.
///
/// `Bits64` keys carry a parity bit in every byte which PC1 discards.
/// `Bits56` keys leave the parity bits out entirely.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum KeySize {
    Bits56,
    #[default]
    Bits64,
}

impl KeySize {
    pub fn bits(self) -> usize {
        match self {
            KeySize::Bits56 => 56,
            KeySize::Bits64 => 64,
        }
    }
}

/// One 48-bit DES subkey. Read-only once derived.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoundKey(Bitstring);

impl RoundKey {
    pub fn as_bits(&self) -> &Bits {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn to_u64(&self) -> u64 {
        bits_to_u64(&self.0)
    }
}

impl From<Bitstring> for RoundKey {
    fn from(bits: Bitstring) -> Self {
        RoundKey(bits)
    }
}

impl From<RoundKey> for Bitstring {
    fn from(key: RoundKey) -> Self {
        key.0
    }
}

impl fmt::Display for RoundKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.0.len().div_ceil(4);
        write!(f, "{:0width$X}", self.to_u64(), width = digits)
    }
}

/// A value that can stand in for a block or key: an integer, an explicit bit
/// sequence, or big-endian bytes.
///
/// The cipher hands its result back in the same representation as the block
/// argument.
pub trait BlockValue: Sized {
    /// Bit view of `self`, which must be exactly `width` bits wide.
    fn to_bits(&self, what: &'static str, width: usize) -> Result<Bitstring, DesError>;

    fn from_bits(bits: &Bits) -> Self;
}

impl BlockValue for u64 {
    fn to_bits(&self, what: &'static str, width: usize) -> Result<Bitstring, DesError> {
        let used = (u64::BITS - self.leading_zeros()) as usize;
        if width > 64 || used > width {
            return Err(DesError::InvalidLength {
                what,
                expected: width,
                actual: used,
            });
        }
        Ok(u64_to_bits(*self, width))
    }

    fn from_bits(bits: &Bits) -> Self {
        bits_to_u64(bits)
    }
}

impl BlockValue for Bitstring {
    fn to_bits(&self, what: &'static str, width: usize) -> Result<Bitstring, DesError> {
        expect_len(what, self, width)?;
        Ok(self.clone())
    }

    fn from_bits(bits: &Bits) -> Self {
        bits.to_bitvec()
    }
}

impl BlockValue for [u8; 8] {
    fn to_bits(&self, what: &'static str, width: usize) -> Result<Bitstring, DesError> {
        let bits = bytes_to_bits(self);
        expect_len(what, &bits, width)?;
        Ok(bits)
    }

    fn from_bits(bits: &Bits) -> Self {
        let mut bytes = [0u8; 8];
        for (byte, packed) in bytes.iter_mut().zip(bits_to_bytes(bits)) {
            *byte = packed;
        }
        bytes
    }
}
