use bitvec::prelude::*;
use des_cipher::crypto::des_key_expansion::DesKeySchedule;
use des_cipher::crypto::key_expansion::KeyExpansion;
use des_cipher::crypto::utils::u64_to_bits;
use des_cipher::{Bitstring, DesError, KeySize};
use std::sync::Arc;

const KEY: u64 = 0x133457799BBCDFF1;

const EXPECTED_ROUND_KEYS: [u64; 16] = [
    0x1B02EFFC7072,
    0x79AED9DBC9E5,
    0x55FC8A42CF99,
    0x72ADD6DB351D,
    0x7CEC07EB53A8,
    0x63A53E507B2F,
    0xEC84B7F618BC,
    0xF78A3AC13BFB,
    0xE0DBEBEDE781,
    0xB1F347BA464F,
    0x215FD3DED386,
    0x7571F59467E9,
    0x97C5D1FABA41,
    0x5F43B7F2E73A,
    0xBF918D3D3F0A,
    0xCB3D8B0E17F5,
];

#[test]
fn test_key_expansion_round1() {
    let key = hex_literal::hex!("133457799BBCDFF1");
    let k1 = DesKeySchedule::default().derive(&key).unwrap()[0].clone();
    assert_eq!(k1.to_u64(), 0x1B02EFFC7072);
    assert_eq!(k1.len(), 48);
    assert_eq!(k1.to_string(), "1B02EFFC7072");
}

#[test]
fn test_full_schedule_matches_reference() {
    let round_keys = DesKeySchedule::default().derive(&KEY).unwrap();
    let actual: Vec<u64> = round_keys.iter().map(|k| k.to_u64()).collect();
    assert_eq!(actual, EXPECTED_ROUND_KEYS);
}

#[test]
fn test_derive_is_deterministic() {
    let schedule = DesKeySchedule::default();
    assert_eq!(schedule.derive(&KEY).unwrap(), schedule.derive(&KEY).unwrap());
}

#[test]
fn test_truncated_schedule_is_prefix() {
    let full = DesKeySchedule::default().derive(&KEY).unwrap();
    for rounds in [0, 1, 5, 16] {
        let keys = DesKeySchedule::new(rounds).unwrap().derive(&KEY).unwrap();
        assert_eq!(keys.len(), rounds);
        assert_eq!(keys[..], full[..rounds]);
    }
}

#[test]
fn test_rounds_above_sixteen_are_rejected() {
    assert!(matches!(
        DesKeySchedule::new(17),
        Err(DesError::Configuration(_))
    ));
    assert!(DesKeySchedule::with_master_key(20, &KEY).is_err());
}

#[test]
fn test_left_shift_rotates_without_mutating() {
    let half = bitvec![u8, Msb0; 1, 0, 1, 0, 1, 0];

    let shifted = DesKeySchedule::left_shift(&half, 1).unwrap();
    assert_eq!(shifted, bitvec![u8, Msb0; 0, 1, 0, 1, 0, 1]);
    assert_eq!(half, bitvec![u8, Msb0; 1, 0, 1, 0, 1, 0]);

    // round 3 shifts by two
    let shifted = DesKeySchedule::left_shift(&half, 3).unwrap();
    assert_eq!(shifted, half);

    assert!(DesKeySchedule::left_shift(&half, 0).is_err());
    assert!(DesKeySchedule::left_shift(&half, 17).is_err());
}

#[test]
fn test_unbound_schedule_refuses_indexing() {
    let schedule = DesKeySchedule::default();
    assert!(!schedule.is_bound());
    assert_eq!(schedule.master_key(), None);
    assert!(matches!(schedule.round_key(0), Err(DesError::Configuration(_))));
    assert!(matches!(schedule.round_keys(), Err(DesError::Configuration(_))));
}

#[test]
fn test_bound_schedule_indexes_and_iterates() {
    let schedule = DesKeySchedule::with_master_key(16, &KEY).unwrap();
    assert!(schedule.is_bound());

    assert_eq!(schedule.round_key(0).unwrap().to_u64(), EXPECTED_ROUND_KEYS[0]);
    assert_eq!(schedule.round_key(15).unwrap().to_u64(), EXPECTED_ROUND_KEYS[15]);
    assert_eq!(
        schedule.round_key(16).unwrap_err(),
        DesError::RoundOutOfRange {
            round: 16,
            rounds: 16
        }
    );

    let first: Vec<u64> = schedule.round_keys().unwrap().map(|k| k.to_u64()).collect();
    let second: Vec<u64> = schedule.round_keys().unwrap().map(|k| k.to_u64()).collect();
    assert_eq!(first, EXPECTED_ROUND_KEYS);
    assert_eq!(first, second);
}

#[test]
fn test_equality_covers_master_key() {
    let a = DesKeySchedule::with_master_key(16, &KEY).unwrap();
    let b = DesKeySchedule::default().bind(&KEY).unwrap();
    assert_eq!(a, b);

    assert_ne!(a, DesKeySchedule::with_master_key(16, &0u64).unwrap());
    assert_ne!(a, DesKeySchedule::default());
    assert_ne!(
        DesKeySchedule::default(),
        DesKeySchedule::with_key_size(16, KeySize::Bits56).unwrap()
    );
}

#[test]
fn test_56_bit_key_matches_64_bit_key() {
    let schedule = DesKeySchedule::with_key_size(16, KeySize::Bits56).unwrap();
    let keys = schedule.derive(&0x12695BC9B7B7F8u64).unwrap();
    assert_eq!(keys, DesKeySchedule::default().derive(&KEY).unwrap());

    // parity bits do not take part in the schedule
    let flipped = KEY ^ 0x0101010101010101;
    assert_eq!(keys, DesKeySchedule::default().derive(&flipped).unwrap());
}

#[test]
fn test_key_expansion_through_trait_object() {
    let expansion: Arc<dyn KeyExpansion + Send + Sync> = Arc::new(DesKeySchedule::default());
    let key = u64_to_bits(KEY, 64);
    let keys = expansion.generate_round_keys(&key).unwrap();
    assert_eq!(keys.len(), 16);
    assert_eq!(keys[1].to_u64(), EXPECTED_ROUND_KEYS[1]);

    let short: Bitstring = bitvec![u8, Msb0; 0; 56];
    assert!(expansion.generate_round_keys(&short).is_err());
}

#[test]
fn test_display() {
    let schedule = DesKeySchedule::new(12).unwrap();
    assert_eq!(
        schedule.to_string(),
        "Original DES key schedule with 64-bit keys and 12 rounds"
    );
}
