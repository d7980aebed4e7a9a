use des_cipher::crypto::des_transformation::DesTransformation;
use des_cipher::crypto::encryption_transformation::EncryptionTransformation;
use des_cipher::crypto::utils::{bits_to_u64, bytes_to_bits, u64_to_bits};
use des_cipher::RoundKey;

#[test]
fn test_f_function_example() {
    let r = bytes_to_bits(&hex_literal::hex!("F0AAF0AA"));
    let k = RoundKey::from(bytes_to_bits(&hex_literal::hex!("1B02EFFC7072")));
    let expected = hex_literal::hex!("234AA9BB");
    let out = DesTransformation.transform(&r, &k);
    assert_eq!(out, bytes_to_bits(&expected));
}

#[test]
fn test_f_function_zero_inputs() {
    // every S-box sees 000000 and emits the first entry of its top row
    let r = u64_to_bits(0, 32);
    let k = RoundKey::from(u64_to_bits(0, 48));
    let out = DesTransformation.transform(&r, &k);
    assert_eq!(out.len(), 32);
    assert_eq!(bits_to_u64(&out), 0xD8D8DBBC);
}

#[test]
fn test_substitute_covers_all_boxes() {
    let first_entries = [14, 15, 10, 7, 2, 12, 4, 13];
    for (index, &expected) in first_entries.iter().enumerate() {
        assert_eq!(DesTransformation.substitute(index, 0), Some(expected));
    }
    // 111111 is the bottom-right corner
    let last_entries = [13, 9, 12, 14, 3, 13, 12, 11];
    for (index, &expected) in last_entries.iter().enumerate() {
        assert_eq!(DesTransformation.substitute(index, 0b111111), Some(expected));
    }
}

#[test]
#[should_panic(expected = "DES round key must be 48 bits")]
fn test_short_round_key_panics() {
    let r = u64_to_bits(0, 32);
    let k = RoundKey::from(u64_to_bits(0, 40));
    let _ = DesTransformation.transform(&r, &k);
}

#[test]
#[should_panic(expected = "DES half block must be 32 bits")]
fn test_wrong_half_block_panics() {
    let r = u64_to_bits(0, 31);
    let k = RoundKey::from(u64_to_bits(0, 48));
    let _ = DesTransformation.transform(&r, &k);
}
