//! Base58 and Base58Check encoding.
//!
//! Plain positional base 58 over the Bitcoin alphabet, with each leading zero
//! byte carried as a leading `'1'`. Base58Check appends the first four bytes
//! of a double SHA256 over the payload. Version bytes are the caller's job.

use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;
use thiserror::Error;
use crate::hash::double_sha256;

const BASE58_ALPHABET: &[u8; 58] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Length of the Base58Check checksum in bytes.
pub const CHECKSUM_LEN: usize = 4;

/// Base58 decoding errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Base58Error {
    /// Character outside the Base58 alphabet
    #[error("Invalid Base58 character: {0}")]
    InvalidCharacter(char),
    /// Checksum does not match the payload
    #[error("Invalid checksum")]
    ChecksumMismatch,
    /// Decoded data is shorter than a checksum
    #[error("Base58Check data too short")]
    TooShort,
}

/// First four bytes of SHA256(SHA256(payload)).
pub fn checksum(payload: &[u8]) -> [u8; CHECKSUM_LEN] {
    let hash = double_sha256(payload);
    let mut result = [0u8; CHECKSUM_LEN];
    result.copy_from_slice(&hash[..CHECKSUM_LEN]);
    result
}

/// Encode bytes as Base58.
pub fn encode(input: &[u8]) -> String {
    let leading_zeros = input.iter().take_while(|&&b| b == 0).count();

    // Base-58 digits, least significant first
    let mut digits: Vec<u8> = Vec::with_capacity(input.len() * 138 / 100 + 1);
    for &byte in &input[leading_zeros..] {
        let mut carry = byte as u32;
        for digit in digits.iter_mut() {
            let temp = ((*digit as u32) << 8) + carry;
            *digit = (temp % 58) as u8;
            carry = temp / 58;
        }
        while carry > 0 {
            digits.push((carry % 58) as u8);
            carry /= 58;
        }
    }

    let mut result = String::with_capacity(leading_zeros + digits.len());
    for _ in 0..leading_zeros {
        result.push('1');
    }
    for &digit in digits.iter().rev() {
        result.push(BASE58_ALPHABET[digit as usize] as char);
    }
    result
}

/// Decode a Base58 string.
pub fn decode(input: &str) -> Result<Vec<u8>, Base58Error> {
    let mut result = Vec::new();

    // Count leading '1's (they become leading zeros)
    let leading_zeros = input.chars().take_while(|&c| c == '1').count();

    for c in input.chars() {
        let value = alphabet_index(c).ok_or(Base58Error::InvalidCharacter(c))?;

        // Multiply result by 58 and add value
        let mut carry = value;
        for byte in result.iter_mut().rev() {
            let temp = (*byte as u32) * 58 + carry;
            *byte = (temp & 0xFF) as u8;
            carry = temp >> 8;
        }

        while carry > 0 {
            result.insert(0, (carry & 0xFF) as u8);
            carry >>= 8;
        }
    }

    // Add leading zeros
    let mut final_result = vec![0u8; leading_zeros];
    final_result.extend(result);

    Ok(final_result)
}

/// Append the checksum and Base58-encode.
pub fn encode_check(payload: &[u8]) -> String {
    let mut data = Vec::with_capacity(payload.len() + CHECKSUM_LEN);
    data.extend_from_slice(payload);
    data.extend_from_slice(&checksum(payload));
    encode(&data)
}

/// Decode a Base58Check string and return the payload without its checksum.
pub fn decode_check(input: &str) -> Result<Vec<u8>, Base58Error> {
    let mut decoded = decode(input)?;

    if decoded.len() < CHECKSUM_LEN {
        return Err(Base58Error::TooShort);
    }

    let split = decoded.len() - CHECKSUM_LEN;
    if decoded[split..] != checksum(&decoded[..split]) {
        return Err(Base58Error::ChecksumMismatch);
    }

    decoded.truncate(split);
    Ok(decoded)
}

fn alphabet_index(c: char) -> Option<u32> {
    if !c.is_ascii() {
        return None;
    }
    BASE58_ALPHABET
        .iter()
        .position(|&x| x == c as u8)
        .map(|i| i as u32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // Pairs from Bitcoin Core's base58_encode_decode.json
    const VECTORS: &[(&str, &str)] = &[
        ("", ""),
        ("61", "2g"),
        ("626262", "a3gV"),
        ("636363", "aPEr"),
        ("00eb15231dfceb60925886b67d065299925915aeb172c06647", "1NS17iag9jJgTHD1VXjvLCEnZuQ3rJDE9L"),
        ("516b6fcd0f", "ABnLTmg"),
        ("572e4794", "3EFU7m"),
        ("10c8511e", "Rt5zm"),
        ("00000000000000000000", "1111111111"),
        (
            "000111d38e5fc9071ffcd20b4a763cc9ae4f252bb4e48fd66a835e252ada93ff480d6dd43dc62a641155a5",
            "123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz",
        ),
    ];

    #[test]
    fn test_known_vectors() {
        for (hex_str, expected) in VECTORS {
            let bytes = hex::decode(hex_str).unwrap();
            assert_eq!(encode(&bytes), *expected, "encoding {}", hex_str);
            assert_eq!(decode(expected).unwrap(), bytes, "decoding {}", expected);
        }
    }

    #[test]
    fn test_leading_zeros_preserved() {
        let data = [0x00, 0x00, 0x00, 0x01, 0x02];
        let encoded = encode(&data);
        assert!(encoded.starts_with("111"));
        assert!(!encoded[3..].starts_with('1'));
        assert_eq!(decode(&encoded).unwrap(), data);
    }

    #[test]
    fn test_invalid_character() {
        for bad in ["0", "O", "I", "l", "1BvB+"] {
            assert!(matches!(decode(bad), Err(Base58Error::InvalidCharacter(_))), "{}", bad);
        }
        assert_eq!(decode("abc\u{e9}"), Err(Base58Error::InvalidCharacter('\u{e9}')));
    }

    #[test]
    fn test_decode_check_address() {
        // A known mainnet P2PKH address
        let payload = decode_check("1BvBMSEYstWetqTFn5Au4m4GFg7xJaNVN2").unwrap();
        assert_eq!(payload.len(), 21);
        assert_eq!(payload[0], 0x00);
    }

    #[test]
    fn test_decode_check_bad_checksum() {
        // Changed last char
        let result = decode_check("1BvBMSEYstWetqTFn5Au4m4GFg7xJaNVN3");
        assert_eq!(result, Err(Base58Error::ChecksumMismatch));
    }

    #[test]
    fn test_decode_check_too_short() {
        assert_eq!(decode_check("1"), Err(Base58Error::TooShort));
        assert_eq!(decode_check(""), Err(Base58Error::TooShort));
    }

    #[test]
    fn test_checksum_is_double_sha256_prefix() {
        let hash = double_sha256(b"payload");
        assert_eq!(checksum(b"payload"), [hash[0], hash[1], hash[2], hash[3]]);
    }

    proptest! {
        #[test]
        fn prop_check_round_trip(payload in proptest::collection::vec(any::<u8>(), 0..64)) {
            let encoded = encode_check(&payload);
            prop_assert_eq!(decode_check(&encoded).unwrap(), payload);
        }

        #[test]
        fn prop_leading_zero_count_matches(zeros in 0usize..8, tail in proptest::collection::vec(1u8..=255, 1..16)) {
            let mut data = vec![0u8; zeros];
            data.extend_from_slice(&tail);
            let encoded = encode(&data);
            prop_assert_eq!(encoded.chars().take_while(|&c| c == '1').count(), zeros);
            prop_assert_eq!(decode(&encoded).unwrap(), data);
        }

        #[test]
        fn prop_single_char_mutation_detected(
            payload in proptest::collection::vec(any::<u8>(), 1..40),
            position in any::<prop::sample::Index>(),
            replacement in any::<prop::sample::Index>(),
        ) {
            let encoded = encode_check(&payload);
            let mut chars: Vec<char> = encoded.chars().collect();
            let at = position.index(chars.len());
            let original = chars[at];
            let mut new_char = BASE58_ALPHABET[replacement.index(58)] as char;
            if new_char == original {
                new_char = if original == 'z' { 'y' } else { 'z' };
            }
            chars[at] = new_char;
            let mutated: String = chars.into_iter().collect();

            // A changed digit changes the decoded value, so the checksum or
            // length check must trip
            prop_assert!(decode_check(&mutated).is_err());
        }
    }
}
