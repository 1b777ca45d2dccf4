//! Base58 and Base58Check codecs.
//!
//! Input bytes are treated as one big-endian unsigned integer and converted
//! digit by digit, so arbitrarily long inputs are exact. Each leading zero
//! byte maps to a leading `'1'` and back.

use crate::crypto::hash::{checksum, CHECKSUM_LEN};
use crate::error::{Error, Result};

/// The Bitcoin base-58 alphabet (no `0`, `O`, `I` or `l`).
pub const ALPHABET: &[u8; 58] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

const INVALID: u8 = 0xff;

/// ASCII -> digit value, `INVALID` for characters outside the alphabet.
const DECODE_MAP: [u8; 128] = {
    let mut map = [INVALID; 128];
    let mut i = 0;
    while i < ALPHABET.len() {
        map[ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    map
};

#[inline]
fn digit_value(c: char) -> Option<u8> {
    if !c.is_ascii() {
        return None;
    }
    match DECODE_MAP[c as usize] {
        INVALID => None,
        value => Some(value),
    }
}

/// Encodes bytes as base-58 text.
pub fn encode(bytes: &[u8]) -> String {
    let zeros = bytes.iter().take_while(|&&b| b == 0).count();

    // log(256) / log(58) ~= 1.366
    let mut digits: Vec<u8> = Vec::with_capacity((bytes.len() - zeros) * 138 / 100 + 1);
    for &byte in &bytes[zeros..] {
        let mut carry = byte as u32;
        for digit in digits.iter_mut() {
            carry += (*digit as u32) << 8;
            *digit = (carry % 58) as u8;
            carry /= 58;
        }
        while carry > 0 {
            digits.push((carry % 58) as u8);
            carry /= 58;
        }
    }

    let mut encoded = String::with_capacity(zeros + digits.len());
    encoded.extend(std::iter::repeat('1').take(zeros));
    encoded.extend(digits.iter().rev().map(|&d| ALPHABET[d as usize] as char));
    encoded
}

/// Decodes base-58 text back into bytes.
pub fn decode(text: &str) -> Result<Vec<u8>> {
    let zeros = text.chars().take_while(|&c| c == '1').count();

    // Little-endian accumulator.
    let mut bytes: Vec<u8> = Vec::with_capacity(text.len() * 733 / 1000 + 1);
    for (position, character) in text.chars().enumerate() {
        let value = digit_value(character).ok_or(Error::InvalidCharacter {
            character,
            position,
        })?;

        let mut carry = value as u32;
        for byte in bytes.iter_mut() {
            carry += (*byte as u32) * 58;
            *byte = (carry & 0xff) as u8;
            carry >>= 8;
        }
        while carry > 0 {
            bytes.push((carry & 0xff) as u8);
            carry >>= 8;
        }
    }

    let mut decoded = vec![0u8; zeros];
    decoded.extend(bytes.iter().rev());
    Ok(decoded)
}

/// Appends the 4-byte checksum of `payload` and base-58 encodes the result.
pub fn encode_check(payload: &[u8]) -> String {
    let mut data = Vec::with_capacity(payload.len() + CHECKSUM_LEN);
    data.extend_from_slice(payload);
    data.extend_from_slice(&checksum(payload));
    encode(&data)
}

/// Decodes Base58Check text and verifies its trailing checksum.
///
/// Returns the payload without the checksum.
pub fn decode_check(text: &str) -> Result<Vec<u8>> {
    let mut data = decode(text)?;
    if data.len() < CHECKSUM_LEN {
        return Err(Error::invalid_input(format!(
            "decoded data is {} bytes, shorter than the {}-byte checksum",
            data.len(),
            CHECKSUM_LEN
        )));
    }

    let split = data.len() - CHECKSUM_LEN;
    let mut found = [0u8; CHECKSUM_LEN];
    found.copy_from_slice(&data[split..]);
    data.truncate(split);

    let expected = checksum(&data);
    if expected != found {
        return Err(Error::ChecksumMismatch { expected, found });
    }
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Vectors from Bitcoin Core's base58_encode_decode.json.
    const VECTORS: &[(&str, &str)] = &[
        ("", ""),
        ("61", "2g"),
        ("626262", "a3gV"),
        ("636363", "aPEr"),
        (
            "73696d706c792061206c6f6e6720737472696e67",
            "2cFupjhnEsSn59qHXstmK2ffpLv2",
        ),
        (
            "00eb15231dfceb60925886b67d065299925915aeb172c06647",
            "1NS17iag9jJgTHD1VXjvLCEnZuQ3rJDE9L",
        ),
        ("516b6fcd0f", "ABnLTmg"),
        ("bf4f89001e670274dd", "3SEo3LWLoPntC"),
        ("572e4794", "3EFU7m"),
        ("ecac89cad93923c02321", "EJDM8drfXA6uyA"),
        ("10c8511e", "Rt5zm"),
        ("00000000000000000000", "1111111111"),
    ];

    #[test]
    fn test_encode_vectors() {
        for (hex_input, expected) in VECTORS {
            let bytes = hex::decode(hex_input).unwrap();
            assert_eq!(encode(&bytes), *expected, "input {}", hex_input);
        }
    }

    #[test]
    fn test_decode_vectors() {
        for (expected_hex, text) in VECTORS {
            assert_eq!(hex::encode(decode(text).unwrap()), *expected_hex, "input {}", text);
        }
    }

    #[test]
    fn test_leading_zeros_preserved() {
        let encoded = encode(&[0x00, 0x00, 0x01]);
        assert_eq!(encoded, "112");
        assert_eq!(decode(&encoded).unwrap(), vec![0x00, 0x00, 0x01]);
        assert_eq!(encode(b"Hello World"), "JxF12TrwUP45BMd");
    }

    #[test]
    fn test_decode_rejects_ambiguous_glyphs() {
        let cases = [
            ("0abc", '0', 0),
            ("abOc", 'O', 2),
            ("aIb", 'I', 1),
            ("abcl", 'l', 3),
        ];
        for (text, bad, position) in cases {
            assert_eq!(
                decode(text),
                Err(Error::InvalidCharacter {
                    character: bad,
                    position
                })
            );
        }
    }

    #[test]
    fn test_invalid_character_position_counts_characters() {
        // 'é' is two bytes long; the reported position is its character index.
        assert_eq!(
            decode("2gé"),
            Err(Error::InvalidCharacter {
                character: 'é',
                position: 2
            })
        );
        assert_eq!(
            decode("é2g"),
            Err(Error::InvalidCharacter {
                character: 'é',
                position: 0
            })
        );
    }

    #[test]
    fn test_decode_rejects_non_ascii() {
        assert!(matches!(
            decode("2g€"),
            Err(Error::InvalidCharacter { character: '€', .. })
        ));
        assert!(matches!(
            decode("2g "),
            Err(Error::InvalidCharacter { character: ' ', .. })
        ));
    }

    #[test]
    fn test_check_roundtrip() {
        let payload = hex::decode("00010966776006953d5567439e5e39f86a0d273bee").unwrap();
        let encoded = encode_check(&payload);
        assert_eq!(encoded, "16UwLL9Risc3QfPqBUvKofHmBQ7wMtjvM");
        assert_eq!(decode_check(&encoded).unwrap(), payload);
    }

    #[test]
    fn test_check_empty_payload() {
        let encoded = encode_check(&[]);
        assert_eq!(decode_check(&encoded).unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_decode_check_detects_corruption() {
        // Last character of a valid address changed.
        let result = decode_check("16UwLL9Risc3QfPqBUvKofHmBQ7wMtjvN");
        assert!(matches!(result, Err(Error::ChecksumMismatch { .. })));
    }

    #[test]
    fn test_decode_check_too_short() {
        assert!(matches!(decode_check(""), Err(Error::InvalidInput(_))));
        assert!(matches!(decode_check("2g"), Err(Error::InvalidInput(_))));
    }
}
