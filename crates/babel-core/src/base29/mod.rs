//! Base-29 page codec
//!
//! A page is a numeral: each symbol is a digit in [0, 28], most significant
//! first. Reading the 3200 symbols of a page this way yields an integer in
//! [0, 29^3200), the pivot representation that unifies pages and addresses.
//!
//! Decoding is the left inverse of encoding up to leading zero symbols
//! (spaces): an encoded page that starts with spaces decodes back without
//! them, exactly as the numeral 007 prints as 7.

use num_bigint::BigUint;
use num_traits::{ToPrimitive, Zero};

use crate::alphabet::Alphabet;
use crate::error::{Error, Result};

/// Interpret `page` as a base-29 numeral, most significant symbol first
///
/// # Errors
///
/// Returns [`Error::InvalidCharacter`] naming the offending character and
/// the supported charset when any symbol is absent from the alphabet.
pub fn encode(alphabet: &Alphabet, page: &str) -> Result<BigUint> {
    let base = BigUint::from(alphabet.len());
    let mut number = BigUint::zero();

    for character in page.chars() {
        let index = alphabet.index_of(character).ok_or(Error::InvalidCharacter {
            character,
            charset: alphabet.charset(),
        })?;
        number *= &base;
        number += index as u32;
    }

    Ok(number)
}

/// Recover the page whose base-29 numeral is `number`
///
/// Returns the minimal representation: no leading zero symbols, and the
/// empty string for zero itself.
pub fn decode(alphabet: &Alphabet, number: &BigUint) -> String {
    let base = BigUint::from(alphabet.len());
    let mut symbols = Vec::new();
    let mut remaining = number.clone();

    while !remaining.is_zero() {
        let digit = (&remaining % &base).to_u8().expect("digit fits in u8");
        symbols.push(alphabet.symbol(digit));
        remaining /= &base;
    }

    symbols.reverse();
    symbols.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_single_symbols() {
        let alphabet = Alphabet::new();
        assert_eq!(encode(&alphabet, " ").unwrap(), BigUint::from(0u32));
        assert_eq!(encode(&alphabet, "a").unwrap(), BigUint::from(1u32));
        assert_eq!(encode(&alphabet, ".").unwrap(), BigUint::from(28u32));
    }

    #[test]
    fn test_encode_positional() {
        let alphabet = Alphabet::new();
        // "ba" = 2·29 + 1
        assert_eq!(encode(&alphabet, "ba").unwrap(), BigUint::from(59u32));
        // leading space is a leading zero
        assert_eq!(encode(&alphabet, " ba").unwrap(), BigUint::from(59u32));
    }

    #[test]
    fn test_decode_zero_is_empty() {
        let alphabet = Alphabet::new();
        assert_eq!(decode(&alphabet, &BigUint::zero()), "");
    }

    #[test]
    fn test_roundtrip_without_leading_spaces() {
        let alphabet = Alphabet::new();
        for page in ["a", "hello, world.", "z y x", "the quick brown fox"] {
            let number = encode(&alphabet, page).unwrap();
            assert_eq!(decode(&alphabet, &number), page, "roundtrip failed for {page:?}");
        }
    }

    #[test]
    fn test_encode_rejects_invalid_characters() {
        let alphabet = Alphabet::new();
        for character in "!@#$%^&*()_+-=[]{}|;':\"<>?/~`".chars() {
            let result = encode(&alphabet, &format!("hello{character}"));
            assert!(
                matches!(result, Err(Error::InvalidCharacter { character: c, .. }) if c == character),
                "encoded with invalid character: {character}"
            );
        }
    }

    #[test]
    fn test_encode_rejects_uppercase() {
        let alphabet = Alphabet::new();
        assert!(encode(&alphabet, "Hello").is_err());
    }
}
