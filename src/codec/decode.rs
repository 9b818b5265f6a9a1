use num_traits::Zero;
use tracing::trace;

use crate::error::Result;
use crate::types::{Magnitude, Radix};

/// Decodes `digits` written in `base` into a magnitude.
///
/// Digits are read most significant first and case is ignored. An empty
/// string decodes to zero.
pub fn decode(digits: &str, base: u32) -> Result<Magnitude> {
    decode_radix(digits, Radix::new(base)?)
}

/// Horner's method, batched so that each big-integer multiply-add consumes
/// as many digits as fit in a `u64`.
pub fn decode_radix(digits: &str, radix: Radix) -> Result<Magnitude> {
    let base = u64::from(radix.get());
    let (chunk_digits, chunk_power) = radix.chunk();

    let mut magnitude = Magnitude::zero();
    let mut chunk: u64 = 0;
    let mut pending: u32 = 0;

    for (pos, ch) in digits.chars().enumerate() {
        let value = radix.value_of(ch, pos)?;
        chunk = chunk * base + u64::from(value);
        pending += 1;
        if pending == chunk_digits {
            magnitude = magnitude * chunk_power + chunk;
            chunk = 0;
            pending = 0;
        }
    }

    if pending > 0 {
        magnitude = magnitude * base.pow(pending) + chunk;
    }

    trace!(base = radix.get(), bits = magnitude.bits(), "decoded");
    Ok(magnitude)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RadixError;
    use num_bigint::BigUint;
    use num_traits::{Num, One};
    use proptest::prelude::*;

    fn naive_decode(digits: &str, base: u32) -> BigUint {
        // Power-sum from the least significant digit up.
        let mut number = BigUint::zero();
        let mut power = BigUint::one();
        for ch in digits.chars().rev() {
            let value = crate::codec::value_of_char(ch).unwrap();
            number += &power * value;
            power *= base;
        }
        number
    }

    #[test]
    fn test_decode_scenarios() {
        assert_eq!(decode("ff", 16).unwrap(), BigUint::from(255u32));
        assert_eq!(decode("1010", 2).unwrap(), BigUint::from(10u32));
        assert_eq!(decode("z", 36).unwrap(), BigUint::from(35u32));
        assert_eq!(decode("0", 10).unwrap(), BigUint::zero());
    }

    #[test]
    fn test_decode_case_insensitive() {
        let expected = BigUint::from(255u32);
        assert_eq!(decode("ff", 16).unwrap(), expected);
        assert_eq!(decode("FF", 16).unwrap(), expected);
        assert_eq!(decode("Ff", 16).unwrap(), expected);
    }

    #[test]
    fn test_decode_empty_is_zero() {
        assert_eq!(decode("", 10).unwrap(), BigUint::zero());
        assert_eq!(decode("", 36).unwrap(), BigUint::zero());
    }

    #[test]
    fn test_decode_leading_zeros() {
        assert_eq!(decode("007", 10).unwrap(), BigUint::from(7u32));
        assert_eq!(decode("0000", 2).unwrap(), BigUint::zero());
    }

    #[test]
    fn test_decode_digit_out_of_base() {
        match decode("g", 16) {
            Err(RadixError::DigitOutOfBase { char: 'g', position: 0, value: 16, base: 16 }) => {}
            other => panic!("expected DigitOutOfBase, got {:?}", other),
        }
        match decode("1239", 8) {
            Err(RadixError::DigitOutOfBase { char: '9', position: 3, .. }) => {}
            other => panic!("expected DigitOutOfBase, got {:?}", other),
        }
        assert!(matches!(decode("f", 10), Err(RadixError::DigitOutOfBase { .. })));
    }

    #[test]
    fn test_decode_rejects_sign() {
        match decode("-5", 10) {
            Err(RadixError::InvalidDigit { char: '-', position: Some(0) }) => {}
            other => panic!("expected InvalidDigit, got {:?}", other),
        }
    }

    #[test]
    fn test_decode_invalid_base_before_digits() {
        assert!(matches!(decode("!!", 1), Err(RadixError::InvalidBase { base: 1 })));
        assert!(matches!(decode("!!", 37), Err(RadixError::InvalidBase { base: 37 })));
    }

    #[test]
    fn test_decode_exceeds_u64() {
        let digits = "z".repeat(100);
        let expected = BigUint::from(36u32).pow(100) - 1u32;
        assert_eq!(decode(&digits, 36).unwrap(), expected);
    }

    #[test]
    fn test_decode_chunk_boundaries() {
        // Lengths straddling a full chunk for every radix.
        for radix in Radix::all() {
            let (chunk_digits, _) = radix.chunk();
            let top = crate::codec::char_for_value(radix.get() - 1);
            for len in [chunk_digits - 1, chunk_digits, chunk_digits + 1, 2 * chunk_digits + 3] {
                let digits: String = std::iter::repeat(top).take(len as usize).collect();
                let expected = BigUint::from(radix.get()).pow(len) - 1u32;
                assert_eq!(decode_radix(&digits, radix).unwrap(), expected, "base {} len {}", radix, len);
            }
        }
    }

    #[test]
    fn test_decode_growing_lengths() {
        for len in [10, 100, 1000, 10000] {
            let digits = "1".repeat(len);
            let decoded = decode(&digits, 2).unwrap();
            assert_eq!(decoded.bits(), len as u64);
            assert_eq!(decoded.count_ones(), len as u64);
        }
    }

    proptest! {
        #[test]
        fn decode_matches_power_sum(digits in "[0-9a-zA-Z]{0,80}", base in 2u32..=36) {
            let digits: String = digits
                .chars()
                .filter(|c| crate::codec::value_of_char(*c).unwrap() < base)
                .collect();
            prop_assert_eq!(decode(&digits, base).unwrap(), naive_decode(&digits, base));
        }

        #[test]
        fn decode_matches_from_str_radix(digits in "[0-9a-z]{1,80}", base in 2u32..=36) {
            let digits: String = digits
                .chars()
                .filter(|c| crate::codec::value_of_char(*c).unwrap() < base)
                .collect();
            prop_assume!(!digits.is_empty());
            prop_assert_eq!(
                decode(&digits, base).unwrap(),
                BigUint::from_str_radix(&digits, base).unwrap()
            );
        }
    }
}
