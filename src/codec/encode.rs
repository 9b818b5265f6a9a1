use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::Zero;
use tracing::trace;

use super::digit::char_for_value;
use crate::error::{RadixError, Result};
use crate::types::{Magnitude, Radix};

/// Encodes a magnitude as lowercase digits in `base`.
///
/// Zero encodes to `"0"`; no other output has a leading zero.
pub fn encode(magnitude: &Magnitude, base: u32) -> Result<String> {
    Ok(encode_radix(magnitude, Radix::new(base)?))
}

/// Like [`encode`], but accepts a signed value and rejects negatives.
pub fn encode_int(value: &BigInt, base: u32) -> Result<String> {
    let radix = Radix::new(base)?;
    let magnitude = value.to_biguint().ok_or(RadixError::NegativeMagnitude)?;
    Ok(encode_radix(&magnitude, radix))
}

pub fn encode_radix(magnitude: &Magnitude, radix: Radix) -> String {
    if magnitude.is_zero() {
        return "0".to_string();
    }

    let base = u64::from(radix.get());
    let (chunk_digits, chunk_power) = radix.chunk();
    let divisor = Magnitude::from(chunk_power);

    let estimate = (magnitude.bits() as f64 / (base as f64).log2()) as usize + 1;
    // Least significant digit first; reversed once at the end.
    let mut out: Vec<char> = Vec::with_capacity(estimate);
    let mut quotient = magnitude.clone();

    while !quotient.is_zero() {
        let (next, rem) = quotient.div_rem(&divisor);
        quotient = next;
        // rem < chunk_power, so it is a single u64 limb (or none when zero).
        let mut rem = rem.iter_u64_digits().next().unwrap_or(0);

        if quotient.is_zero() {
            while rem > 0 {
                out.push(char_for_value((rem % base) as u32));
                rem /= base;
            }
        } else {
            for _ in 0..chunk_digits {
                out.push(char_for_value((rem % base) as u32));
                rem /= base;
            }
        }
    }

    trace!(base = radix.get(), digits = out.len(), "encoded");
    out.iter().rev().collect()
}
