use crate::error::{RadixError, Result};
use crate::types::Radix;

/// Digit symbols for every supported radix; the index is the digit value.
pub const ALPHABET: &str = "0123456789abcdefghijklmnopqrstuvwxyz";

const INVALID: u8 = 0xff;

const DIGIT_VALUES: [u8; 128] = build_digit_values();

const fn build_digit_values() -> [u8; 128] {
    let alphabet = ALPHABET.as_bytes();
    let mut table = [INVALID; 128];
    let mut value = 0;
    while value < alphabet.len() {
        let ch = alphabet[value];
        table[ch as usize] = value as u8;
        table[ch.to_ascii_uppercase() as usize] = value as u8;
        value += 1;
    }
    table
}

/// Returns the lowercase symbol for a digit value.
///
/// # Panics
///
/// Panics if `value >= 36`. Callers only pass values already reduced modulo
/// a validated radix.
pub fn char_for_value(value: u32) -> char {
    assert!(value < 36, "digit value out of range (0-35): {}", value);
    ALPHABET.as_bytes()[value as usize] as char
}

fn lookup(ch: char) -> Option<u32> {
    let idx = ch as usize;
    if idx >= DIGIT_VALUES.len() {
        return None;
    }
    match DIGIT_VALUES[idx] {
        INVALID => None,
        value => Some(u32::from(value)),
    }
}

/// Returns the value of a digit character, ignoring case.
pub fn value_of_char(ch: char) -> Result<u32> {
    lookup(ch).ok_or(RadixError::InvalidDigit {
        char: ch,
        position: None,
    })
}

impl Radix {
    /// Value of the digit `ch` found at `position`, checked against this radix.
    pub fn value_of(self, ch: char, position: usize) -> Result<u32> {
        let value = lookup(ch).ok_or_else(|| RadixError::invalid_digit(ch, position))?;
        if value >= self.get() {
            return Err(RadixError::DigitOutOfBase {
                char: ch,
                position,
                value,
                base: self.get(),
            });
        }
        Ok(value)
    }
}
