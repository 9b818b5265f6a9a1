use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

use crate::codec::Registry;
use crate::error::{RadixError, Result};

/// Arbitrary-precision value passed between decode and encode.
pub type Magnitude = num_bigint::BigUint;

/// A validated positional base in `2..=36`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Radix(u32);

impl Radix {
    pub const MIN: u32 = 2;
    pub const MAX: u32 = 36;

    pub const BINARY: Radix = Radix(2);
    pub const OCTAL: Radix = Radix(8);
    pub const DECIMAL: Radix = Radix(10);
    pub const HEX: Radix = Radix(16);
    pub const BASE36: Radix = Radix(36);

    pub fn new(base: u32) -> Result<Self> {
        if (Self::MIN..=Self::MAX).contains(&base) {
            Ok(Radix(base))
        } else {
            Err(RadixError::InvalidBase { base })
        }
    }

    pub fn get(self) -> u32 {
        self.0
    }

    pub fn all() -> impl Iterator<Item = Radix> {
        (Self::MIN..=Self::MAX).map(Radix)
    }

    /// Number of digits of this radix that always fit in one `u64`, along
    /// with `base^digits`.
    pub fn chunk(self) -> (u32, u64) {
        let base = u64::from(self.0);
        let mut digits = 1;
        let mut power = base;
        while let Some(next) = power.checked_mul(base) {
            power = next;
            digits += 1;
        }
        (digits, power)
    }

    /// The digit characters valid in this radix, lowercase.
    pub fn alphabet(self) -> &'static str {
        &crate::codec::ALPHABET[..self.0 as usize]
    }
}

impl TryFrom<u32> for Radix {
    type Error = RadixError;

    fn try_from(base: u32) -> Result<Self> {
        Radix::new(base)
    }
}

impl From<Radix> for u32 {
    fn from(radix: Radix) -> Self {
        radix.0
    }
}

impl fmt::Display for Radix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

pub struct Context {
    pub registry: &'static Registry,
}

impl Context {
    pub fn new(registry: &'static Registry) -> Self {
        Self { registry }
    }
}

impl Default for Context {
    fn default() -> Self {
        Self {
            registry: Registry::global(),
        }
    }
}

#[derive(Debug, Clone)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
    Literal(String),
}

impl InputSource {
    pub fn parse(s: &str) -> Self {
        match s {
            "-" => InputSource::Stdin,
            s if s.starts_with('@') => InputSource::File(PathBuf::from(&s[1..])),
            s => InputSource::Literal(s.to_string()),
        }
    }
}

#[derive(Debug, Clone)]
pub enum OutputDest {
    Stdout,
    File(PathBuf),
}

impl OutputDest {
    pub fn parse(s: &str) -> Self {
        match s {
            "-" => OutputDest::Stdout,
            s if s.starts_with('@') => OutputDest::File(PathBuf::from(&s[1..])),
            s => OutputDest::File(PathBuf::from(s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CaseSensitivity {
    Sensitive,
    Insensitive,
}

#[derive(Debug, Clone, Serialize)]
pub struct RadixMeta {
    pub base: Radix,
    pub name: String,
    pub aliases: Vec<&'static str>,
    pub alphabet: &'static str,
    pub case_sensitivity: CaseSensitivity,
    pub chunk_digits: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_radix_bounds() {
        assert!(Radix::new(2).is_ok());
        assert!(Radix::new(36).is_ok());
        assert!(matches!(Radix::new(1), Err(RadixError::InvalidBase { base: 1 })));
        assert!(matches!(Radix::new(37), Err(RadixError::InvalidBase { base: 37 })));
        assert!(matches!(Radix::new(0), Err(RadixError::InvalidBase { base: 0 })));
    }

    #[test]
    fn test_radix_all_covers_range() {
        let all: Vec<u32> = Radix::all().map(Radix::get).collect();
        assert_eq!(all.len(), 35);
        assert_eq!(all.first(), Some(&2));
        assert_eq!(all.last(), Some(&36));
    }

    #[test]
    fn test_radix_chunk() {
        assert_eq!(Radix::BINARY.chunk(), (63, 1 << 63));
        assert_eq!(Radix::HEX.chunk(), (15, 1 << 60));
        assert_eq!(Radix::DECIMAL.chunk(), (19, 10_000_000_000_000_000_000));
        for radix in Radix::all() {
            let (digits, power) = radix.chunk();
            assert_eq!(u64::from(radix.get()).pow(digits), power);
            assert!(power.checked_mul(u64::from(radix.get())).is_none());
        }
    }

    #[test]
    fn test_radix_alphabet() {
        assert_eq!(Radix::BINARY.alphabet(), "01");
        assert_eq!(Radix::HEX.alphabet(), "0123456789abcdef");
        assert_eq!(Radix::BASE36.alphabet().len(), 36);
    }

    #[test]
    fn test_input_source_parse() {
        assert!(matches!(InputSource::parse("-"), InputSource::Stdin));
        assert!(matches!(InputSource::parse("@digits.txt"), InputSource::File(_)));
        assert!(matches!(InputSource::parse("ff"), InputSource::Literal(s) if s == "ff"));
    }
}
