use crate::error::{Result, Stage};
use crate::types::Radix;

use super::{decode_radix, encode_radix};

/// Rewrites `digits` from base `from` into base `to`.
///
/// Both bases are checked before any digit is read. Errors are wrapped in
/// [`RadixError::Conversion`](crate::RadixError::Conversion) naming the stage
/// that failed.
pub fn convert(digits: &str, from: u32, to: u32) -> Result<String> {
    let from = Radix::new(from).map_err(|e| e.at_stage(Stage::Decode))?;
    let to = Radix::new(to).map_err(|e| e.at_stage(Stage::Encode))?;

    let magnitude = decode_radix(digits, from).map_err(|e| e.at_stage(Stage::Decode))?;
    Ok(encode_radix(&magnitude, to))
}
