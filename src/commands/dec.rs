use serde::Serialize;
use tracing::debug;

use crate::io::read_input;
use radixconv::codec::decode_radix;
use radixconv::error::Result;
use radixconv::types::{Context, InputSource, Radix};

#[derive(Debug, Serialize)]
pub struct DecodeResult {
    pub schema_version: u32,
    pub base: Radix,
    pub input: String,
    pub value: String,
}

pub fn run_decode(ctx: &Context, base: &str, input: &InputSource) -> Result<DecodeResult> {
    let radix = ctx.registry.get(base)?;
    let digits = read_input(input)?;
    debug!(base = %radix, digits = digits.chars().count(), "decoding");

    let magnitude = decode_radix(&digits, radix)?;

    Ok(DecodeResult {
        schema_version: 1,
        base: radix,
        input: digits,
        value: magnitude.to_string(),
    })
}
