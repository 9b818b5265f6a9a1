use num_bigint::BigInt;
use serde::Serialize;
use tracing::debug;

use crate::io::read_input;
use radixconv::codec::encode_int;
use radixconv::error::{RadixError, Result};
use radixconv::types::{Context, InputSource, Radix};

#[derive(Debug, Serialize)]
pub struct EncodeResult {
    pub schema_version: u32,
    pub base: Radix,
    pub input: String,
    pub output: String,
}

pub fn run_encode(ctx: &Context, base: &str, input: &InputSource) -> Result<EncodeResult> {
    let radix = ctx.registry.get(base)?;
    let text = read_input(input)?;

    let value: BigInt = text
        .parse()
        .map_err(|_| RadixError::invalid_input(format!("not a decimal integer: {}", text)))?;
    debug!(base = %radix, bits = value.bits(), "encoding");

    let output = encode_int(&value, radix.get())?;

    Ok(EncodeResult {
        schema_version: 1,
        base: radix,
        input: text,
        output,
    })
}
