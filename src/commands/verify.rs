use serde::Serialize;

use crate::io::read_input;
use radixconv::codec::decode_radix;
use radixconv::error::Result;
use radixconv::types::{Context, InputSource, Radix};

#[derive(Debug, Serialize)]
pub struct VerifyResult {
    pub schema_version: u32,
    pub valid: bool,
    pub base: Radix,
    pub error: Option<String>,
}

pub fn run_verify(ctx: &Context, base: &str, input: &InputSource) -> Result<VerifyResult> {
    let radix = ctx.registry.get(base)?;
    let digits = read_input(input)?;

    match decode_radix(&digits, radix) {
        Ok(_) => Ok(VerifyResult {
            schema_version: 1,
            valid: true,
            base: radix,
            error: None,
        }),
        Err(e) => Ok(VerifyResult {
            schema_version: 1,
            valid: false,
            base: radix,
            error: Some(e.to_string()),
        }),
    }
}
