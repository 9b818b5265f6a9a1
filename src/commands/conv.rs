use serde::Serialize;
use tracing::debug;

use crate::io::read_input;
use radixconv::codec::convert;
use radixconv::error::Result;
use radixconv::types::{Context, InputSource, Radix};

#[derive(Debug, Serialize)]
pub struct ConvertResult {
    pub schema_version: u32,
    pub from: Radix,
    pub to: Radix,
    pub input: String,
    pub output: String,
}

pub fn run_conv(ctx: &Context, from: &str, to: &str, input: &InputSource) -> Result<ConvertResult> {
    let from = ctx.registry.get(from)?;
    let to = ctx.registry.get(to)?;

    let digits = read_input(input)?;
    debug!(%from, %to, digits = digits.chars().count(), "converting");
    let output = convert(&digits, from.get(), to.get())?;

    Ok(ConvertResult {
        schema_version: 1,
        from,
        to,
        input: digits,
        output,
    })
}

/// The sentence printed for a successful conversion.
pub fn describe(result: &ConvertResult) -> String {
    format!(
        "{} in base {} is {} in base {}",
        result.input, result.from, result.output, result.to
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_conv_literal() {
        let ctx = Context::default();
        let result = run_conv(&ctx, "hex", "2", &InputSource::parse("ff")).unwrap();
        assert_eq!(result.output, "11111111");
        assert_eq!(result.from, Radix::HEX);
        assert_eq!(describe(&result), "ff in base 16 is 11111111 in base 2");
    }

    #[test]
    fn test_run_conv_unknown_base() {
        let ctx = Context::default();
        assert!(run_conv(&ctx, "base64", "2", &InputSource::parse("ff")).is_err());
    }
}
