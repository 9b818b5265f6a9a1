use radixconv::error::Result;
use radixconv::types::{Context, RadixMeta};

pub fn run_info(ctx: &Context, base: &str) -> Result<RadixMeta> {
    let radix = ctx.registry.get(base)?;
    Ok(ctx.registry.meta(radix))
}
