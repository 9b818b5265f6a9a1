use radixconv::types::{Context, RadixMeta};

pub fn run_list(ctx: &Context) -> Vec<RadixMeta> {
    ctx.registry.list()
}
