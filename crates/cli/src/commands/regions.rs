//! `crocco regions` - region and sub-region listing.

use std::sync::Arc;

use crocco_core::RegionId;
use crocco_storefront::AddressCascade;

use super::Context;

/// Print all regions, or the sub-region options of `region`.
#[allow(clippy::print_stdout)]
pub fn run(ctx: &Context, region: Option<RegionId>) {
    match region {
        None => {
            for region in ctx.regions.regions() {
                println!("{:>3}  {}", region.id, region.name);
            }
        }
        Some(id) => {
            let mut cascade = AddressCascade::new(Arc::clone(&ctx.regions));
            cascade.on_region_change(id);
            let name = ctx.regions.region(id).map_or("unknown region", |r| r.name.as_str());
            println!("{id} {name}: {} sub-region(s)", cascade.options().len());
            for subregion in cascade.options() {
                println!("  {:>5}  {}", subregion.id, subregion.name);
            }
        }
    }
}
