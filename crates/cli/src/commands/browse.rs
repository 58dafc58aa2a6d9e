//! `crocco browse` - filtered catalog listing.

use std::sync::Arc;

use crocco_storefront::{CatalogView, CategoryScope, Product};

use super::{CommandError, Context};

fn badges(product: &Product) -> &'static str {
    match (product.is_new, product.is_sale) {
        (true, true) => " [New] [Sale]",
        (true, false) => " [New]",
        (false, true) => " [Sale]",
        (false, false) => "",
    }
}

/// Apply the category and filters, then print the visible products.
pub fn run(
    ctx: &Context,
    category: &str,
    colors: &[String],
    sizes: &[String],
    min: u32,
    max: u32,
) -> Result<(), CommandError> {
    let mut view = CatalogView::new(Arc::clone(&ctx.catalog));
    view.select_category(CategoryScope::from(category));

    for color in colors {
        view.toggle_color(color);
    }
    for size in sizes {
        view.toggle_size(size);
    }
    view.set_price_range(min, max)?;
    view.apply_filters();

    #[allow(clippy::print_stdout)]
    {
        println!("{} - {}", view.title(), view.results_label());
        for product in view.visible() {
            println!(
                "  #{:<3} {:<24} {:>8}{}",
                product.id,
                product.name,
                product.price.to_string(),
                badges(product)
            );
        }
    }
    Ok(())
}
