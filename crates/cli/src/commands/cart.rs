//! `crocco cart` - build a cart from line specs and print the totals.

use crocco_storefront::{Cart, ProductSelection};

use super::{CommandError, Context, LineSpec};

/// Add every line to a fresh cart, then print the order summary.
pub fn run(ctx: &Context, lines: &[LineSpec], coupon: Option<&str>) -> Result<(), CommandError> {
    let mut cart = Cart::new(ctx.config.shipping_fee);

    for spec in lines {
        let product = ctx
            .catalog
            .get(spec.product)
            .ok_or(CommandError::UnknownProduct(spec.product))?;

        let mut selection = ProductSelection::new(product);
        if let Some(size) = spec.size.as_deref()
            && !selection.select_size(size)
        {
            return Err(CommandError::UnknownVariant {
                product: spec.product,
                value: format!("size {size}"),
            });
        }
        if let Some(color) = spec.color.as_deref()
            && !selection.select_color(color)
        {
            return Err(CommandError::UnknownVariant {
                product: spec.product,
                value: format!("color {color}"),
            });
        }

        if cart.add(product, selection.variant(), spec.quantity).is_none() {
            tracing::warn!(
                product = %spec.product,
                quantity = spec.quantity,
                "Quantity out of range, line skipped"
            );
        }
    }

    let summary = cart.summary();

    #[allow(clippy::print_stdout)]
    {
        println!("{}", cart.summary_label());
        for line in &summary.lines {
            println!(
                "  {:<24} {:>4} {:>5}  x{:<2} {:>8}",
                line.name,
                line.variant.size.as_deref().unwrap_or("-"),
                line.variant.color.as_deref().unwrap_or("-"),
                line.quantity,
                line.line_total().to_string()
            );
        }
        println!("  Subtotal {:>30}", summary.subtotal.to_string());
        println!("  Shipping {:>30}", summary.shipping.to_string());
        println!("  Total    {:>30}", summary.total.to_string());

        if let Some(code) = coupon
            && let Err(e) = cart.apply_coupon(code)
        {
            println!("{e}");
        }
    }
    Ok(())
}
