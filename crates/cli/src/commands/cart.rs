//! Cart commands.
//!
//! Each mutating command saves the cart back to storage before returning.

use std::io::Write;

use sneakerhub_core::ProductId;
use tracing::info;

use super::{CommandError, Shop};

/// Print the cart contents and totals.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn show(shop: &Shop, out: &mut impl Write) -> Result<(), CommandError> {
    let cart = shop.context().cart();
    if cart.is_empty() {
        writeln!(out, "Your cart is empty.")?;
        return Ok(());
    }

    for line in cart.items() {
        writeln!(
            out,
            "{:>4}  {:<40} {:>4} x {:>10} = {:>10}",
            line.product_id,
            line.name,
            line.quantity,
            line.price,
            line.line_total()
        )?;
    }
    writeln!(out, "Items: {}", cart.cart_item_count())?;
    writeln!(out, "Total: {}", cart.total_cart_price())?;
    Ok(())
}

/// Add a catalog product to the cart.
///
/// # Errors
///
/// Returns an error if the product is unknown or the cart cannot be saved.
pub fn add(
    shop: &mut Shop,
    id: ProductId,
    quantity: i64,
    out: &mut impl Write,
) -> Result<(), CommandError> {
    shop.context_mut().add_product(id, quantity)?;
    shop.save_cart()?;
    writeln!(
        out,
        "Added {quantity} x #{id}. Cart now holds {} item(s).",
        shop.context().cart().cart_item_count()
    )?;
    Ok(())
}

/// Remove a product from the cart.
///
/// # Errors
///
/// Returns an error if the cart cannot be saved.
pub fn remove(shop: &mut Shop, id: ProductId, out: &mut impl Write) -> Result<(), CommandError> {
    shop.context_mut().cart_mut().remove_from_cart(id);
    shop.save_cart()?;
    writeln!(out, "Removed #{id} from cart.")?;
    Ok(())
}

/// Set the quantity of a product already in the cart.
///
/// Zero and negative quantities are stored as given; use `remove` to drop
/// a line.
///
/// # Errors
///
/// Returns an error if the cart cannot be saved.
pub fn update(
    shop: &mut Shop,
    id: ProductId,
    quantity: i64,
    out: &mut impl Write,
) -> Result<(), CommandError> {
    let cart = shop.context_mut().cart_mut();
    if cart.line(id).is_none() {
        writeln!(out, "#{id} is not in your cart.")?;
        return Ok(());
    }
    cart.update_quantity(id, quantity);
    shop.save_cart()?;
    writeln!(out, "Set #{id} quantity to {quantity}.")?;
    Ok(())
}

/// Empty the cart.
///
/// # Errors
///
/// Returns an error if the cart cannot be saved.
pub fn clear(shop: &mut Shop, out: &mut impl Write) -> Result<(), CommandError> {
    shop.context_mut().cart_mut().clear_cart_state();
    shop.save_cart()?;
    writeln!(out, "Cart cleared.")?;
    Ok(())
}

/// Complete checkout: report totals and empty the cart.
///
/// # Errors
///
/// Returns an error if the cart cannot be saved.
pub fn checkout(shop: &mut Shop, out: &mut impl Write) -> Result<(), CommandError> {
    if shop.context().cart().is_empty() {
        writeln!(out, "Your cart is empty; nothing to check out.")?;
        return Ok(());
    }

    let summary = shop.context_mut().complete_checkout();
    shop.save_cart()?;
    info!(
        user_id = shop.context().session().current_user_id().unwrap_or("guest"),
        "Order placed"
    );
    writeln!(
        out,
        "Order placed: {} item(s), total {}.",
        summary.item_count, summary.total
    )?;
    Ok(())
}
