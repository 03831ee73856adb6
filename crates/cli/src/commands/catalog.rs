//! Catalog browsing commands.

use std::io::Write;

use sneakerhub_core::{ContextError, ProductId};

use super::{CommandError, Shop};

/// List every product.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn list(shop: &Shop, out: &mut impl Write) -> Result<(), CommandError> {
    for product in shop.context().catalog() {
        writeln!(out, "{:>4}  {:<40} {:>10}", product.id, product.name, product.price)?;
    }
    Ok(())
}

/// Show one product in full.
///
/// # Errors
///
/// Returns an error if the product does not exist or writing fails.
pub fn show(shop: &Shop, id: ProductId, out: &mut impl Write) -> Result<(), CommandError> {
    let product = shop
        .context()
        .catalog()
        .get(id)
        .ok_or(ContextError::UnknownProduct(id))?;

    writeln!(out, "{} (#{})", product.name, product.id)?;
    writeln!(out, "Price: {}", product.price)?;
    writeln!(out, "Image: {}", product.image)?;
    writeln!(out)?;
    writeln!(out, "{}", product.description)?;
    Ok(())
}
