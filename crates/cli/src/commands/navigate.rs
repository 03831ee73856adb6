//! Navigation through the storefront route table.

use std::io::Write;

use sneakerhub_core::Navigation;

use super::{CommandError, Shop};
use crate::routes;

/// Resolve `path` and run the authentication guard over it.
///
/// Returns the guard's decision after printing it.
///
/// # Errors
///
/// Returns [`CommandError::NoRoute`] if no route matches `path`.
pub fn run(shop: &Shop, path: &str, out: &mut impl Write) -> Result<Navigation, CommandError> {
    let table = routes::storefront();
    let matched = table
        .resolve(path)
        .ok_or_else(|| CommandError::NoRoute(path.to_string()))?;

    let decision = shop.context().navigate(matched.route);
    match &decision {
        Navigation::Proceed => {
            write!(out, "Entering {}", matched.route.name)?;
            for (name, value) in &matched.params {
                write!(out, " [{name}={value}]")?;
            }
            writeln!(out)?;
        }
        Navigation::Redirect(target) => {
            writeln!(
                out,
                "{} requires login; redirecting to {target}",
                matched.route.name
            )?;
        }
    }
    Ok(decision)
}
