//! Storefront route table.

use sneakerhub_core::{Route, RouteTable};

/// Routes of the storefront, in matching order.
pub fn storefront() -> RouteTable {
    RouteTable::new(vec![
        Route::new("/", "Home"),
        Route::new("/products", "ProductCatalog"),
        Route::new("/products/:id", "ProductDetails"),
        Route::new("/login", "Login"),
        Route::new("/register", "Register"),
        Route::new("/logout", "Logout"),
        Route::new("/admin", "AdminPage"),
        Route::new("/cart", "CartPage"),
        Route::new("/checkout", "CheckoutPage"),
        Route::new("/profile", "Profile").requires_auth(),
        Route::new("/orders", "OrderTracker").requires_auth(),
    ])
}
