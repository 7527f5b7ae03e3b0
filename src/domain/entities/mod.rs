//! Domain Entities
//!
//! - `Product` / `Category` / `Catalog` - the read-only storefront data
//! - `CartState` - the cart ledger
//! - `FilterState` - filter panel selections
//! - `Wishlist`, `User` - shopper state

mod cart;
mod catalog;
mod filter_state;
mod product;
mod user;
mod wishlist;

pub use cart::{CartLineItem, CartState};
pub use catalog::{Catalog, CatalogError, Category};
pub use filter_state::FilterState;
pub use product::Product;
pub use user::User;
pub use wishlist::{Wishlist, WishlistChange};
