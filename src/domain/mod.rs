//! Domain Layer
//!
//! The storefront core: catalog filtering and the cart ledger, with no I/O.
//!
//! ## Structure
//!
//! - `entities/` - Product, Catalog, CartState, FilterState, Wishlist, User
//! - `value_objects/` - SortKey, PriceRange, MinRating, PhoneNumber, OtpCode
//! - `services/` - the catalog filter/sort engine
//! - `policies/` - festival matching, checkout gating
//! - `ports/` - CatalogSource, AuthService
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system or network directly
//! 2. **Value in, value out** - Every state change returns a new value
//! 3. **Total** - Unknown ids and out-of-range requests are no-ops or clamps, never errors

pub mod entities;
pub mod policies;
pub mod ports;
pub mod services;
pub mod value_objects;
