//! Domain Value Objects
//!
//! Immutable value types that represent storefront concepts.

mod credentials;
mod min_rating;
mod price_range;
mod quantity_selector;
mod sort_key;

pub use credentials::{digits_only, AuthError, OtpCode, PhoneNumber, OTP_DIGITS, PHONE_DIGITS};
pub use min_rating::{MinRating, MAX_STARS};
pub use price_range::{PriceRange, DEFAULT_PRICE_CEILING};
pub use quantity_selector::QuantitySelector;
pub use sort_key::{ParseSortKeyError, SortKey};
