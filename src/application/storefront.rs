//! Storefront reducer
//!
//! The top-level shopper session: search text, selected category, filter
//! panel, sort, cart, wishlist and the signed-in user. `apply` is the single
//! entry point; it consumes the current state and an action and returns the
//! next state plus the events a UI would turn into toasts and badge updates.

use serde::Serialize;

use crate::domain::entities::{Catalog, CartState, FilterState, User, Wishlist, WishlistChange};
use crate::domain::policies::checkout_policy::{self, CheckoutDecision};
use crate::domain::policies::FestivalMatch;
use crate::domain::services::CatalogQuery;
use crate::domain::value_objects::{PriceRange, SortKey, DEFAULT_PRICE_CEILING};

/// Listing defaults taken from configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StorefrontSettings {
    pub price_ceiling: f64,
    pub default_sort: SortKey,
    pub festival_match: FestivalMatch,
}

impl Default for StorefrontSettings {
    fn default() -> Self {
        Self {
            price_ceiling: DEFAULT_PRICE_CEILING,
            default_sort: SortKey::default(),
            festival_match: FestivalMatch::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum StorefrontAction {
    /// Typing in the header search box; clears the selected category
    Search(String),
    /// Clicking a category tile; clears the search text
    SelectCategory(String),
    SetFilters(FilterState),
    ToggleFilterCategory { category: String, checked: bool },
    ToggleFilterFestival { festival: String, checked: bool },
    SetPriceRange(PriceRange),
    SetInStockOnly(bool),
    ToggleMinRating { stars: u8, checked: bool },
    ClearFilters,
    SetSort(SortKey),
    AddToCart { product_id: String, quantity: u32 },
    UpdateQuantity { product_id: String, quantity: i64 },
    RemoveFromCart { product_id: String },
    ToggleWishlist { product_id: String },
    SignedIn(User),
    SignOut,
    Checkout,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "kebab-case")]
pub enum StorefrontEvent {
    AddedToCart {
        product_id: String,
        name: String,
        quantity: u32,
    },
    /// The cart held fewer units than asked for because of stock
    QuantityCapped {
        product_id: String,
        requested: u64,
        max: u32,
    },
    OutOfStock {
        product_id: String,
    },
    RemovedFromCart {
        product_id: String,
    },
    WishlistAdded {
        product_id: String,
    },
    WishlistRemoved {
        product_id: String,
    },
    SignedIn {
        name: String,
    },
    SignedOut,
    CheckoutRequiresAuth,
    CheckoutEmptyCart,
    CheckoutStarted {
        item_count: u64,
        total: f64,
    },
    UnknownProduct {
        product_id: String,
    },
}

/// Result of applying one action
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub state: StorefrontState,
    pub events: Vec<StorefrontEvent>,
}

impl Transition {
    fn quiet(state: StorefrontState) -> Self {
        Self {
            state,
            events: Vec::new(),
        }
    }

    fn with(state: StorefrontState, event: StorefrontEvent) -> Self {
        Self {
            state,
            events: vec![event],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StorefrontState {
    pub search_text: String,
    pub selected_category: Option<String>,
    pub filters: FilterState,
    pub sort: SortKey,
    pub cart: CartState,
    pub wishlist: Wishlist,
    pub user: Option<User>,
    #[serde(skip)]
    settings: StorefrontSettings,
}

impl Default for StorefrontState {
    fn default() -> Self {
        Self::new(StorefrontSettings::default())
    }
}

impl StorefrontState {
    pub fn new(settings: StorefrontSettings) -> Self {
        Self {
            search_text: String::new(),
            selected_category: None,
            filters: FilterState::with_price_ceiling(settings.price_ceiling),
            sort: settings.default_sort,
            cart: CartState::new(),
            wishlist: Wishlist::new(),
            user: None,
            settings,
        }
    }

    pub fn settings(&self) -> &StorefrontSettings {
        &self.settings
    }

    /// The listing query implied by the current session
    pub fn query(&self) -> CatalogQuery {
        CatalogQuery {
            search_text: self.search_text.clone(),
            selected_category: self.selected_category.clone(),
            filters: self.filters.clone(),
            sort: self.sort,
            festival_match: self.settings.festival_match,
        }
    }

    /// Cart badge count
    pub fn cart_badge(&self) -> u64 {
        self.cart.total_item_count()
    }

    pub fn apply(self, catalog: &Catalog, action: StorefrontAction) -> Transition {
        use StorefrontAction as A;

        match action {
            A::Search(text) => Transition::quiet(Self {
                search_text: text,
                selected_category: None,
                ..self
            }),
            A::SelectCategory(category) => Transition::quiet(Self {
                selected_category: Some(category),
                search_text: String::new(),
                ..self
            }),
            A::SetFilters(filters) => Transition::quiet(Self { filters, ..self }),
            A::ToggleFilterCategory { category, checked } => {
                let filters = self.filters.toggle_category(&category, checked);
                Transition::quiet(Self { filters, ..self })
            }
            A::ToggleFilterFestival { festival, checked } => {
                let filters = self.filters.toggle_festival(&festival, checked);
                Transition::quiet(Self { filters, ..self })
            }
            A::SetPriceRange(range) => {
                let filters = self.filters.with_price_range(range);
                Transition::quiet(Self { filters, ..self })
            }
            A::SetInStockOnly(in_stock_only) => {
                let filters = self.filters.with_in_stock_only(in_stock_only);
                Transition::quiet(Self { filters, ..self })
            }
            A::ToggleMinRating { stars, checked } => {
                let filters = self.filters.toggle_min_rating(stars, checked);
                Transition::quiet(Self { filters, ..self })
            }
            A::ClearFilters => {
                let filters = self.filters.cleared(self.settings.price_ceiling);
                Transition::quiet(Self { filters, ..self })
            }
            A::SetSort(sort) => Transition::quiet(Self { sort, ..self }),
            A::AddToCart {
                product_id,
                quantity,
            } => self.add_to_cart(catalog, product_id, quantity),
            A::UpdateQuantity {
                product_id,
                quantity,
            } => self.update_quantity(product_id, quantity),
            A::RemoveFromCart { product_id } => {
                if self.cart.line(&product_id).is_none() {
                    return Transition::quiet(self);
                }
                let cart = self.cart.remove_item(&product_id);
                Transition::with(
                    Self { cart, ..self },
                    StorefrontEvent::RemovedFromCart { product_id },
                )
            }
            A::ToggleWishlist { product_id } => {
                let (wishlist, change) = self.wishlist.toggle(&product_id);
                let event = match change {
                    WishlistChange::Added => StorefrontEvent::WishlistAdded { product_id },
                    WishlistChange::Removed => StorefrontEvent::WishlistRemoved { product_id },
                };
                Transition::with(Self { wishlist, ..self }, event)
            }
            A::SignedIn(user) => {
                tracing::info!(phone = %user.phone.masked(), "shopper signed in");
                let event = StorefrontEvent::SignedIn {
                    name: user.name.clone(),
                };
                Transition::with(
                    Self {
                        user: Some(user),
                        ..self
                    },
                    event,
                )
            }
            A::SignOut => {
                if self.user.is_none() {
                    return Transition::quiet(self);
                }
                Transition::with(Self { user: None, ..self }, StorefrontEvent::SignedOut)
            }
            A::Checkout => {
                let decision = checkout_policy::decide(self.user.as_ref(), &self.cart);
                tracing::debug!(?decision, "checkout requested");
                let event = match decision {
                    CheckoutDecision::RequiresAuthentication => {
                        StorefrontEvent::CheckoutRequiresAuth
                    }
                    CheckoutDecision::EmptyCart => StorefrontEvent::CheckoutEmptyCart,
                    CheckoutDecision::Proceed { item_count, total } => {
                        StorefrontEvent::CheckoutStarted { item_count, total }
                    }
                };
                Transition::with(self, event)
            }
        }
    }

    fn add_to_cart(self, catalog: &Catalog, product_id: String, quantity: u32) -> Transition {
        let Some(product) = catalog.get(&product_id) else {
            tracing::warn!(%product_id, "add to cart for unknown product");
            return Transition::with(self, StorefrontEvent::UnknownProduct { product_id });
        };
        if quantity == 0 {
            return Transition::quiet(self);
        }

        let before = self.cart.line(&product_id).map_or(0, |line| line.quantity);
        let cart = self.cart.add_item(product, quantity);
        let Some(line) = cart.line(&product_id) else {
            return Transition::with(self, StorefrontEvent::OutOfStock { product_id });
        };

        let requested = u64::from(before) + u64::from(quantity);
        let mut events = Vec::new();
        if u64::from(line.quantity) < requested {
            tracing::debug!(%product_id, requested, granted = line.quantity, "quantity capped at stock");
            events.push(StorefrontEvent::QuantityCapped {
                product_id: product_id.clone(),
                requested,
                max: line.quantity,
            });
        }
        events.push(StorefrontEvent::AddedToCart {
            product_id,
            name: line.name.clone(),
            quantity: line.quantity,
        });

        Transition {
            state: Self { cart, ..self },
            events,
        }
    }

    fn update_quantity(self, product_id: String, quantity: i64) -> Transition {
        if self.cart.line(&product_id).is_none() {
            return Transition::quiet(self);
        }
        let cart = self.cart.update_quantity(&product_id, quantity);
        let event = match cart.line(&product_id) {
            None => Some(StorefrontEvent::RemovedFromCart {
                product_id: product_id.clone(),
            }),
            Some(line) if i64::from(line.quantity) < quantity => {
                Some(StorefrontEvent::QuantityCapped {
                    product_id: product_id.clone(),
                    requested: u64::try_from(quantity).unwrap_or_default(),
                    max: line.quantity,
                })
            }
            Some(_) => None,
        };
        let state = Self { cart, ..self };
        match event {
            Some(event) => Transition::with(state, event),
            None => Transition::quiet(state),
        }
    }
}
