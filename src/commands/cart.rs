//! Cart command handler
//!
//! Replays cart operations against a fresh session and prints the result.
//! The cart is not persisted between runs.

use anyhow::Result;

use pujan::application::{AuthFlow, StorefrontAction, StorefrontEvent, StorefrontState};
use pujan::config::Config;
use pujan::domain::entities::User;
use pujan::presentation::{factory, CartOp};
use pujan::PujanError;

use crate::commands::load_catalog;
use crate::ui::context::UiContext;
use crate::ui::views::cart::{render_event, CartView};

#[derive(Debug, Default)]
pub struct CartRequest {
    pub ops: Vec<CartOp>,
    pub checkout: bool,
    pub sign_in: Option<SignIn>,
}

#[derive(Debug)]
pub struct SignIn {
    pub phone: String,
    pub otp: String,
    pub name: String,
    pub email: Option<String>,
}

fn sign_in(config: &Config, request: &SignIn) -> Result<User, PujanError> {
    let service = factory::create_auth_service(config)?;
    let mut flow = AuthFlow::new(&service);
    flow.submit_phone(&request.phone)?;
    flow.submit_code(&request.otp)?;
    Ok(flow.complete_profile(&request.name, request.email.as_deref())?)
}

pub fn cmd_cart(request: CartRequest, config: &Config, ui: &UiContext) -> Result<()> {
    let catalog = load_catalog(config)?;

    let mut actions: Vec<StorefrontAction> = Vec::new();
    if let Some(credentials) = &request.sign_in {
        actions.push(StorefrontAction::SignedIn(sign_in(config, credentials)?));
    }
    actions.extend(request.ops.into_iter().map(StorefrontAction::from));
    if request.checkout {
        actions.push(StorefrontAction::Checkout);
    }

    let mut state = StorefrontState::new(config.storefront_settings());
    let mut events = Vec::new();
    for action in actions {
        let transition = state.apply(&catalog, action);
        state = transition.state;
        events.extend(transition.events);
    }

    if ui.json {
        crate::ui::json::emit(serde_json::json!({
            "event": "data",
            "command": "cart",
            "cart": state.cart,
            "item_count": state.cart_badge(),
            "total": state.cart.total_amount(),
            "user": state.user,
            "events": events,
        }))?;
    } else {
        for event in &events {
            println!("{}", render_event(event, ui.color, ui.unicode));
        }
        if !events.is_empty() {
            println!();
        }
        print!("{}", CartView::new(&state.cart).render(ui.color, ui.unicode));
    }

    let unknown = events.iter().find_map(|event| match event {
        StorefrontEvent::UnknownProduct { product_id } => Some(product_id.clone()),
        _ => None,
    });
    if let Some(id) = unknown {
        return Err(PujanError::UnknownProduct { id }.into());
    }
    Ok(())
}
