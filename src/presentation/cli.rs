//! CLI Argument Parsing
//!
//! Global flags (--json, --color, --verbose, --config, --catalog) are
//! inherited by all subcommands.

use std::path::PathBuf;
use std::str::FromStr;

use clap::{Args, Parser, Subcommand};
use thiserror::Error;

use crate::application::StorefrontAction;
use crate::domain::policies::FestivalMatch;
use crate::domain::value_objects::SortKey;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// Pujan - browse the samagri catalog and run a cart from the terminal
#[derive(Parser, Debug)]
#[command(name = "pujan")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Emit one NDJSON event per command instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file to use instead of the project/user config
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Catalog JSON file (overrides config and PUJAN_CATALOG)
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List products, filtered and sorted
    List(ListArgs),

    /// Show the category directory
    Categories,

    /// Show one product in detail
    Show {
        /// Product id
        id: String,

        /// Quantity to preview in the stepper (clamped to stock)
        #[arg(short, long, default_value_t = 1)]
        quantity: u32,
    },

    /// Apply cart operations in order and print the resulting cart
    #[command(after_help = "Operations: add:ID[:QTY]  set:ID:QTY  remove:ID")]
    Cart {
        /// Cart operations
        ops: Vec<CartOp>,

        /// Attempt checkout after the operations
        #[arg(long)]
        checkout: bool,

        /// Sign in with this phone number first
        #[arg(long, requires_all = ["otp", "name"])]
        phone: Option<String>,

        /// Verification code for --phone
        #[arg(long, requires = "phone")]
        otp: Option<String>,

        /// Profile name for --phone
        #[arg(long, requires = "phone")]
        name: Option<String>,

        /// Profile email for --phone
        #[arg(long, requires = "phone")]
        email: Option<String>,
    },
}

#[derive(Args, Debug, Default, Clone, PartialEq)]
pub struct ListArgs {
    /// Case-insensitive name search; ignored when --category is given
    #[arg(short, long)]
    pub search: Option<String>,

    /// Show one category, as if its tile was clicked
    #[arg(short, long)]
    pub category: Option<String>,

    /// Filter panel category (repeatable)
    #[arg(long = "filter-category")]
    pub filter_categories: Vec<String>,

    /// Festival (repeatable)
    #[arg(long = "festival")]
    pub festivals: Vec<String>,

    #[arg(long)]
    pub min_price: Option<f64>,

    #[arg(long)]
    pub max_price: Option<f64>,

    /// Hide sold-out products
    #[arg(long)]
    pub in_stock: bool,

    /// Minimum star rating
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=5))]
    pub min_rating: Option<u8>,

    #[arg(long, value_enum)]
    pub sort: Option<SortKey>,

    /// Which product field the festival filter reads
    #[arg(long, value_enum)]
    pub festival_match: Option<FestivalMatch>,
}

/// One cart operation given on the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartOp {
    Add { product_id: String, quantity: u32 },
    Set { product_id: String, quantity: i64 },
    Remove { product_id: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CartOpParseError {
    #[error("unknown cart operation '{0}' (expected add, set or remove)")]
    UnknownVerb(String),

    #[error("cart operation '{0}' is missing a product id")]
    MissingProduct(String),

    #[error("invalid quantity '{quantity}' in '{op}'")]
    InvalidQuantity { op: String, quantity: String },

    #[error("cart operation '{0}' has too many parts")]
    TooManyParts(String),
}

impl FromStr for CartOp {
    type Err = CartOpParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.trim().split(':').collect();
        let verb = parts[0].to_lowercase();
        let product_id = parts
            .get(1)
            .map(|id| id.trim())
            .filter(|id| !id.is_empty())
            .ok_or_else(|| CartOpParseError::MissingProduct(s.to_string()))
            .map(str::to_string);
        let bad_quantity = |q: &str| CartOpParseError::InvalidQuantity {
            op: s.to_string(),
            quantity: q.to_string(),
        };

        match (verb.as_str(), parts.len()) {
            ("add", 2) => Ok(CartOp::Add {
                product_id: product_id?,
                quantity: 1,
            }),
            ("add", 3) => Ok(CartOp::Add {
                product_id: product_id?,
                quantity: parts[2].trim().parse().map_err(|_| bad_quantity(parts[2]))?,
            }),
            ("set", 3) => Ok(CartOp::Set {
                product_id: product_id?,
                quantity: parts[2].trim().parse().map_err(|_| bad_quantity(parts[2]))?,
            }),
            ("set", 2) => Err(bad_quantity("")),
            ("remove", 2) => Ok(CartOp::Remove {
                product_id: product_id?,
            }),
            ("add" | "set" | "remove", 1) => Err(CartOpParseError::MissingProduct(s.to_string())),
            ("add" | "set" | "remove", _) => Err(CartOpParseError::TooManyParts(s.to_string())),
            _ => Err(CartOpParseError::UnknownVerb(s.to_string())),
        }
    }
}

impl From<CartOp> for StorefrontAction {
    fn from(op: CartOp) -> Self {
        match op {
            CartOp::Add {
                product_id,
                quantity,
            } => StorefrontAction::AddToCart {
                product_id,
                quantity,
            },
            CartOp::Set {
                product_id,
                quantity,
            } => StorefrontAction::UpdateQuantity {
                product_id,
                quantity,
            },
            CartOp::Remove { product_id } => StorefrontAction::RemoveFromCart { product_id },
        }
    }
}
