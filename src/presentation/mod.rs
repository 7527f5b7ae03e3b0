//! Presentation Layer
//!
//! - `cli` - argument parsing (via clap), including the cart operation syntax
//! - `factory` - builds ports and use cases from the resolved configuration

pub mod cli;
pub mod factory;

pub use cli::{CartOp, CartOpParseError, Cli, ColorWhen, Commands, ListArgs};
