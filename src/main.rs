//! Pujan CLI - browse the samagri catalog and run a cart
//!
//! Usage: pujan <COMMAND>
//!
//! Commands:
//!   list        List products, filtered and sorted
//!   categories  Show the category directory
//!   show        Show one product in detail
//!   cart        Apply cart operations and optionally check out

mod commands;
mod ui;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use pujan::config::{Config, Verbosity};
use pujan::presentation::{Cli, Commands};

use crate::commands::cart::{CartRequest, SignIn};
use crate::ui::context::UiContext;

/// `-v` flags win over the configured verbosity
fn log_level(verbose: u8, configured: Verbosity) -> &'static str {
    match verbose {
        0 => configured.log_directive(),
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// RUST_LOG, when set, replaces the computed filter entirely.
fn init_tracing(verbose: u8, configured: Verbosity) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("pujan={}", log_level(verbose, configured)))
    });
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}

fn run(cli: Cli) -> Result<()> {
    let project_root = std::env::current_dir()?;
    let (mut config, warnings) = Config::resolve(Some(&project_root), cli.config.as_deref())?;
    if let Some(path) = cli.catalog {
        config.catalog.path = Some(path);
    }

    init_tracing(cli.verbose, config.output.verbosity);
    for warning in &warnings {
        tracing::warn!(
            key = %warning.key,
            file = %warning.file.display(),
            line = ?warning.line,
            suggestion = ?warning.suggestion,
            "unknown config key"
        );
    }

    let ui = UiContext::new(cli.json, cli.color, &config);

    match cli.command {
        Commands::List(args) => commands::list::cmd_list(args, &config, &ui),
        Commands::Categories => commands::categories::cmd_categories(&config, &ui),
        Commands::Show { id, quantity } => commands::show::cmd_show(&id, quantity, &config, &ui),
        Commands::Cart {
            ops,
            checkout,
            phone,
            otp,
            name,
            email,
        } => {
            let sign_in = match (phone, otp, name) {
                (Some(phone), Some(otp), Some(name)) => Some(SignIn {
                    phone,
                    otp,
                    name,
                    email,
                }),
                _ => None,
            };
            let request = CartRequest {
                ops,
                checkout,
                sign_in,
            };
            commands::cart::cmd_cart(request, &config, &ui)
        }
    }
}

fn main() {
    let cli = Cli::parse();
    let json = cli.json;

    if let Err(err) = run(cli) {
        ui::error::print_error(&err, json);
        std::process::exit(1);
    }
}
