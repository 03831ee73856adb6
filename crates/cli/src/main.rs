//! SneakerHub CLI - Browse the catalog, manage the cart and the session.
//!
//! # Usage
//!
//! ```bash
//! # Browse products
//! sneakerhub catalog list
//! sneakerhub catalog show 2
//!
//! # Manage the cart
//! sneakerhub cart add 1 -q 2
//! sneakerhub cart update 1 3
//! sneakerhub cart show
//! sneakerhub cart checkout
//!
//! # Log in and out
//! sneakerhub session login --token tok1 --user-id u1 --email a@b.com --admin
//! sneakerhub session status
//! sneakerhub session logout
//!
//! # Check whether a page may be entered
//! sneakerhub navigate /profile
//! ```
//!
//! Session and cart state persist in `$SNEAKERHUB_DATA_DIR/storage.json`.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::io::Write;

use clap::{Parser, Subcommand};
use sneakerhub_cli::commands::{self, session::LoginRequest};
use sneakerhub_cli::{LogFormat, Shop, ShopConfig};
use sneakerhub_core::ProductId;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "sneakerhub")]
#[command(author, version, about = "SneakerHub storefront CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the product catalog
    Catalog {
        #[command(subcommand)]
        action: CatalogAction,
    },
    /// Manage the shopping cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Log in, log out, or show the session
    Session {
        #[command(subcommand)]
        action: SessionAction,
    },
    /// Run the navigation guard for a storefront path
    Navigate {
        /// Path to enter, e.g. `/profile` or `/products/2`
        path: String,
    },
}

#[derive(Subcommand)]
enum CatalogAction {
    /// List all products
    List,
    /// Show a product's details
    Show {
        /// Product id
        id: ProductId,
    },
}

#[derive(Subcommand)]
enum CartAction {
    /// Show cart contents and totals
    Show,
    /// Add a product to the cart
    Add {
        /// Product id
        id: ProductId,

        /// Number of units to add
        #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(i64).range(1..))]
        quantity: i64,
    },
    /// Remove a product from the cart
    Remove {
        /// Product id
        id: ProductId,
    },
    /// Set the quantity of a product in the cart
    Update {
        /// Product id
        id: ProductId,

        /// New quantity (stored as given, even zero)
        #[arg(allow_negative_numbers = true)]
        quantity: i64,
    },
    /// Empty the cart
    Clear,
    /// Place the order and empty the cart
    Checkout,
}

#[derive(Subcommand)]
enum SessionAction {
    /// Record a login issued by the auth backend
    Login {
        /// Session token
        #[arg(short, long)]
        token: String,

        /// User id
        #[arg(short, long)]
        user_id: String,

        /// User email address
        #[arg(short, long)]
        email: String,

        /// Grant admin rights
        #[arg(long)]
        admin: bool,
    },
    /// Clear the session and the cart
    Logout,
    /// Show who is logged in
    Status,
}

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    match format {
        LogFormat::Pretty => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}

fn main() {
    let cli = Cli::parse();

    let config = match ShopConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            init_tracing(LogFormat::default());
            tracing::error!("Invalid configuration: {e}");
            std::process::exit(1);
        }
    };
    init_tracing(config.log_format);

    let result: Result<(), Box<dyn std::error::Error>> = run(cli, &config);

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli, config: &ShopConfig) -> Result<(), Box<dyn std::error::Error>> {
    let mut shop = Shop::open(config)?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Catalog { action } => match action {
            CatalogAction::List => commands::catalog::list(&shop, &mut out)?,
            CatalogAction::Show { id } => commands::catalog::show(&shop, id, &mut out)?,
        },
        Commands::Cart { action } => match action {
            CartAction::Show => commands::cart::show(&shop, &mut out)?,
            CartAction::Add { id, quantity } => {
                commands::cart::add(&mut shop, id, quantity, &mut out)?;
            }
            CartAction::Remove { id } => commands::cart::remove(&mut shop, id, &mut out)?,
            CartAction::Update { id, quantity } => {
                commands::cart::update(&mut shop, id, quantity, &mut out)?;
            }
            CartAction::Clear => commands::cart::clear(&mut shop, &mut out)?,
            CartAction::Checkout => commands::cart::checkout(&mut shop, &mut out)?,
        },
        Commands::Session { action } => match action {
            SessionAction::Login {
                token,
                user_id,
                email,
                admin,
            } => {
                let request = LoginRequest {
                    token,
                    is_admin: admin,
                    user_id,
                    email,
                };
                commands::session::login(&mut shop, request, &mut out)?;
            }
            SessionAction::Logout => commands::session::logout(&mut shop, &mut out)?,
            SessionAction::Status => commands::session::status(&shop, &mut out)?,
        },
        Commands::Navigate { path } => {
            commands::navigate::run(&shop, &path, &mut out)?;
        }
    }

    out.flush()?;
    Ok(())
}
