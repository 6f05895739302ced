//! Phone catalog CLI - browse the catalog and manage the cart and favourites.
//!
//! # Usage
//!
//! ```bash
//! # List every product, or one category's full records
//! catalog products
//! catalog products --category tablets
//!
//! # Render a product page
//! catalog show phones apple-iphone-11-pro-64gb-spacegray
//!
//! # Print sibling color and capacity routes
//! catalog links phones apple-iphone-11-pro-64gb-spacegray
//!
//! # Manage favourites and the cart
//! catalog favourites add phones apple-iphone-11-pro-64gb-spacegray
//! catalog cart increment apple-iphone-11-pro-64gb-spacegray
//! catalog cart list
//! ```
//!
//! Configuration comes from the environment (see
//! `phone_catalog_storefront::config`). Ctrl-C abandons a pending fetch.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use phone_catalog_core::ProductCategory;
use phone_catalog_storefront::config::CatalogConfig;
use phone_catalog_storefront::error::CatalogError;
use phone_catalog_storefront::state::AppState;
use sentry::integrations::tracing as sentry_tracing;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser)]
#[command(name = "catalog")]
#[command(author, version, about = "Phone catalog browser")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List products
    Products {
        /// Show the full records of one category instead of the summary
        #[arg(short, long)]
        category: Option<ProductCategory>,
    },
    /// Render a product page as HTML
    Show {
        /// Product category (`phones`, `tablets`, `accessories`)
        category: ProductCategory,
        /// Variant slug, e.g. `apple-iphone-11-64gb-black`
        slug: String,
        /// Render only the breadcrumb trail
        #[arg(long)]
        breadcrumbs: bool,
    },
    /// Print routes to sibling color and capacity variants
    Links {
        category: ProductCategory,
        slug: String,
    },
    /// Manage favourites
    Favourites {
        #[command(subcommand)]
        action: FavouritesAction,
    },
    /// Manage the cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
}

#[derive(Subcommand)]
enum FavouritesAction {
    /// List favourites
    List,
    /// Fetch a product and add it to favourites
    Add {
        category: ProductCategory,
        slug: String,
    },
    /// Remove a favourite by identity
    Remove { identity: String },
}

#[derive(Subcommand)]
enum CartAction {
    /// List cart lines and totals
    List,
    /// Fetch a product and add it to the cart
    Add {
        category: ProductCategory,
        slug: String,
    },
    /// Remove a cart line by identity
    Remove { identity: String },
    /// Raise a line's quantity by one
    Increment { identity: String },
    /// Lower a line's quantity by one, never below 1
    Decrement { identity: String },
    /// Empty the cart
    Clear,
}

/// Initialize Sentry error tracking and return guard that must be kept alive.
fn init_sentry(config: &CatalogConfig) -> Option<sentry::ClientInitGuard> {
    let dsn = config.sentry_dsn.as_ref()?;

    let guard = sentry::init((
        dsn.as_str(),
        sentry::ClientOptions {
            release: sentry::release_name!(),
            environment: config
                .sentry_environment
                .clone()
                .map(std::borrow::Cow::Owned),
            attach_stacktrace: true,
            ..Default::default()
        },
    ));

    tracing::info!("Sentry initialized");
    Some(guard)
}

/// Filter tracing events to Sentry event types.
fn sentry_event_filter(metadata: &tracing::Metadata<'_>) -> sentry_tracing::EventFilter {
    match *metadata.level() {
        tracing::Level::ERROR | tracing::Level::WARN => sentry_tracing::EventFilter::Event,
        tracing::Level::INFO | tracing::Level::DEBUG => sentry_tracing::EventFilter::Breadcrumb,
        _ => sentry_tracing::EventFilter::Ignore,
    }
}

#[tokio::main]
#[allow(clippy::print_stderr)]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match CatalogConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Invalid configuration: {e}");
            return ExitCode::FAILURE;
        }
    };

    // Initialize Sentry (must be done before tracing subscriber)
    let _sentry_guard = init_sentry(&config);

    // Logs go to stderr; stdout carries command output
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "phone_catalog_cli=info,phone_catalog_storefront=info".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(sentry_tracing::layer().event_filter(sentry_event_filter))
        .init();

    let state = AppState::new(&config);

    let token = CancellationToken::new();
    let ctrl_c = token.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("Interrupted, cancelling pending request");
            ctrl_c.cancel();
        }
    });

    match run(cli, &state, &token).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            e.report();
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli, state: &AppState, token: &CancellationToken) -> Result<(), CatalogError> {
    match cli.command {
        Commands::Products { category } => commands::browse::products(state, category).await?,
        Commands::Show {
            category,
            slug,
            breadcrumbs,
        } => commands::browse::show(state, category, &slug, breadcrumbs, token).await?,
        Commands::Links { category, slug } => {
            commands::browse::links(state, category, &slug, token).await?;
        }
        Commands::Favourites { action } => match action {
            FavouritesAction::List => commands::favourites::list(state),
            FavouritesAction::Add { category, slug } => {
                commands::favourites::add(state, category, &slug, token).await?;
            }
            FavouritesAction::Remove { identity } => {
                commands::favourites::remove(state, &identity)?;
            }
        },
        Commands::Cart { action } => match action {
            CartAction::List => commands::cart::list(state),
            CartAction::Add { category, slug } => {
                commands::cart::add(state, category, &slug, token).await?;
            }
            CartAction::Remove { identity } => commands::cart::remove(state, &identity)?,
            CartAction::Increment { identity } => commands::cart::increment(state, &identity)?,
            CartAction::Decrement { identity } => commands::cart::decrement(state, &identity)?,
            CartAction::Clear => commands::cart::clear(state)?,
        },
    }
    Ok(())
}
