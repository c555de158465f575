//! girlsshop CLI - Catalog checks and order links.
//!
//! # Usage
//!
//! ```bash
//! # List every product in the built-in catalog
//! gs-cli catalog list
//!
//! # List one category of a custom catalog
//! gs-cli catalog list --category accesorios --catalog otono.yaml
//!
//! # Validate a catalog file
//! gs-cli catalog validate otono.yaml
//!
//! # Compose a WhatsApp order link (two lip mattes, one cherry balm)
//! gs-cli order --item 1 --item 1 --item 37:Cereza
//! ```
//!
//! # Commands
//!
//! - `catalog list` - Show products, optionally filtered by category
//! - `catalog validate` - Parse and validate a catalog file
//! - `order` - Print the order message and its hand-off link

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use girlsshop_core::CategoryFilter;
use girlsshop_storefront::StorefrontConfig;
use sentry::integrations::tracing as sentry_tracing;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

use commands::order::ItemSpec;

#[derive(Parser)]
#[command(name = "gs-cli")]
#[command(author, version, about = "girlsshop storefront tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Inspect product catalogs
    Catalog {
        #[command(subcommand)]
        action: CatalogAction,
    },
    /// Build an order and print its WhatsApp link
    Order {
        /// Product to add, as ID or ID:OPTION (repeat to add more units)
        #[arg(short, long = "item", required = true)]
        items: Vec<ItemSpec>,

        /// Catalog file to use instead of the configured one
        #[arg(long)]
        catalog: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
enum CatalogAction {
    /// List products
    List {
        /// Category (`all`, `maquillaje`, `accesorios`, `cuidado-personal`)
        #[arg(short, long, default_value = "all")]
        category: CategoryFilter,

        /// Catalog file to use instead of the configured one
        #[arg(long)]
        catalog: Option<PathBuf>,
    },
    /// Validate a catalog file
    Validate {
        /// Path to a .json, .yaml or .yml catalog
        path: PathBuf,
    },
}

/// Initialize Sentry error tracking and return guard that must be kept alive.
fn init_sentry(config: &StorefrontConfig) -> Option<sentry::ClientInitGuard> {
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

fn main() {
    let cli = Cli::parse();

    // Configuration is needed before tracing so Sentry can be wired in
    let config = StorefrontConfig::from_env();

    let _sentry_guard = config.as_ref().ok().and_then(init_sentry);

    // Defaults to info level for our crates if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "girlsshop_cli=info,girlsshop_storefront=info".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(sentry_tracing::layer().event_filter(sentry_event_filter))
        .init();

    let result: Result<(), Box<dyn std::error::Error>> = match config {
        Ok(config) => run(cli, &config),
        Err(e) => Err(e.into()),
    };

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli, config: &StorefrontConfig) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Catalog { action } => match action {
            CatalogAction::List { category, catalog } => {
                commands::catalog::list(config, catalog.as_deref(), category)?;
            }
            CatalogAction::Validate { path } => commands::catalog::validate(&path)?,
        },
        Commands::Order { items, catalog } => {
            commands::order::compose(config, catalog.as_deref(), &items)?;
        }
    }
    Ok(())
}
