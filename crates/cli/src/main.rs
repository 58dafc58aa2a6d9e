//! Crocco CLI - drive the storefront components from a terminal.
//!
//! # Usage
//!
//! ```bash
//! # Browse hoodies under 50
//! crocco browse --category hoodies --max 50
//!
//! # Green or black items in size M
//! crocco browse --color green --color black --size M
//!
//! # List wilayas, or the communes of one
//! crocco regions
//! crocco regions --region 16
//!
//! # Build a cart: product 1 size M green, two of product 3
//! crocco cart --add 1:1:M:green --add 3:2
//!
//! # Validate and submit a checkout form
//! crocco checkout order.json
//! ```
//!
//! # Environment Variables
//!
//! - `CROCCO_SHIPPING_FEE`, `CROCCO_CATALOG_PATH`, `CROCCO_REGIONS_PATH` - see
//!   `crocco_storefront::config`
//! - `RUST_LOG` - log filter (default: `crocco=info`)

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

use commands::{CommandError, LineSpec};

#[derive(Parser)]
#[command(name = "crocco")]
#[command(author, version, about = "Crocco storefront CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List catalog products matching a category and filters
    Browse {
        /// Category slug (`tshirts`, `hoodies`, ...) or `all`
        #[arg(short, long, default_value = "all")]
        category: String,

        /// Color filter; repeat for several (any may match)
        #[arg(long = "color")]
        colors: Vec<String>,

        /// Size filter; repeat for several (any may match)
        #[arg(long = "size")]
        sizes: Vec<String>,

        /// Minimum price
        #[arg(long, default_value_t = 0)]
        min: u32,

        /// Maximum price
        #[arg(long, default_value_t = 100)]
        max: u32,
    },
    /// List regions, or the sub-regions of one region
    Regions {
        /// Region id
        #[arg(short, long)]
        region: Option<i32>,
    },
    /// Build a cart and print its totals
    Cart {
        /// Line as `ID[:QTY[:SIZE[:COLOR]]]`; repeat for several
        #[arg(short, long = "add", required = true)]
        lines: Vec<LineSpec>,

        /// Coupon code to try
        #[arg(long)]
        coupon: Option<String>,
    },
    /// Validate a checkout form (JSON) and submit it
    Checkout {
        /// Path to the checkout fields file
        file: PathBuf,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("crocco=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CommandError> {
    let ctx = commands::Context::load()?;

    match cli.command {
        Commands::Browse {
            category,
            colors,
            sizes,
            min,
            max,
        } => commands::browse::run(&ctx, &category, &colors, &sizes, min, max),
        Commands::Regions { region } => {
            commands::regions::run(&ctx, region.map(crocco_core::RegionId::new));
            Ok(())
        }
        Commands::Cart { lines, coupon } => commands::cart::run(&ctx, &lines, coupon.as_deref()),
        Commands::Checkout { file } => commands::checkout::run(&ctx, &file),
    }
}
