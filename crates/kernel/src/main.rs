//! Ludex
//!
//! Browse and review the seeded video game catalog from the command line.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use ludex_kernel::catalog::CatalogQuery;
use ludex_kernel::cli;
use ludex_kernel::config::Config;
use ludex_kernel::fixtures;
use ludex_kernel::review::ReviewForm;

/// Video game catalog.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List a page of games, optionally filtered.
    List {
        /// Case-insensitive title search.
        #[arg(long)]
        search: Option<String>,

        /// Tag id the games must carry (repeatable; all must match).
        #[arg(long = "tag")]
        tags: Vec<i64>,

        /// Page number, starting at 1.
        #[arg(long, default_value = "1")]
        page: usize,
    },

    /// Show one game with its reviews.
    Show { slug: String },

    /// List every known tag.
    Tags,

    /// Post a review.
    Review {
        slug: String,

        #[arg(long)]
        author: String,

        #[arg(long)]
        rating: Option<i64>,

        #[arg(long)]
        comment: Option<String>,
    },
}

fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    init_tracing();

    let args = Args::parse();

    let config = Config::from_env().context("failed to load configuration")?;
    info!(seed = config.fixture_seed, "Configuration loaded");

    let mut catalog = fixtures::generate(&config.fixtures())
        .context("failed to generate fixtures")?
        .into_catalog()?;

    let output = match args.command {
        Command::List { search, tags, page } => {
            let query = CatalogQuery {
                search,
                tag_ids: tags.into_iter().collect(),
            };
            cli::cmd_list(&catalog, &query, page)?
        }
        Command::Show { slug } => cli::cmd_show(&catalog, &slug)?,
        Command::Tags => cli::cmd_tags(&catalog)?,
        Command::Review {
            slug,
            author,
            rating,
            comment,
        } => {
            let form = ReviewForm::new(author, rating, comment);
            cli::cmd_review(&mut catalog, &slug, &form)?
        }
    };

    println!("{output}");

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
