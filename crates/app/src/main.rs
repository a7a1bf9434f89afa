//! Storefront command-line entry point.
//!
//! Mounts the home view once: loads preferences, opens the exchange-rate feed,
//! fetches the catalog, applies the requested filter/page and prints it.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use storefront::{AppConfig, HomeView, Layout};
use storefront_catalog::ProductType;
use storefront_client::HttpCatalog;
use storefront_currency::{Currency, PriceFormatter, rate_store};
use storefront_feed::RateFeedListener;
use storefront_prefs::{Language, Preferences};

#[derive(Debug, Parser)]
#[command(name = "storefront", about = "Browse the storefront catalog")]
struct Args {
    /// Only show products of this type (repeatable).
    #[arg(long = "type", value_name = "TYPE")]
    types: Vec<String>,

    /// Page to show (1-based).
    #[arg(long, default_value_t = 1)]
    page: u32,

    #[arg(long, value_enum, default_value_t = Layout::Grid)]
    layout: Layout,

    /// Display currency (USD, EUR, TRY); remembered for next time.
    #[arg(long)]
    currency: Option<Currency>,

    /// Display language (en, tr); remembered for next time.
    #[arg(long)]
    language: Option<Language>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env();
    storefront_observability::tracing::init(config.log_format);

    let args = Args::parse();

    let prefs_path = config
        .prefs_path
        .clone()
        .unwrap_or_else(|| PathBuf::from("storefront-prefs.json"));
    let mut prefs = Preferences::open(prefs_path);
    if let Some(currency) = args.currency {
        if currency != prefs.currency() {
            prefs
                .set_currency(currency)
                .context("failed to save currency preference")?;
        }
    }
    if let Some(language) = args.language {
        if language != prefs.language() {
            prefs
                .set_language(language)
                .context("failed to save language preference")?;
        }
    }
    let currency = prefs.currency();
    let language = prefs.language();
    tracing::info!(%currency, %language, api = %config.api_url, "mounting home view");

    let (publisher, reader) = rate_store();
    let feed = match RateFeedListener::spawn(config.feed_config(), publisher) {
        Ok(feed) => Some(feed),
        Err(err) => {
            tracing::warn!(error = %err, "exchange rate feed unavailable; using identity rate");
            None
        }
    };

    let catalog = HttpCatalog::new(config.api_url.clone());
    let mut view = HomeView::mount(
        &catalog,
        PriceFormatter::new(reader.clone(), currency),
        language,
    )
    .await;

    // Non-USD prices are only meaningful once a rate has arrived.
    if !currency.is_usd() && reader.snapshot().is_default() && feed.is_some() {
        let mut first_rate = reader.clone();
        if tokio::time::timeout(config.feed_wait, first_rate.changed())
            .await
            .is_err()
        {
            tracing::warn!(
                wait_ms = config.feed_wait.as_millis() as u64,
                "no exchange rate yet; prices shown at identity rate"
            );
        }
    }

    if !args.types.is_empty() {
        view.set_filter(args.types.iter().map(|t| ProductType::new(t.as_str())));
    }
    if args.page != 1 && !view.go_to_page(args.page) {
        tracing::warn!(
            requested = args.page,
            total = view.pager().total_pages(),
            "requested page out of range; staying on page 1"
        );
    }

    print!("{}", view.render(args.layout));

    drop(feed);
    Ok(())
}
