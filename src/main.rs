//! Biblioteka command-line client
//!
//! Prints the first page of a resource listing as JSON:
//! `biblioteka <autores|colecoes|livros|leitores|emprestimos|ui> [search]`

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use biblioteka_client::{models::PageQuery, ui::UiSetup, AppState, ClientConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = ClientConfig::load()?;

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("biblioteka_client={}", config.logging.level).into());

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut args = std::env::args().skip(1);
    let resource = args.next().unwrap_or_else(|| "livros".to_string());
    let search = args.next();
    let search = search.as_deref();

    tracing::info!(
        base_url = %config.api.base_url,
        resource = %resource,
        "Biblioteka client v{}",
        env!("CARGO_PKG_VERSION")
    );

    let state = AppState::new(config)?;
    let services = &state.services;

    let output = match resource.as_str() {
        "autores" => serde_json::to_string_pretty(
            &services.authors.find_search(&PageQuery::default(), search, None).await?,
        )?,
        "colecoes" => serde_json::to_string_pretty(
            &services.collections.find_search(&PageQuery::default(), search).await?,
        )?,
        "livros" => serde_json::to_string_pretty(
            &services.books.find_search(&PageQuery::default(), search, None, None).await?,
        )?,
        "leitores" => serde_json::to_string_pretty(
            &services.readers.find_search(&PageQuery::default(), search).await?,
        )?,
        "emprestimos" => serde_json::to_string_pretty(
            &services.loans.find_search(&PageQuery::default(), search, None).await?,
        )?,
        "ui" => serde_json::to_string_pretty(&UiSetup::standard())?,
        other => anyhow::bail!("unknown resource `{}`", other),
    };

    println!("{}", output);
    Ok(())
}
