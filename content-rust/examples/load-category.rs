use dotenvy::dotenv;
use portfolio_content::{
    Category, ContentFetcher, ContentKind, ContentStore, ContentStoreOptions, DirectoryFetcher,
    HttpFetcher, HttpFetcherOptions,
};
use std::{env, error::Error, sync::Arc};
use tracing_subscriber::EnvFilter;

// Usage: cargo run --example load-category -- <articles|artworks> <category> [item-id]
//
// Reads from PORTFOLIO_BASE_URL when set, otherwise from PORTFOLIO_DATA_DIR
// (default "data").
#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args = env::args().skip(1);
    let kind: ContentKind = args.next().unwrap_or_else(|| "articles".into()).parse()?;
    let category = Category::new(args.next().unwrap_or_else(|| "nature".into()))?;
    let item_id = args.next();

    let fetcher: Arc<dyn ContentFetcher> = match env::var("PORTFOLIO_BASE_URL") {
        Ok(base_url) => Arc::new(HttpFetcher::new(HttpFetcherOptions {
            base_url,
            ..Default::default()
        })),
        Err(_) => Arc::new(DirectoryFetcher::new(
            env::var("PORTFOLIO_DATA_DIR").unwrap_or_else(|_| "data".into()),
        )),
    };
    let store = ContentStore::new(fetcher, ContentStoreOptions::default());

    if let Some(id) = item_id {
        let item = store.get_item(kind, &category, &id).await?;
        println!("{item:#?}");
        return Ok(());
    }

    let collection = store.try_load_category(kind, &category).await?;
    for item in collection.iter() {
        println!("{:<24} {}  [{}]", item.id(), item.title(), item.tags().join(", "));
    }

    Ok(())
}
