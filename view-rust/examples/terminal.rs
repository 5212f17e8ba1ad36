use dotenvy::dotenv;
use portfolio_content::{
    Category, ContentFetcher, ContentItem, ContentStore, ContentStoreOptions, DirectoryFetcher,
    HttpFetcher, HttpFetcherOptions,
};
use portfolio_view::{
    Direction, Intent, PageMarker, PageWindow, Renderer, Screen, View, ViewController, ViewParams,
};
use std::{env, error::Error, sync::Arc};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

/// Draws screens as plain text on stdout.
struct TerminalRenderer;

impl TerminalRenderer {
    fn pager(window: &PageWindow) -> String {
        window
            .markers
            .iter()
            .map(|marker| match marker {
                PageMarker::Page(page) if *page == window.page => format!("[{page}]"),
                PageMarker::Page(page) => page.to_string(),
                PageMarker::Ellipsis => "…".to_string(),
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn describe(item: &ContentItem) -> String {
        match item {
            ContentItem::Article(article) => {
                format!("{} ({})\n    {}", article.title, article.date, article.excerpt)
            }
            ContentItem::Artwork(artwork) => format!(
                "{} - {}, {}, {}",
                artwork.title, artwork.medium, artwork.dimensions, artwork.year
            ),
        }
    }
}

impl Renderer for TerminalRenderer {
    fn render(&self, screen: Screen) {
        match screen {
            Screen::Static(page) => println!("({page} page)"),
            Screen::Topics {
                kind,
                topics,
                window,
            } => {
                println!("{kind} topics:");
                for topic in topics {
                    println!("  - {topic}");
                }
                println!("  pages: {}", Self::pager(&window));
            }
            Screen::Loading { kind, category } => println!("loading {kind}/{category}…"),
            Screen::Items {
                category,
                items,
                window,
                ..
            } => {
                println!("{category}:");
                for item in &items {
                    println!("  {:<22} {}", item.id(), Self::describe(item));
                }
                println!("  pages: {}", Self::pager(&window));
            }
            Screen::Detail { item, .. } => {
                println!("{}", Self::describe(&item));
                if let ContentItem::Article(article) = &item {
                    println!("\n{}\n", article.content);
                }
                if !item.tags().is_empty() {
                    println!("tags: {}", item.tags().join(", "));
                }
            }
            Screen::Error { message, .. } => println!("! {message}"),
        }
    }

    fn set_visible(&self, view: View) {
        println!("--- {} ---", view.container_id());
    }

    fn set_title(&self, title: &str) {
        println!("=== {title} ===");
    }

    fn push_fragment(&self, fragment: &str) {
        println!("(url #{fragment})");
    }
}

fn topics_from_env(name: &str, default: &str) -> Result<Vec<Category>, Box<dyn Error>> {
    env::var(name)
        .unwrap_or_else(|_| default.to_string())
        .split(',')
        .map(str::trim)
        .filter(|topic| !topic.is_empty())
        .map(|topic| Category::new(topic).map_err(Into::into))
        .collect()
}

fn parse_command(line: &str) -> Result<Option<Intent>, Box<dyn Error>> {
    let line = line.trim();
    if line.starts_with('{') {
        return Ok(Some(serde_json::from_str(line)?));
    }

    let mut words = line.split_whitespace();
    let intent = match (words.next(), words.next(), words.next()) {
        (Some("go"), Some(page), None) => Intent::Navigate {
            page: page.parse()?,
        },
        (Some("topic"), Some(category), None) => Intent::OpenTopic {
            category: category.parse()?,
        },
        (Some("item"), Some(category), Some(id)) => Intent::OpenItem {
            category: category.parse()?,
            id: id.to_string(),
        },
        (Some("back"), None, None) => Intent::Back,
        (Some("next"), None, None) => Intent::ItemPage {
            direction: Direction::Next,
        },
        (Some("prev"), None, None) => Intent::ItemPage {
            direction: Direction::Prev,
        },
        (Some("topics"), Some("next"), None) => Intent::TopicPage {
            direction: Direction::Next,
        },
        (Some("topics"), Some("prev"), None) => Intent::TopicPage {
            direction: Direction::Prev,
        },
        (Some("page"), Some(page), None) => Intent::GoToItemPage {
            page: page.parse()?,
        },
        (Some("topics"), Some(page), None) => Intent::GoToTopicPage {
            page: page.parse()?,
        },
        (Some("history"), Some(fragment), None) => Intent::HistoryPop {
            fragment: fragment.to_string(),
        },
        _ => return Ok(None),
    };
    Ok(Some(intent))
}

// Browse the portfolio from a terminal.
//
// Commands: go <page>, topic <category>, item <category> <id>, back, next,
// prev, page <n>, topics <n|next|prev>, history <#page>, quit. A line
// starting with `{` is read as a JSON intent.
#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let fetcher: Arc<dyn ContentFetcher> = match env::var("PORTFOLIO_BASE_URL") {
        Ok(base_url) => Arc::new(HttpFetcher::new(HttpFetcherOptions {
            base_url,
            ..Default::default()
        })),
        Err(_) => Arc::new(DirectoryFetcher::new(
            env::var("PORTFOLIO_DATA_DIR").unwrap_or_else(|_| "data".into()),
        )),
    };
    let store = Arc::new(ContentStore::new(fetcher, ContentStoreOptions::default()));

    let mut params = ViewParams::new();
    params.article_topics = topics_from_env("PORTFOLIO_ARTICLE_TOPICS", "nature,craft")?;
    params.artwork_topics = topics_from_env("PORTFOLIO_ARTWORK_TOPICS", "paintings,drawings")?;
    let controller = params.build(store, Arc::new(TerminalRenderer));

    controller
        .dispatch(Intent::Start {
            fragment: env::args().nth(1),
        })
        .await;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim() == "quit" {
            break;
        }
        match parse_command(&line) {
            Ok(Some(intent)) => {
                let outcome = controller.dispatch(intent).await;
                tracing::debug!(?outcome, "dispatched");
            }
            Ok(None) => println!("? unknown command"),
            Err(error) => println!("? {error}"),
        }
    }

    Ok(())
}
