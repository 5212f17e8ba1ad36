mod common;

use common::{articles, category, harness};
use portfolio_content::ContentKind;
use portfolio_view::{ArticlesView, Direction, Intent, Outcome, Page, View, ViewController};

#[test]
fn intents_deserialize_from_ui_messages() {
    let intents: Vec<Intent> = serde_json::from_str(
        r##"[
            { "type": "start", "fragment": "#articles" },
            { "type": "start" },
            { "type": "navigate", "page": "artworks" },
            { "type": "open-topic", "category": "nature" },
            { "type": "open-item", "category": "nature", "id": "n-1" },
            { "type": "item-page", "direction": "next" },
            { "type": "go-to-topic-page", "page": 2 },
            { "type": "back" }
        ]"##,
    )
    .expect("valid intents");

    assert_eq!(
        intents,
        vec![
            Intent::Start {
                fragment: Some("#articles".to_string())
            },
            Intent::Start { fragment: None },
            Intent::Navigate {
                page: Page::Artworks
            },
            Intent::OpenTopic {
                category: category("nature")
            },
            Intent::OpenItem {
                category: category("nature"),
                id: "n-1".to_string()
            },
            Intent::ItemPage {
                direction: Direction::Next
            },
            Intent::GoToTopicPage { page: 2 },
            Intent::Back,
        ]
    );
}

#[test]
fn empty_category_in_a_message_is_rejected() {
    let result = serde_json::from_str::<Intent>(r#"{ "type": "open-topic", "category": "" }"#);
    assert!(result.is_err());
}

#[tokio::test]
async fn dispatch_drives_a_full_session() {
    let h = harness(ViewController::builder().add_article_topic(category("nature")));
    let nature = category("nature");
    h.fetcher
        .enqueue(ContentKind::Articles, &nature, articles("n", 5));

    let steps = vec![
        (Intent::Start { fragment: None }, Outcome::Applied),
        (
            Intent::Navigate {
                page: Page::Articles,
            },
            Outcome::Applied,
        ),
        (
            Intent::OpenTopic {
                category: nature.clone(),
            },
            Outcome::Applied,
        ),
        (
            Intent::ItemPage {
                direction: Direction::Next,
            },
            Outcome::Ignored,
        ),
        (
            Intent::OpenItem {
                category: nature.clone(),
                id: "n-4".to_string(),
            },
            Outcome::Applied,
        ),
        (Intent::Back, Outcome::Applied),
        (
            Intent::HistoryPop {
                fragment: "#home".to_string(),
            },
            Outcome::Applied,
        ),
    ];

    for (intent, expected) in steps {
        let name = intent.name();
        assert_eq!(h.controller.dispatch(intent).await, expected, "{name}");
    }

    let state = h.controller.state().await;
    assert_eq!(state.view, View::Home);
    assert_eq!(state.previous_page, Some(Page::Articles));
    assert_eq!(
        state.previous.map(|snapshot| snapshot.view),
        Some(View::Articles(ArticlesView::List))
    );
    assert_eq!(h.renderer.fragments(), vec!["articles"]);
}
