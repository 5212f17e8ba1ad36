mod common;

use common::{article, articles, artwork, category, harness};
use portfolio_content::{Category, ContentError, ContentKind};
use portfolio_view::{
    ArticlesView, ArtworksView, Direction, Outcome, Page, PageMarker, PageWindow, Pagination,
    Screen, View, ViewController, ViewParams,
};

fn params() -> ViewParams {
    ViewController::builder()
        .add_article_topic(category("nature"))
        .add_article_topic(category("craft"))
        .add_artwork_topic(category("paintings"))
}

fn item_ids(screen: &Screen) -> Vec<String> {
    match screen {
        Screen::Items { items, .. } => items.iter().map(|item| item.id().to_string()).collect(),
        other => panic!("expected an item list, got {other:?}"),
    }
}

#[tokio::test]
async fn open_topic_loads_and_renders_first_page() {
    let h = harness(params());
    let nature = category("nature");
    h.fetcher
        .enqueue(ContentKind::Articles, &nature, articles("n", 16));
    h.controller.navigate_to(Page::Articles).await;

    let outcome = h.controller.open_topic(nature.clone()).await;

    assert_eq!(outcome, Outcome::Applied);
    let state = h.controller.state().await;
    assert_eq!(state.view, View::Articles(ArticlesView::List));
    assert_eq!(state.active_topic, Some(nature.clone()));
    assert_eq!(state.item_page, 1);

    let screens = h.renderer.screens();
    assert!(screens.contains(&Screen::Loading {
        kind: ContentKind::Articles,
        category: nature.clone(),
    }));
    let last = screens.last().expect("items rendered");
    assert_eq!(item_ids(last).len(), 12);
    match last {
        Screen::Items { window, .. } => {
            assert_eq!(
                *window,
                PageWindow::new(&Pagination::new(16, 12), 1)
            );
            assert_eq!(window.total_pages, 2);
        }
        other => panic!("expected an item list, got {other:?}"),
    }
}

#[tokio::test]
async fn cached_topic_renders_without_loading_screen() {
    let h = harness(params());
    let nature = category("nature");
    h.fetcher
        .enqueue(ContentKind::Articles, &nature, articles("n", 3));
    h.controller.navigate_to(Page::Articles).await;
    h.controller.open_topic(nature.clone()).await;
    h.controller.navigate_to(Page::Articles).await;
    h.renderer.clear();

    assert_eq!(h.controller.open_topic(nature.clone()).await, Outcome::Applied);

    let screens = h.renderer.screens();
    assert_eq!(screens.len(), 1);
    assert_eq!(item_ids(&screens[0]).len(), 3);
    assert_eq!(h.fetcher.fetch_count(ContentKind::Articles, &nature), 1);
}

#[tokio::test]
async fn item_pages_are_clamped_and_out_of_range_jumps_ignored() {
    let h = harness(params());
    let nature = category("nature");
    h.fetcher
        .enqueue(ContentKind::Articles, &nature, articles("n", 16));
    h.controller.navigate_to(Page::Articles).await;
    h.controller.open_topic(nature.clone()).await;

    assert_eq!(
        h.controller.change_item_page(Direction::Prev).await,
        Outcome::Ignored
    );
    assert_eq!(
        h.controller.change_item_page(Direction::Next).await,
        Outcome::Applied
    );
    assert_eq!(
        item_ids(&h.renderer.last_screen().unwrap()),
        vec!["n-12", "n-13", "n-14", "n-15"]
    );
    assert_eq!(
        h.controller.change_item_page(Direction::Next).await,
        Outcome::Ignored
    );

    let before = h.controller.state().await;
    assert_eq!(h.controller.go_to_item_page(0).await, Outcome::Ignored);
    assert_eq!(h.controller.go_to_item_page(3).await, Outcome::Ignored);
    assert_eq!(h.controller.state().await, before);

    assert_eq!(h.controller.go_to_item_page(1).await, Outcome::Applied);
    assert_eq!(h.controller.state().await.item_page, 1);
}

#[tokio::test]
async fn topic_list_is_paginated() {
    let mut params = ViewController::builder().topics_per_page(3);
    for name in ["a", "b", "c", "d", "e", "f", "g", "h"] {
        params = params.add_article_topic(category(name));
    }
    let h = harness(params);

    h.controller.navigate_to(Page::Articles).await;
    match h.renderer.last_screen().unwrap() {
        Screen::Topics { topics, window, .. } => {
            assert_eq!(topics, vec![category("a"), category("b"), category("c")]);
            assert_eq!(window.total_pages, 3);
            assert_eq!(
                window.markers,
                vec![PageMarker::Page(1), PageMarker::Page(2), PageMarker::Page(3)]
            );
        }
        other => panic!("expected topics, got {other:?}"),
    }

    assert_eq!(
        h.controller.change_topic_page(Direction::Prev).await,
        Outcome::Ignored
    );
    assert_eq!(h.controller.go_to_topic_page(4).await, Outcome::Ignored);
    assert_eq!(h.controller.go_to_topic_page(3).await, Outcome::Applied);

    assert_eq!(h.controller.state().await.topic_page, 3);
    match h.renderer.last_screen().unwrap() {
        Screen::Topics { topics, .. } => {
            assert_eq!(topics, vec![category("g"), category("h")]);
        }
        other => panic!("expected topics, got {other:?}"),
    }
    assert_eq!(
        h.controller.change_topic_page(Direction::Next).await,
        Outcome::Ignored
    );
}

#[tokio::test]
async fn open_topic_is_ignored_outside_topic_views() {
    let h = harness(params());
    let before = h.controller.state().await;

    assert_eq!(
        h.controller.open_topic(category("nature")).await,
        Outcome::Ignored
    );
    assert_eq!(h.controller.state().await, before);
    assert!(h.fetcher.tracked_fetches().is_empty());
}

#[tokio::test]
async fn failed_topic_load_renders_inline_error_and_can_be_retried() {
    let h = harness(params());
    let nature = category("nature");
    h.fetcher
        .enqueue(
            ContentKind::Articles,
            &nature,
            ContentError::Parse("articles: EOF".to_string()),
        )
        .enqueue(ContentKind::Articles, &nature, articles("n", 2));
    h.controller.navigate_to(Page::Articles).await;

    assert_eq!(
        h.controller.open_topic(nature.clone()).await,
        Outcome::Failed
    );
    assert_eq!(
        h.controller.state().await.view,
        View::Articles(ArticlesView::List)
    );
    match h.renderer.last_screen().unwrap() {
        Screen::Error {
            view, retryable, ..
        } => {
            assert_eq!(view, View::Articles(ArticlesView::List));
            assert!(retryable);
        }
        other => panic!("expected an error, got {other:?}"),
    }

    assert_eq!(h.controller.go_back().await, Outcome::Applied);
    assert_eq!(
        h.controller.state().await.view,
        View::Articles(ArticlesView::Topics)
    );
    assert_eq!(
        h.controller.open_topic(nature.clone()).await,
        Outcome::Applied
    );
    assert_eq!(item_ids(&h.renderer.last_screen().unwrap()).len(), 2);
}

#[tokio::test]
async fn open_item_shows_detail_and_back_returns_to_list() {
    let h = harness(params());
    let nature = category("nature");
    h.fetcher
        .enqueue(ContentKind::Articles, &nature, articles("n", 14));
    h.controller.navigate_to(Page::Articles).await;
    h.controller.open_topic(nature.clone()).await;
    h.controller.change_item_page(Direction::Next).await;

    let outcome = h
        .controller
        .open_item(nature.clone(), "n-13".to_string())
        .await;

    assert_eq!(outcome, Outcome::Applied);
    assert_eq!(
        h.controller.state().await.view,
        View::Articles(ArticlesView::Detail)
    );
    assert_eq!(
        h.renderer.last_visible(),
        Some(View::Articles(ArticlesView::Detail))
    );
    assert_eq!(
        h.renderer.last_screen(),
        Some(Screen::Detail {
            category: nature.clone(),
            item: article("n-13"),
        })
    );

    assert_eq!(h.controller.go_back().await, Outcome::Applied);
    let state = h.controller.state().await;
    assert_eq!(state.view, View::Articles(ArticlesView::List));
    assert_eq!(state.item_page, 2);
    assert_eq!(
        item_ids(&h.renderer.last_screen().unwrap()),
        vec!["n-12", "n-13"]
    );
    assert_eq!(h.fetcher.fetch_count(ContentKind::Articles, &nature), 1);
}

#[tokio::test]
async fn missing_item_renders_not_found_and_keeps_the_list() {
    let h = harness(params());
    let nature = category("nature");
    h.fetcher
        .enqueue(ContentKind::Articles, &nature, articles("n", 2));
    h.controller.navigate_to(Page::Articles).await;
    h.controller.open_topic(nature.clone()).await;

    let outcome = h
        .controller
        .open_item(nature.clone(), "missing-id".to_string())
        .await;

    assert_eq!(outcome, Outcome::Failed);
    assert_eq!(
        h.controller.state().await.view,
        View::Articles(ArticlesView::List)
    );
    assert_eq!(
        h.renderer.last_screen(),
        Some(Screen::Error {
            view: View::Articles(ArticlesView::List),
            message: "This item could not be found.".to_string(),
            retryable: false,
        })
    );

    assert_eq!(h.controller.go_back().await, Outcome::Applied);
    assert_eq!(
        h.controller.state().await.view,
        View::Articles(ArticlesView::Topics)
    );
}

#[tokio::test]
async fn open_item_from_another_category_is_ignored() {
    let h = harness(params());
    let nature = category("nature");
    let craft = category("craft");
    h.fetcher
        .enqueue(ContentKind::Articles, &nature, articles("n", 2));
    h.controller.navigate_to(Page::Articles).await;
    h.controller.open_topic(nature.clone()).await;
    let calls_before = h.renderer.calls().len();

    let outcome = h
        .controller
        .open_item(craft.clone(), "c-1".to_string())
        .await;

    assert_eq!(outcome, Outcome::Ignored);
    let state = h.controller.state().await;
    assert_eq!(state.view, View::Articles(ArticlesView::List));
    assert_eq!(state.active_topic, Some(nature.clone()));
    assert_eq!(state.active_item, None);
    assert_eq!(h.renderer.calls().len(), calls_before);
    assert_eq!(h.fetcher.fetch_count(ContentKind::Articles, &craft), 0);
}

#[tokio::test]
async fn artwork_topics_open_a_grid_without_details() {
    let h = harness(params());
    let paintings = category("paintings");
    h.fetcher.enqueue(
        ContentKind::Artworks,
        &paintings,
        vec![artwork("w1"), artwork("w2")],
    );
    h.controller.navigate_to(Page::Artworks).await;

    assert_eq!(
        h.controller.open_topic(paintings.clone()).await,
        Outcome::Applied
    );
    assert_eq!(
        h.controller.state().await.view,
        View::Artworks(ArtworksView::Grid)
    );
    assert_eq!(
        item_ids(&h.renderer.last_screen().unwrap()),
        vec!["w1", "w2"]
    );

    assert_eq!(
        h.controller
            .open_item(paintings.clone(), "w1".to_string())
            .await,
        Outcome::Ignored
    );
}

#[tokio::test]
async fn late_result_for_a_replaced_topic_is_discarded() {
    let h = harness(params());
    let first = category("nature");
    let second = category("craft");
    let deferred = h.fetcher.enqueue_deferred(ContentKind::Articles, &first);
    h.fetcher
        .enqueue(ContentKind::Articles, &second, articles("c", 2));
    h.controller.navigate_to(Page::Articles).await;

    let (first_outcome, second_outcome) = tokio::join!(
        h.controller.open_topic(first.clone()),
        async {
            tokio::task::yield_now().await;
            let outcome = h.controller.open_topic(second.clone()).await;
            deferred.resolve(articles("n", 3));
            outcome
        }
    );

    assert_eq!(first_outcome, Outcome::Stale);
    assert_eq!(second_outcome, Outcome::Applied);
    assert_eq!(h.controller.state().await.active_topic, Some(second.clone()));

    let rendered_topics: Vec<Category> = h
        .renderer
        .screens()
        .into_iter()
        .filter_map(|screen| match screen {
            Screen::Items { category, .. } => Some(category),
            _ => None,
        })
        .collect();
    assert_eq!(rendered_topics, vec![second.clone()]);
    assert_eq!(item_ids(&h.renderer.last_screen().unwrap()), vec!["c-0", "c-1"]);
}

#[tokio::test]
async fn late_result_after_leaving_the_page_is_discarded() {
    let h = harness(params());
    let nature = category("nature");
    let deferred = h.fetcher.enqueue_deferred(ContentKind::Articles, &nature);
    h.controller.navigate_to(Page::Articles).await;

    let (outcome, ()) = tokio::join!(h.controller.open_topic(nature.clone()), async {
        tokio::task::yield_now().await;
        h.controller.navigate_to(Page::Contact).await;
        deferred.resolve(vec![article("n-0")]);
    });

    assert_eq!(outcome, Outcome::Stale);
    assert_eq!(h.controller.state().await.view, View::Contact);
    assert_eq!(
        h.renderer.last_screen(),
        Some(Screen::Static(Page::Contact))
    );
}

