use crate::{Article, Artwork, ContentError, ContentItem, ContentKind, ContentResult};
use serde::Deserialize;
use std::collections::HashSet;

#[derive(Deserialize)]
struct ArticlesBody {
    articles: Vec<Article>,
}

#[derive(Deserialize)]
struct ArtworksBody {
    artworks: Vec<Artwork>,
}

/// Parse a `{ "<kind>": [ ... ] }` body into the records of that kind.
pub fn parse_collection(kind: ContentKind, body: &[u8]) -> ContentResult<Vec<ContentItem>> {
    let items: Vec<ContentItem> = match kind {
        ContentKind::Articles => serde_json::from_slice::<ArticlesBody>(body)
            .map_err(|e| ContentError::Parse(format!("{kind}: {e}")))?
            .articles
            .into_iter()
            .map(ContentItem::from)
            .collect(),
        ContentKind::Artworks => serde_json::from_slice::<ArtworksBody>(body)
            .map_err(|e| ContentError::Parse(format!("{kind}: {e}")))?
            .artworks
            .into_iter()
            .map(ContentItem::from)
            .collect(),
    };

    // Lookups take the first match, so later duplicates are unreachable.
    let mut seen = HashSet::new();
    for item in &items {
        if !seen.insert(item.id()) {
            tracing::warn!(kind = %kind, id = item.id(), "duplicate id in collection");
        }
    }

    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_articles_body() {
        let body = br#"{
            "articles": [
                { "id": "a1", "title": "First", "excerpt": "x", "date": "2024-01-01",
                  "content": "body", "tags": ["one"], "image": "img/a1.jpg" },
                { "id": "a2", "title": "Second" }
            ]
        }"#;

        let items = parse_collection(ContentKind::Articles, body).expect("parses");
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].id(), "a1");
        assert_eq!(items[0].tags(), ["one".to_string()]);
        match &items[1] {
            ContentItem::Article(article) => {
                assert_eq!(article.title, "Second");
                assert!(article.tags.is_empty());
                assert_eq!(article.image, None);
            }
            ContentItem::Artwork(_) => panic!("expected an article"),
        }
    }

    #[test]
    fn artwork_year_accepts_number_or_string() {
        let body = br#"{
            "artworks": [
                { "id": "w1", "title": "Dawn", "year": 2021 },
                { "id": "w2", "title": "Dusk", "year": "2019-2020" }
            ]
        }"#;

        let items = parse_collection(ContentKind::Artworks, body).expect("parses");
        let years: Vec<_> = items
            .iter()
            .map(|item| match item {
                ContentItem::Artwork(artwork) => artwork.year.clone(),
                ContentItem::Article(_) => panic!("expected an artwork"),
            })
            .collect();
        assert_eq!(years, ["2021", "2019-2020"]);
    }

    #[test]
    fn body_keyed_by_other_kind_is_a_parse_error() {
        let body = br#"{ "artworks": [] }"#;
        let err = parse_collection(ContentKind::Articles, body).expect_err("wrong key");
        assert!(matches!(err, ContentError::Parse(_)));
    }

    #[test]
    fn malformed_body_is_a_parse_error() {
        let err = parse_collection(ContentKind::Articles, b"<html>").expect_err("not json");
        assert!(matches!(err, ContentError::Parse(_)));
    }
}
