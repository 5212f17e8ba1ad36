use crate::{ContentError, ContentResult};
use serde::{Deserialize, Deserializer, Serialize};
use std::{fmt, str::FromStr, sync::Arc};

/// Top-level content type. Each kind lives under its own directory and its
/// JSON body wraps the records in an array named after the kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    Articles,
    Artworks,
}

impl ContentKind {
    /// The path segment and the name of the wrapping array in the body.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Articles => "articles",
            Self::Artworks => "artworks",
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentKind {
    type Err = ContentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "articles" => Ok(Self::Articles),
            "artworks" => Ok(Self::Artworks),
            other => Err(ContentError::InvalidInput(format!(
                "Unknown content kind: {other}"
            ))),
        }
    }
}

/// Key of a content partition (a topic), e.g. "nature" or "paintings".
/// Opaque apart from being non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
#[serde(try_from = "String", into = "String")]
pub struct Category(String);

impl Category {
    pub fn new(name: impl Into<String>) -> ContentResult<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(ContentError::InvalidInput(
                "Category must not be empty".to_string(),
            ));
        }
        Ok(Self(name))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Category {
    type Error = ContentError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        category.0
    }
}

impl FromStr for Category {
    type Err = ContentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A written piece belonging to an articles category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
pub struct Article {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub excerpt: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub image: Option<String>,
}

/// A piece of visual work belonging to an artworks category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
pub struct Artwork {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub medium: String,
    #[serde(default)]
    pub dimensions: String,
    /// Authored either as a number (`2021`) or a string (`"2019-2020"`).
    #[serde(default, deserialize_with = "string_or_number")]
    pub year: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub image: Option<String>,
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrNumber {
        String(String),
        Number(serde_json::Number),
    }

    Ok(match StringOrNumber::deserialize(deserializer)? {
        StringOrNumber::String(s) => s,
        StringOrNumber::Number(n) => n.to_string(),
    })
}

/// One record of a loaded collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
#[serde(untagged)]
pub enum ContentItem {
    Article(Article),
    Artwork(Artwork),
}

impl ContentItem {
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Article(article) => &article.id,
            Self::Artwork(artwork) => &artwork.id,
        }
    }

    #[must_use]
    pub fn title(&self) -> &str {
        match self {
            Self::Article(article) => &article.title,
            Self::Artwork(artwork) => &artwork.title,
        }
    }

    #[must_use]
    pub fn tags(&self) -> &[String] {
        match self {
            Self::Article(article) => &article.tags,
            Self::Artwork(artwork) => &artwork.tags,
        }
    }

    #[must_use]
    pub fn kind(&self) -> ContentKind {
        match self {
            Self::Article(_) => ContentKind::Articles,
            Self::Artwork(_) => ContentKind::Artworks,
        }
    }
}

impl From<Article> for ContentItem {
    fn from(article: Article) -> Self {
        Self::Article(article)
    }
}

impl From<Artwork> for ContentItem {
    fn from(artwork: Artwork) -> Self {
        Self::Artwork(artwork)
    }
}

/// A loaded category. Cache hits hand out clones of the same allocation.
pub type Collection = Arc<Vec<ContentItem>>;
