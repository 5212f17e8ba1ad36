use crate::{
    collection_body::parse_collection, Category, ContentError, ContentFetcher, ContentItem,
    ContentKind, ContentResult,
};
use reqwest::{Client, Url};

#[derive(Debug, Clone)]
pub struct HttpFetcherOptions {
    /// Origin the site is served from, without a trailing slash.
    pub base_url: String,
    /// Directory under `base_url` holding the `{kind}/{category}.json` files.
    pub data_path: String,
}

impl Default for HttpFetcherOptions {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            data_path: "data".to_string(),
        }
    }
}

/// Retrieves collections with `GET {base_url}/{data_path}/{kind}/{category}.json`.
pub struct HttpFetcher {
    base_url: String,
    data_path: String,
    client: Client,
}

impl HttpFetcher {
    #[must_use]
    pub fn new(options: HttpFetcherOptions) -> Self {
        Self {
            base_url: options.base_url.trim_end_matches('/').to_string(),
            data_path: options.data_path.trim_matches('/').to_string(),
            client: Client::new(),
        }
    }

    #[must_use]
    pub fn with_client(mut self, client: Client) -> Self {
        self.client = client;
        self
    }

    /// The category becomes a single percent-encoded path segment, so it can
    /// never add a query, a fragment or a parent directory to the request.
    pub fn url_for(&self, kind: ContentKind, category: &Category) -> ContentResult<Url> {
        let mut url = Url::parse(&self.base_url).map_err(|e| {
            ContentError::InvalidInput(format!("Invalid base url {}: {e}", self.base_url))
        })?;
        url.path_segments_mut()
            .map_err(|()| {
                ContentError::InvalidInput(format!(
                    "Base url {} cannot hold a path",
                    self.base_url
                ))
            })?
            .pop_if_empty()
            .extend(self.data_path.split('/').filter(|s| !s.is_empty()))
            .push(kind.as_str())
            .push(&format!("{category}.json"));
        Ok(url)
    }
}

#[async_trait::async_trait]
impl ContentFetcher for HttpFetcher {
    fn source(&self) -> &'static str {
        "http"
    }

    async fn fetch(
        &self,
        kind: ContentKind,
        category: &Category,
    ) -> ContentResult<Vec<ContentItem>> {
        let url = self.url_for(kind, category)?;
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ContentError::StatusCode(
                status,
                response.text().await.unwrap_or_default(),
            ));
        }

        let body = response.bytes().await?;
        parse_collection(kind, &body)
    }
}
