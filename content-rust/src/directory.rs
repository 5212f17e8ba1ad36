use crate::{
    collection_body::parse_collection, Category, ContentError, ContentFetcher, ContentItem,
    ContentKind, ContentResult,
};
use std::path::{Path, PathBuf};

/// Reads collections from a local `data/` tree laid out as
/// `{root}/{kind}/{category}.json`.
pub struct DirectoryFetcher {
    root: PathBuf,
}

impl DirectoryFetcher {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    #[must_use]
    pub fn path_for(&self, kind: ContentKind, category: &Category) -> PathBuf {
        self.root
            .join(kind.as_str())
            .join(format!("{category}.json"))
    }
}

#[async_trait::async_trait]
impl ContentFetcher for DirectoryFetcher {
    fn source(&self) -> &'static str {
        "directory"
    }

    async fn fetch(
        &self,
        kind: ContentKind,
        category: &Category,
    ) -> ContentResult<Vec<ContentItem>> {
        let name = category.as_str();
        if name.contains(['/', '\\']) || name == ".." {
            return Err(ContentError::InvalidInput(format!(
                "Category {name} cannot name a file"
            )));
        }

        let path = self.path_for(kind, category);
        let body = tokio::fs::read(&path)
            .await
            .map_err(|e| ContentError::Io(format!("{}: {e}", path.display())))?;
        parse_collection(kind, &body)
    }
}
