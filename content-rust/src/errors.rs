use crate::{Category, ContentKind};
use std::{sync::Arc, time::Duration};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    /// The request for the collection failed before a response arrived, or
    /// reading the response body failed.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),
    /// The server answered with a non-success status code
    #[error("Status error: {1} (Status {0})")]
    StatusCode(reqwest::StatusCode, String),
    /// The body did not have the `{ "<kind>": [ ... ] }` shape.
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("IO error: {0}")]
    Io(String),
    #[error("Retrieval timed out after {0:?}")]
    Timeout(Duration),
    /// A load this caller joined while it was in flight failed. The
    /// underlying error is shared between every joined caller.
    #[error(transparent)]
    Shared(Arc<ContentError>),
    #[error("Item {id} not found in {kind}/{category}")]
    NotFound {
        kind: ContentKind,
        category: Category,
        id: String,
    },
}

impl ContentError {
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::NotFound { .. } => true,
            Self::Shared(inner) => inner.is_not_found(),
            _ => false,
        }
    }
}

pub type ContentResult<T> = Result<T, ContentError>;
