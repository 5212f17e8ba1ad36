use portfolio_content::ContentError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ViewError {
    #[error("Unknown page: {0}")]
    UnknownPage(String),
    #[error("Content error: {0}")]
    Content(#[from] ContentError),
}

impl ViewError {
    /// Text shown in the inline error state.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::UnknownPage(id) => format!("There is no page called \"{id}\"."),
            Self::Content(error) if error.is_not_found() => {
                "This item could not be found.".to_string()
            }
            Self::Content(_) => "This content could not be loaded. Please try again.".to_string(),
        }
    }

    /// Whether re-triggering the same navigation may succeed.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::UnknownPage(_) => false,
            Self::Content(error) => !error.is_not_found(),
        }
    }
}
