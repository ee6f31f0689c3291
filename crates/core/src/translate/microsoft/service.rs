use crate::translate::microsoft::models::{
    ApiError, DictionaryExamples, DictionaryLookup, TextType, TranslationResponse,
};
use crate::util::is_transient_status;
use futures::future::BoxFuture;

pub type ServiceResult<T> = Result<T, MicrosoftError>;

#[derive(thiserror::Error, Debug)]
pub enum MicrosoftError {
    #[error("authentication failed")]
    Authentication { message: Option<String> },
    #[error("HTTP {status}")]
    Status { status: u16, error: Option<ApiError> },
    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("invalid request URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

impl MicrosoftError {
    pub fn status(status: u16, error: Option<ApiError>) -> Self {
        Self::Status { status, error }
    }

    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Status { status, .. } => is_transient_status(*status),
            Self::Transport(e) => e.is_timeout() || e.is_connect(),
            _ => false,
        }
    }
}

/// Remote operations of the Translator v3 API.
///
/// Language arguments are provider codes, already adapted. `Ok(None)` means
/// the service answered without content.
pub trait MicrosoftService: Send + Sync {
    fn translate<'a>(
        &'a self,
        text: &'a str,
        from: &'a str,
        to: &'a str,
        text_type: TextType,
    ) -> BoxFuture<'a, ServiceResult<Option<TranslationResponse>>>;

    /// Whether `text` is short and simple enough for a dictionary lookup.
    fn can_lookup_dictionary(&self, text: &str) -> bool;

    fn dictionary_lookup<'a>(
        &'a self,
        text: &'a str,
        from: &'a str,
        to: &'a str,
    ) -> BoxFuture<'a, ServiceResult<Option<DictionaryLookup>>>;

    fn dictionary_examples<'a>(
        &'a self,
        lookup: &'a DictionaryLookup,
        from: &'a str,
        to: &'a str,
    ) -> BoxFuture<'a, ServiceResult<Option<Vec<DictionaryExamples>>>>;
}
