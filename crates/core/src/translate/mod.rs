mod adapter;
mod document;
pub mod microsoft;

use crate::documentation::HtmlDocument;
use crate::lang::Lang;
use futures::future::BoxFuture;
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub use adapter::LanguageAdapter;
pub use document::{DocumentSection, NamedTranslationDocument, TranslationDocument};
pub use microsoft::{HttpMicrosoftService, MicrosoftTranslator};

const LOG_TARGET: &str = "translate";

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Translation {
    pub original: String,
    pub translation: String,
    pub src_lang: Lang,
    pub target_lang: Lang,
    pub dict_document: Option<TranslationDocument>,
    pub extra_documents: Vec<NamedTranslationDocument>,
}

impl Translation {
    pub fn new<S, T>(original: S, translation: T, src_lang: Lang, target_lang: Lang) -> Self
    where
        S: Into<String>,
        T: Into<String>,
    {
        Self {
            original: original.into(),
            translation: translation.into(),
            src_lang,
            target_lang,
            dict_document: None,
            extra_documents: Vec::new(),
        }
    }

    pub fn with_dict_document(mut self, document: Option<TranslationDocument>) -> Self {
        self.dict_document = document;
        self
    }

    pub fn with_extra_documents(mut self, documents: Vec<NamedTranslationDocument>) -> Self {
        self.extra_documents = documents;
        self
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum TranslateError {
    #[error("{message}")]
    UnsupportedLanguage { lang: Lang, message: String },
    #[error("unrecognized language code: {0}")]
    UnrecognizedLanguageCode(String),
    #[error("{0}")]
    Authentication(String),
    #[error("content exceeds the translator's length limit")]
    ContentTooLarge,
    #[error("{0}")]
    Provider(String),
    #[error("transport failure: {0}")]
    Transport(String),
}

impl TranslateError {
    pub fn unsupported_language(lang: Lang, message: impl Into<String>) -> Self {
        Self::UnsupportedLanguage {
            lang,
            message: message.into(),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::UnsupportedLanguage { .. } => "unsupported_language",
            Self::UnrecognizedLanguageCode(_) => "unrecognized_language_code",
            Self::Authentication(_) => "authentication",
            Self::ContentTooLarge => "content_too_large",
            Self::Provider(_) => "provider",
            Self::Transport(_) => "transport",
        }
    }
}

/// Hook for errors raised by local policy rather than by the provider.
///
/// Every such error passes through here before being returned so that the
/// reporting side effects stay in one place.
pub(crate) fn on_error(error: TranslateError) -> TranslateError {
    tracing::warn!(target: LOG_TARGET, kind = error.kind(), error = %error, "translation rejected");
    error
}

/// Host-facing translation contract.
pub trait Translator: Send + Sync {
    fn id(&self) -> &'static str;

    fn name(&self) -> &'static str;

    /// Minimum time the host should leave between two calls.
    fn interval_limit(&self) -> Duration;

    /// Maximum input length, in characters, the host should submit.
    fn content_length_limit(&self) -> usize;

    fn supported_source_languages(&self) -> &[Lang];

    fn supported_target_languages(&self) -> &[Lang];

    fn translate(
        &self,
        text: String,
        source: Lang,
        target: Lang,
    ) -> BoxFuture<'_, Result<Translation, TranslateError>>;
}

/// Translators able to rewrite rendered HTML documentation in place.
pub trait DocumentationTranslator: Translator {
    fn translate_documentation(
        &self,
        document: HtmlDocument,
        source: Lang,
        target: Lang,
    ) -> BoxFuture<'_, Result<HtmlDocument, TranslateError>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_translation_has_no_documents() {
        let t = Translation::new("hello", "bonjour", Lang::English, Lang::French);
        assert_eq!(t.original, "hello");
        assert_eq!(t.translation, "bonjour");
        assert!(t.dict_document.is_none());
        assert!(t.extra_documents.is_empty());
    }

    #[test]
    fn unsupported_language_displays_its_message() {
        let err = TranslateError::unsupported_language(Lang::Latin, "Unsupported language: Latin");
        assert_eq!(err.to_string(), "Unsupported language: Latin");
        assert_eq!(err.kind(), "unsupported_language");
    }

    #[test]
    fn on_error_returns_the_same_error() {
        assert_eq!(
            on_error(TranslateError::ContentTooLarge),
            TranslateError::ContentTooLarge
        );
    }
}
