//! Microsoft Translator behind the host [`Translator`] contract.
//!
//! A plain translation is a chain of up to three calls: the translation
//! itself, a dictionary lookup for short inputs, and example sentences for
//! that lookup. Only the first call can fail the translation; the other two
//! degrade to "no extra content".

mod client;
mod document;
mod language;
pub mod models;
mod service;

use crate::documentation::HtmlDocument;
use crate::lang::Lang;
use crate::translate::{
    on_error, DocumentationTranslator, LanguageAdapter, NamedTranslationDocument, TranslateError,
    Translation, Translator,
};
use futures::future::BoxFuture;
use futures::FutureExt;
use models::{ApiError, DictionaryExamples, DictionaryLookup, TextType};
use std::time::Duration;
use tracing::debug;

pub use client::HttpMicrosoftService;
pub use document::{dictionary_document, examples_document};
pub use language::MICROSOFT_LANGUAGES;
pub use service::{MicrosoftError, MicrosoftService, ServiceResult};

const LOG_TARGET: &str = "translate::microsoft";

pub const TRANSLATOR_ID: &str = "translate.microsoft";
pub const TRANSLATOR_NAME: &str = "Microsoft Translator";
pub const INTERVAL_LIMIT: Duration = Duration::from_millis(500);
pub const CONTENT_LENGTH_LIMIT: usize = 50_000;
pub const EXAMPLES_DOCUMENT_NAME: &str = "examples";
const UNKNOWN_ERROR: &str = "Unknown error";

pub struct MicrosoftTranslator<S = HttpMicrosoftService> {
    service: S,
    languages: &'static LanguageAdapter,
}

impl<S: MicrosoftService> MicrosoftTranslator<S> {
    pub fn new(service: S) -> Self {
        Self {
            service,
            languages: &MICROSOFT_LANGUAGES,
        }
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    async fn do_translate(
        &self,
        text: &str,
        source: Lang,
        target: Lang,
    ) -> Result<Translation, TranslateError> {
        if !target.is_explicit() {
            return Err(on_error(TranslateError::unsupported_language(
                target,
                format!("Unsupported target language: {}", target.name()),
            )));
        }

        let from = self.languages.code_for(source).map_err(on_error)?;
        let to = self.languages.code_for(target).map_err(on_error)?;
        let response = self
            .service
            .translate(text, &from, &to, TextType::Plain)
            .await
            .map_err(classify_error)?;

        let Some((detected, translated)) = response.and_then(|r| {
            let detected = r.detected_language;
            r.translations.into_iter().next().map(|t| (detected, t))
        }) else {
            debug!(target: LOG_TARGET, "empty translation response, returning input unchanged");
            return Ok(Translation::new(text, text, source.to_explicit(), target));
        };

        let src_lang = match detected {
            Some(detected) => self
                .languages
                .language_for(&detected.language)
                .map_err(on_error)?,
            None => source.to_explicit(),
        };
        let target_lang = self.languages.language_for(&translated.to).map_err(on_error)?;

        let lookup = self.lookup_dictionary(text, src_lang, target).await;
        let extra_documents = match &lookup {
            Some(lookup) => self
                .fetch_examples(lookup, src_lang, target)
                .await
                .as_deref()
                .and_then(examples_document)
                .map(|doc| vec![NamedTranslationDocument::new(EXAMPLES_DOCUMENT_NAME, doc)])
                .unwrap_or_default(),
            None => Vec::new(),
        };

        Ok(
            Translation::new(text, translated.text, src_lang, target_lang)
                .with_dict_document(lookup.as_ref().map(dictionary_document))
                .with_extra_documents(extra_documents),
        )
    }

    async fn lookup_dictionary(
        &self,
        text: &str,
        source: Lang,
        target: Lang,
    ) -> Option<DictionaryLookup> {
        if !source.is_explicit() || source == target || !self.service.can_lookup_dictionary(text) {
            return None;
        }
        let from = self.languages.code_for(source).ok()?;
        let to = self.languages.code_for(target).ok()?;

        match self.service.dictionary_lookup(text, &from, &to).await {
            Ok(lookup) => lookup.filter(|l| !l.translations.is_empty()),
            Err(e) => {
                debug!(target: LOG_TARGET, error = %e, "dictionary lookup failed, skipping");
                None
            }
        }
    }

    async fn fetch_examples(
        &self,
        lookup: &DictionaryLookup,
        source: Lang,
        target: Lang,
    ) -> Option<Vec<DictionaryExamples>> {
        let from = self.languages.code_for(source).ok()?;
        let to = self.languages.code_for(target).ok()?;

        match self.service.dictionary_examples(lookup, &from, &to).await {
            Ok(examples) => examples,
            Err(e) => {
                debug!(target: LOG_TARGET, error = %e, "dictionary examples failed, skipping");
                None
            }
        }
    }

    async fn translate_markup(
        &self,
        markup: &str,
        source: Lang,
        target: Lang,
    ) -> Result<Option<String>, TranslateError> {
        let from = self.languages.code_for(source).map_err(on_error)?;
        let to = self.languages.code_for(target).map_err(on_error)?;
        let response = self
            .service
            .translate(markup, &from, &to, TextType::Html)
            .await
            .map_err(classify_error)?;

        Ok(response.and_then(|r| r.translations.into_iter().next().map(|t| t.text)))
    }
}

/// Normalizes a provider failure.
pub fn classify_error(error: MicrosoftError) -> TranslateError {
    match &error {
        MicrosoftError::Authentication { message } => TranslateError::Authentication(
            message
                .clone()
                .unwrap_or_else(|| "Authentication failed".to_owned()),
        ),
        MicrosoftError::Status { error: Some(api), .. } if api.code == ApiError::CONTENT_TOO_LONG => {
            on_error(TranslateError::ContentTooLarge)
        }
        MicrosoftError::Status { error: api, .. } => {
            let message = api
                .as_ref()
                .and_then(ApiError::presentable_error)
                .map(str::to_owned)
                .or_else(|| Some(error.to_string()).filter(|m| !m.trim().is_empty()))
                .unwrap_or_else(|| UNKNOWN_ERROR.to_owned());
            TranslateError::Provider(message)
        }
        _ => TranslateError::Transport(error.to_string()),
    }
}

impl<S: MicrosoftService> Translator for MicrosoftTranslator<S> {
    fn id(&self) -> &'static str {
        TRANSLATOR_ID
    }

    fn name(&self) -> &'static str {
        TRANSLATOR_NAME
    }

    fn interval_limit(&self) -> Duration {
        INTERVAL_LIMIT
    }

    fn content_length_limit(&self) -> usize {
        CONTENT_LENGTH_LIMIT
    }

    fn supported_source_languages(&self) -> &[Lang] {
        self.languages.supported_source_languages()
    }

    fn supported_target_languages(&self) -> &[Lang] {
        self.languages.supported_target_languages()
    }

    fn translate(
        &self,
        text: String,
        source: Lang,
        target: Lang,
    ) -> BoxFuture<'_, Result<Translation, TranslateError>> {
        async move {
            debug!(target: LOG_TARGET, %source, %target, chars = text.chars().count(), "translating");
            self.do_translate(&text, source, target).await
        }
        .boxed()
    }
}

impl<S: MicrosoftService> DocumentationTranslator for MicrosoftTranslator<S> {
    fn translate_documentation(
        &self,
        document: HtmlDocument,
        source: Lang,
        target: Lang,
    ) -> BoxFuture<'_, Result<HtmlDocument, TranslateError>> {
        async move {
            let mut document = document;
            if document.body().trim().is_empty() {
                return Ok(document);
            }
            if let Some(body) = self.translate_markup(document.body(), source, target).await? {
                document.set_body(body);
            }
            Ok(document)
        }
        .boxed()
    }
}
