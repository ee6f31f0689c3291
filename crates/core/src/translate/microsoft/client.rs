use crate::config::MicrosoftConfig;
use crate::lang::Lang;
use crate::translate::microsoft::models::{
    ApiError, DictionaryExamples, DictionaryLookup, ErrorBody, ExampleQuery, TextItem, TextType,
    TranslationResponse,
};
use crate::translate::microsoft::service::{MicrosoftError, MicrosoftService, ServiceResult};
use crate::util::{retry_with_backoff, RetryPolicy};
use futures::future::BoxFuture;
use futures::FutureExt;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

const LOG_TARGET: &str = "translate::microsoft::client";
const API_VERSION: &str = "3.0";
const SUBSCRIPTION_KEY_HEADER: &str = "Ocp-Apim-Subscription-Key";
const SUBSCRIPTION_REGION_HEADER: &str = "Ocp-Apim-Subscription-Region";
const MAX_DICTIONARY_TEXT_CHARS: usize = 100;
const MAX_DICTIONARY_WORDS: usize = 5;
const MAX_EXAMPLE_QUERIES: usize = 10;

/// [`MicrosoftService`] over the Translator v3 REST API.
#[derive(Clone)]
pub struct HttpMicrosoftService {
    client: Client,
    config: MicrosoftConfig,
    retry: RetryPolicy,
}

impl HttpMicrosoftService {
    pub fn new(config: MicrosoftConfig) -> Result<Self, MicrosoftError> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            client,
            config,
            retry: RetryPolicy::default(),
        })
    }

    /// Retry policy for the primary translate call. Dictionary calls are
    /// optional and always run once.
    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    fn url(&self, path: &str, params: &[(&str, &str)]) -> Result<Url, MicrosoftError> {
        let base = self.config.endpoint.as_str().trim_end_matches('/');
        let mut url = Url::parse(&format!("{base}/{path}"))?;
        url.query_pairs_mut()
            .append_pair("api-version", API_VERSION)
            .extend_pairs(params);
        Ok(url)
    }

    async fn post<B, T>(&self, url: Url, body: &B) -> ServiceResult<Vec<T>>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        tracing::debug!(target: LOG_TARGET, path = url.path(), "sending request");

        let mut request = self
            .client
            .post(url)
            .header(SUBSCRIPTION_KEY_HEADER, self.config.api_key.expose())
            .json(body);
        if let Some(region) = &self.config.region {
            request = request.header(SUBSCRIPTION_REGION_HEADER, region);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let error = response.json::<ErrorBody>().await.ok().map(|body| body.error);
            tracing::debug!(target: LOG_TARGET, %status, ?error, "request failed");
            return Err(if is_authentication_failure(status, error.as_ref()) {
                MicrosoftError::Authentication {
                    message: error.and_then(|e| e.presentable_error().map(str::to_owned)),
                }
            } else {
                MicrosoftError::status(status.as_u16(), error)
            });
        }

        response
            .json::<Vec<T>>()
            .await
            .map_err(|e| MicrosoftError::InvalidResponse(e.to_string()))
    }
}

/// 403 also covers quota and permission failures (403000, 403001), which are
/// not credential problems. Only a 401xxx body code marks a 403 as one.
fn is_authentication_failure(status: StatusCode, error: Option<&ApiError>) -> bool {
    match status {
        StatusCode::UNAUTHORIZED => true,
        StatusCode::FORBIDDEN => error.is_some_and(|e| e.code / 1000 == 401),
        _ => false,
    }
}

impl MicrosoftService for HttpMicrosoftService {
    fn translate<'a>(
        &'a self,
        text: &'a str,
        from: &'a str,
        to: &'a str,
        text_type: TextType,
    ) -> BoxFuture<'a, ServiceResult<Option<TranslationResponse>>> {
        async move {
            let mut params = vec![("to", to), ("textType", text_type.as_str())];
            if !from.eq_ignore_ascii_case(Lang::Auto.code()) {
                params.push(("from", from));
            }
            let url = self.url("translate", &params)?;
            let body = [TextItem { text }];

            let responses: Vec<TranslationResponse> = retry_with_backoff(
                &self.retry,
                || self.post(url.clone(), &body),
                MicrosoftError::is_retryable,
            )
            .await?;
            Ok(responses.into_iter().next())
        }
        .boxed()
    }

    fn can_lookup_dictionary(&self, text: &str) -> bool {
        let text = text.trim();
        !text.is_empty()
            && text.chars().count() <= MAX_DICTIONARY_TEXT_CHARS
            && !text.contains(['\n', '\r'])
            && text.split_whitespace().count() <= MAX_DICTIONARY_WORDS
    }

    fn dictionary_lookup<'a>(
        &'a self,
        text: &'a str,
        from: &'a str,
        to: &'a str,
    ) -> BoxFuture<'a, ServiceResult<Option<DictionaryLookup>>> {
        async move {
            let url = self.url("dictionary/lookup", &[("from", from), ("to", to)])?;
            let body = [TextItem { text: text.trim() }];
            let lookups: Vec<DictionaryLookup> = self.post(url, &body).await?;
            Ok(lookups.into_iter().next())
        }
        .boxed()
    }

    fn dictionary_examples<'a>(
        &'a self,
        lookup: &'a DictionaryLookup,
        from: &'a str,
        to: &'a str,
    ) -> BoxFuture<'a, ServiceResult<Option<Vec<DictionaryExamples>>>> {
        async move {
            let queries: Vec<ExampleQuery<'_>> = lookup
                .translations
                .iter()
                .take(MAX_EXAMPLE_QUERIES)
                .map(|t| ExampleQuery {
                    text: &lookup.normalized_source,
                    translation: &t.normalized_target,
                })
                .collect();
            if queries.is_empty() {
                return Ok(None);
            }

            let url = self.url("dictionary/examples", &[("from", from), ("to", to)])?;
            let examples: Vec<DictionaryExamples> = self.post(url, queries.as_slice()).await?;
            Ok((!examples.is_empty()).then_some(examples))
        }
        .boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiKey;

    fn service() -> HttpMicrosoftService {
        let config = MicrosoftConfig::new(ApiKey::new("key").unwrap())
            .with_endpoint("http://localhost:9999/base/")
            .unwrap();
        HttpMicrosoftService::new(config).unwrap()
    }

    #[test]
    fn url_appends_path_and_query() {
        let url = service()
            .url("dictionary/lookup", &[("from", "en"), ("to", "es")])
            .unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:9999/base/dictionary/lookup?api-version=3.0&from=en&to=es"
        );
    }

    #[test]
    fn only_credential_failures_are_authentication() {
        let quota = ApiError::new(403001, "The subscription has exceeded its free quota.");
        let bad_key = ApiError::new(401000, "The request is not authorized.");
        assert!(is_authentication_failure(StatusCode::UNAUTHORIZED, None));
        assert!(is_authentication_failure(StatusCode::FORBIDDEN, Some(&bad_key)));
        assert!(!is_authentication_failure(StatusCode::FORBIDDEN, Some(&quota)));
        assert!(!is_authentication_failure(StatusCode::FORBIDDEN, None));
        assert!(!is_authentication_failure(StatusCode::BAD_REQUEST, Some(&bad_key)));
    }

    #[test]
    fn dictionary_eligibility() {
        let s = service();
        assert!(s.can_lookup_dictionary("fly"));
        assert!(s.can_lookup_dictionary("  look up  "));
        assert!(!s.can_lookup_dictionary("   "));
        assert!(!s.can_lookup_dictionary("one\ntwo"));
        assert!(!s.can_lookup_dictionary("this sentence has far too many words"));
        assert!(!s.can_lookup_dictionary(&"a".repeat(MAX_DICTIONARY_TEXT_CHARS + 1)));
    }
}
