use serde::{Deserialize, Serialize};
use std::{fmt, time::Duration};
use url::Url;

pub const DEFAULT_ENDPOINT: &str = "https://api.cognitive.microsofttranslator.com";
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;
pub const ENV_MICROSOFT_TRANSLATOR_KEY: &str = "MICROSOFT_TRANSLATOR_KEY";
pub const ENV_MICROSOFT_TRANSLATOR_REGION: &str = "MICROSOFT_TRANSLATOR_REGION";
pub const ENV_MICROSOFT_TRANSLATOR_ENDPOINT: &str = "MICROSOFT_TRANSLATOR_ENDPOINT";

#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new<S: Into<String>>(value: S) -> Result<Self, ConfigError> {
        let v = value.into();
        if v.trim().is_empty() {
            return Err(ConfigError::EmptyApiKey);
        }
        Ok(Self(v))
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(**redacted**)")
    }
}

/// Connection settings for the Microsoft Translator v3 REST API.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct MicrosoftConfig {
    pub endpoint: Url,
    /// Azure resource region; required for regional and multi-service resources.
    pub region: Option<String>,
    pub api_key: ApiKey,
    pub timeout: Duration,
}

impl MicrosoftConfig {
    pub fn new(api_key: ApiKey) -> Self {
        Self {
            endpoint: default_endpoint(),
            region: None,
            api_key,
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
        }
    }

    pub fn with_endpoint(mut self, endpoint: &str) -> Result<Self, ConfigError> {
        self.endpoint = parse_endpoint(endpoint)?;
        Ok(self)
    }

    pub fn with_region<S: Into<String>>(mut self, region: S) -> Result<Self, ConfigError> {
        let region = region.into();
        if region.trim().is_empty() {
            return Err(ConfigError::EmptyRegion);
        }
        self.region = Some(region);
        Ok(self)
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Result<Self, ConfigError> {
        if timeout.is_zero() {
            return Err(ConfigError::ZeroTimeout);
        }
        self.timeout = timeout;
        Ok(self)
    }
}

fn default_endpoint() -> Url {
    Url::parse(DEFAULT_ENDPOINT).expect("default endpoint is a valid URL")
}

fn parse_endpoint(value: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(value.trim()).map_err(|e| ConfigError::InvalidEndpoint(e.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ConfigError::InvalidEndpoint(format!(
            "unsupported scheme: {other}"
        ))),
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("api key must not be empty")]
    EmptyApiKey,
    #[error("no api key given; pass --api-key or set MICROSOFT_TRANSLATOR_KEY")]
    MissingApiKey,
    #[error("region must not be empty")]
    EmptyRegion,
    #[error("invalid endpoint: {0}")]
    InvalidEndpoint(String),
    #[error("timeout must be > 0 ms")]
    ZeroTimeout,
}

pub trait Env {
    fn var(&self, key: &str) -> Option<String>;
}

#[derive(Clone, Debug, Default)]
pub struct StdEnv;

impl Env for StdEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

#[derive(Clone, Debug, Default)]
pub struct MapEnv {
    vars: std::collections::BTreeMap<String, String>,
}

impl MapEnv {
    pub fn with_var(mut self, key: &str, value: &str) -> Self {
        self.vars.insert(key.to_owned(), value.to_owned());
        self
    }
}

impl Env for MapEnv {
    fn var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}

pub fn resolve_api_key(
    cli_value: Option<String>,
    env_key: &str,
    env: &impl Env,
) -> Result<Option<ApiKey>, ConfigError> {
    match cli_value.or_else(|| env.var(env_key)) {
        Some(v) => Ok(Some(ApiKey::new(v)?)),
        None => Ok(None),
    }
}

pub fn resolve_string_with_default(
    cli_value: Option<String>,
    env_key: &str,
    env: &impl Env,
    default: &str,
) -> String {
    resolve_optional_string(cli_value, env_key, env).unwrap_or_else(|| default.to_owned())
}

pub fn resolve_optional_string(
    cli_value: Option<String>,
    env_key: &str,
    env: &impl Env,
) -> Option<String> {
    cli_value.or_else(|| env.var(env_key))
}

/// Values given on the command line; each falls back to its environment
/// variable, then to the built-in default.
#[derive(Clone, Debug, Default)]
pub struct MicrosoftOverrides {
    pub api_key: Option<String>,
    pub region: Option<String>,
    pub endpoint: Option<String>,
    pub timeout_ms: Option<u64>,
}

pub fn resolve_microsoft_config(
    overrides: MicrosoftOverrides,
    env: &impl Env,
) -> Result<MicrosoftConfig, ConfigError> {
    let api_key = resolve_api_key(overrides.api_key, ENV_MICROSOFT_TRANSLATOR_KEY, env)?
        .ok_or(ConfigError::MissingApiKey)?;
    let endpoint = resolve_string_with_default(
        overrides.endpoint,
        ENV_MICROSOFT_TRANSLATOR_ENDPOINT,
        env,
        DEFAULT_ENDPOINT,
    );

    let mut config = MicrosoftConfig::new(api_key).with_endpoint(&endpoint)?;
    if let Some(region) =
        resolve_optional_string(overrides.region, ENV_MICROSOFT_TRANSLATOR_REGION, env)
    {
        config = config.with_region(region)?;
    }
    if let Some(ms) = overrides.timeout_ms {
        config = config.with_timeout(Duration::from_millis(ms))?;
    }
    Ok(config)
}
