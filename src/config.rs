use std::{env, path::PathBuf, str::FromStr, time::Duration};

pub const HOST: &str = "0.0.0.0";
pub const PORT: u16 = 8080;
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_SESSION_IDLE_SECS: u64 = 3600;

/// Reads a numeric variable. Unset yields `None`; an unparsable value is logged and ignored.
fn parse_var<T: FromStr>(name: &str) -> Option<T> {
    let raw = env::var(name).ok()?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            log::warn!("Invalid {} '{}', using default", name, raw);
            None
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallingConvention {
    /// The service validates against the supplied JSON schema and returns an object.
    Structured,
    /// The service returns free text that is parsed locally.
    RawText,
}

impl CallingConvention {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "structured" | "object" | "schema" => Some(CallingConvention::Structured),
            "text" | "raw" | "raw_text" => Some(CallingConvention::RawText),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CallingConvention::Structured => "structured",
            CallingConvention::RawText => "text",
        }
    }
}

#[derive(Debug, Clone)]
pub struct GenerationConfig {
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
    pub convention: CallingConvention,
    pub timeout: Option<Duration>,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            convention: CallingConvention::Structured,
            timeout: None,
        }
    }
}

impl GenerationConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let convention = match env::var("GENERATION_MODE") {
            Ok(mode) => CallingConvention::parse(&mode).unwrap_or_else(|| {
                log::warn!("Unknown GENERATION_MODE '{}', using structured", mode);
                CallingConvention::Structured
            }),
            Err(_) => defaults.convention,
        };

        let timeout = parse_var::<u64>("GENERATION_TIMEOUT_SECS")
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs);

        Self {
            api_key: env::var("GENERATION_API_KEY").ok().filter(|key| !key.is_empty()),
            base_url: env::var("GENERATION_BASE_URL").unwrap_or(defaults.base_url),
            model: env::var("GENERATION_MODEL").unwrap_or(defaults.model),
            convention,
            timeout,
        }
    }
}

/// Where the identity provider's signing secret comes from.
#[derive(Debug, Clone)]
pub enum IdentitySecretSource {
    Inline(String),
    File(PathBuf),
    Missing,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub identity_secret: IdentitySecretSource,
    pub generation: GenerationConfig,
    /// Sessions untouched for this long are dropped.
    pub session_idle: Duration,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let host = env::var("HOST").unwrap_or_else(|_| HOST.to_string());
        let port: u16 = parse_var("PORT").unwrap_or(PORT);
        let session_idle = parse_var::<u64>("SESSION_IDLE_SECS")
            .filter(|secs| *secs > 0)
            .map_or(Duration::from_secs(DEFAULT_SESSION_IDLE_SECS), Duration::from_secs);

        let identity_secret = match (env::var("JWT_SECRET"), env::var("IDENTITY_SECRET_FILE")) {
            (Ok(secret), _) if !secret.is_empty() => IdentitySecretSource::Inline(secret),
            (_, Ok(path)) if !path.is_empty() => IdentitySecretSource::File(PathBuf::from(path)),
            _ => IdentitySecretSource::Missing,
        };

        Self {
            host,
            port,
            identity_secret,
            generation: GenerationConfig::from_env(),
            session_idle,
        }
    }
}
