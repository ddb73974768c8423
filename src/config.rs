use anyhow::Context;
use camino::{
    Utf8Path,
    Utf8PathBuf,
};
use serde::Deserialize;
use std::{
    borrow::Cow,
    collections::HashMap,
    str::FromStr,
    time::Duration,
};
use tracing_subscriber::filter::LevelFilter;
use vprikol::Url;

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Deserialize, Debug)]
pub struct Config {
    pub token: String,

    #[serde(default)]
    pub base_url: Option<String>,

    #[serde(default)]
    pub auth_header: Option<String>,

    #[serde(default)]
    pub auth_scheme: Option<String>,

    #[serde(default)]
    pub timeout_secs: Option<u64>,

    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default)]
    pub log_file: Option<Utf8PathBuf>,

    #[serde(flatten)]
    pub extra: HashMap<String, toml::Value>,
}

impl Config {
    /// Load a config from a path
    pub fn load_from_path(path: &Utf8Path) -> anyhow::Result<Self> {
        std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config from `{path}`"))
            .and_then(|data| Self::load_from_str(&data))
    }

    /// Load a config from a str
    pub fn load_from_str(data: &str) -> anyhow::Result<Self> {
        toml::from_str(data).context("failed to parse config")
    }

    /// The request timeout, if one is set
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    /// The default log level
    pub fn log_level(&self) -> LevelFilter {
        LevelFilter::from_str(&self.log_level).unwrap_or(LevelFilter::INFO)
    }

    /// Build an api client from this config.
    pub fn build_client(&self) -> anyhow::Result<vprikol::Client> {
        let mut builder = vprikol::Client::builder();
        builder.token(self.token.as_str());

        if let Some(base_url) = self.base_url.as_deref() {
            builder.base_url(base_url);
        }
        if let Some(auth_header) = self.auth_header.as_deref() {
            builder.auth_header(auth_header);
        }
        if let Some(auth_scheme) = self.auth_scheme.as_deref() {
            builder.auth_scheme(auth_scheme);
        }
        if let Some(timeout) = self.timeout() {
            builder.timeout(timeout);
        }

        builder.build().context("failed to build client")
    }

    /// Validate a config
    pub fn validate(&self) -> Vec<ValidationMessage> {
        let mut errors = Vec::new();

        if self.token.trim().is_empty() {
            errors.push(ValidationMessage {
                severity: Severity::Error,
                error: ValidationError::EmptyToken,
            });
        }

        if let Some(base_url) = self.base_url.as_deref() {
            match Url::parse(base_url) {
                Ok(url) if matches!(url.scheme(), "http" | "https") => {}
                _ => {
                    errors.push(ValidationMessage {
                        severity: Severity::Error,
                        error: ValidationError::InvalidBaseUrl(base_url.into()),
                    });
                }
            }
        }

        if self.timeout_secs == Some(0) {
            errors.push(ValidationMessage {
                severity: Severity::Error,
                error: ValidationError::ZeroTimeout,
            });
        }

        if LevelFilter::from_str(&self.log_level).is_err() {
            errors.push(ValidationMessage {
                severity: Severity::Warn,
                error: ValidationError::InvalidLogLevel(self.log_level.clone()),
            });
        }

        let mut extra_keys: Vec<_> = self.extra.keys().collect();
        extra_keys.sort();
        for key in extra_keys {
            errors.push(ValidationMessage {
                severity: Severity::Warn,
                error: ValidationError::Generic(format!("unknown key `{key}`").into()),
            });
        }

        errors
    }
}

#[derive(Debug)]
pub struct ValidationMessage {
    severity: Severity,
    error: ValidationError,
}

impl ValidationMessage {
    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn error(&self) -> &ValidationError {
        &self.error
    }
}

#[derive(Debug)]
pub enum ValidationError {
    EmptyToken,
    InvalidBaseUrl(String),
    ZeroTimeout,
    InvalidLogLevel(String),
    Generic(Cow<'static, str>),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyToken => write!(f, "Empty Token"),
            Self::InvalidBaseUrl(url) => write!(f, "Invalid Base Url `{url}`"),
            Self::ZeroTimeout => write!(f, "Timeout must be greater than 0"),
            Self::InvalidLogLevel(level) => {
                write!(f, "Invalid Log Level `{level}`, using `info`")
            }
            Self::Generic(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for ValidationError {}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Severity {
    Warn,
    Error,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn minimal_config() {
        let config = Config::load_from_str("token = \"abc\"").expect("failed to parse config");
        assert!(config.token == "abc");
        assert!(config.base_url.is_none());
        assert!(config.log_level() == LevelFilter::INFO);
        assert!(config.validate().is_empty());
    }

    #[test]
    fn full_config() {
        let config = Config::load_from_str(
            r#"
token = "abc"
base_url = "http://localhost:8080/api"
auth_header = "X-Api-Key"
auth_scheme = ""
timeout_secs = 30
log_level = "debug"
log_file = "./logs/vprikol.log"
"#,
        )
        .expect("failed to parse config");
        assert!(config.timeout() == Some(Duration::from_secs(30)));
        assert!(config.log_level() == LevelFilter::DEBUG);
        assert!(config.log_file.as_deref() == Some(Utf8Path::new("./logs/vprikol.log")));
        assert!(config.validate().is_empty());
        config.build_client().expect("failed to build client");
    }

    #[test]
    fn missing_token() {
        assert!(Config::load_from_str("base_url = \"https://example.com\"").is_err());
    }

    #[test]
    fn validation() {
        let config = Config::load_from_str(
            r#"
token = " "
base_url = "ftp://example.com"
timeout_secs = 0
log_level = "loud"
prefix = "p!"
"#,
        )
        .expect("failed to parse config");
        let messages = config.validate();

        let errors: Vec<_> = messages
            .iter()
            .filter(|message| message.severity() == Severity::Error)
            .collect();
        assert!(errors.len() == 3);
        assert!(matches!(errors[0].error(), ValidationError::EmptyToken));
        assert!(matches!(errors[1].error(), ValidationError::InvalidBaseUrl(_)));
        assert!(matches!(errors[2].error(), ValidationError::ZeroTimeout));

        let warnings: Vec<_> = messages
            .iter()
            .filter(|message| message.severity() == Severity::Warn)
            .map(|message| message.error().to_string())
            .collect();
        assert!(warnings == ["Invalid Log Level `loud`, using `info`", "unknown key `prefix`"]);
        assert!(config.log_level() == LevelFilter::INFO);
    }
}
