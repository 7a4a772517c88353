use crate::loops_client::LoopsClient;
use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use serde_aux::field_attributes::deserialize_number_from_string;
use std::time::Duration;

const API_KEY_VARIABLE: &str = "LOOPS_API_KEY";

#[derive(Deserialize)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub mailing_list: MailingListSettings,
}

#[derive(Deserialize)]
pub struct ApplicationSettings {
    pub host: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,
}

#[derive(Deserialize)]
pub struct MailingListSettings {
    pub base_url: String,
    pub api_key: Option<Secret<String>>,
    pub timeout_milliseconds: u64,
}

impl MailingListSettings {
    /// Builds the Loops client, refusing to start without an API key.
    pub fn client(&self) -> Result<LoopsClient, ConfigurationError> {
        let api_key = match &self.api_key {
            Some(key) if !key.expose_secret().trim().is_empty() => key.clone(),
            _ => return Err(ConfigurationError::MissingApiKey(API_KEY_VARIABLE)),
        };

        LoopsClient::new(self.base_url.clone(), api_key, self.timeout())
            .map_err(ConfigurationError::HttpClient)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_milliseconds)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigurationError {
    #[error("Failed to determine the current directory")]
    CurrentDir(#[source] std::io::Error),
    #[error("{0}")]
    UnsupportedEnvironment(String),
    #[error("Failed to load configuration")]
    Load(#[from] config::ConfigError),
    #[error("Missing {0} environment variable")]
    MissingApiKey(&'static str),
    #[error("Failed to build the mailing list HTTP client")]
    HttpClient(#[source] reqwest::Error),
}

pub fn get_configuration() -> Result<Settings, ConfigurationError> {
    let config_dir = std::env::current_dir()
        .map(|dir| dir.join("configuration"))
        .map_err(ConfigurationError::CurrentDir)?;

    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .map_err(ConfigurationError::UnsupportedEnvironment)?;

    let env_config = format!("{}.yaml", environment.as_str());

    let settings = config::Config::builder()
        .add_source(config::File::from(config_dir.join("base.yaml")))
        .add_source(config::File::from(config_dir.join(env_config)))
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .set_override_option("mailing_list.api_key", std::env::var(API_KEY_VARIABLE).ok())?
        .build()?;

    Ok(settings.try_deserialize()?)
}

#[derive(Debug, PartialEq)]
pub enum Environment {
    Local,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Production => "production",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Environment::Local),
            "production" => Ok(Environment::Production),
            other => Err(format!(
                "`{other}` is not a supported environment. Use either `local` or `production`."
            )),
        }
    }
}
