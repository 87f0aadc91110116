use std::time::Duration;

use anyhow::Context;
use secrecy::SecretString;
use serde_aux::field_attributes::deserialize_number_from_string;

use crate::domain::Theme;

#[derive(serde::Deserialize, Clone)]
pub struct Config {
    pub web: WebConfig,
    pub relay: RelayConfig,
    pub ui: UiConfig,
}

#[derive(serde::Deserialize, Clone)]
pub struct WebConfig {
    pub host: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,
    /// 签名flash message cookie的密钥，至少64字节
    pub hmac_secret: SecretString,
}

impl WebConfig {
    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(serde::Deserialize, Clone)]
pub struct RelayConfig {
    pub endpoint: String,
    pub access_key: SecretString,
    /// 未配置时沿用HTTP客户端的默认超时
    #[serde(default)]
    pub timeout_milliseconds: Option<u64>,
}

impl RelayConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_milliseconds.map(Duration::from_millis)
    }
}

#[derive(serde::Deserialize, Clone)]
pub struct UiConfig {
    #[serde(default)]
    pub default_theme: Theme,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub notice_dismiss_milliseconds: u64,
}

#[derive(Debug)]
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
            "local" => Ok(Self::Local),
            "production" => Ok(Self::Production),
            other => Err(format!(
                "`{other}` is not a supported environment, use `local` or `production`."
            )),
        }
    }
}

/// 读取配置
///
/// 依次叠加`configuration/base.yaml`、`configuration/{APP_ENVIRONMENT}.yaml`
/// 以及`APP_`前缀的环境变量，如`APP_RELAY__ACCESS_KEY`
pub fn config() -> anyhow::Result<Config> {
    let base_path = std::env::current_dir().context("failed to determine current directory.")?;
    let config_dir = base_path.join("configuration");

    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .map_err(|e: String| anyhow::anyhow!(e))?;
    let environment_file = format!("{}.yaml", environment.as_str());

    config::Config::builder()
        .add_source(config::File::from(config_dir.join("base.yaml")))
        .add_source(config::File::from(config_dir.join(environment_file)))
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()
        .context("failed to read configuration.")?
        .try_deserialize::<Config>()
        .context("failed to deserialize configuration.")
}
