// Startup configuration.
//
// - Settings: process settings and secret overrides from the environment.
// - AppConfig: service settings from `<config_dir>/config.yml`.
// - Catalog: offered items from `<config_dir>/items.yml`.
//
// Both files are optional and read once. Non-empty secrets from the
// environment win over the values in config.yml.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

use crate::modules::club_orders::adapters::outbound::pushover::PushoverSettings;
use crate::modules::club_orders::adapters::outbound::smtp_mailer::SmtpSettings;
use crate::modules::club_orders::core::catalog::Catalog;
use crate::modules::club_orders::use_cases::place_order::handler::DEFAULT_BATCH;
use crate::shared::infrastructure::yaml_file::{self, YamlFileError};

pub const CONFIG_FILE: &str = "config.yml";
pub const ITEMS_FILE: &str = "items.yml";

const DEFAULT_ADDR: &str = "0.0.0.0:8000";
const DEFAULT_SMTP_PORT: u16 = 587;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SecretOverrides {
    pub smtp_password: Option<String>,
    pub pushover_token: Option<String>,
    pub pushover_user: Option<String>,
    pub recaptcha_secret_key: Option<String>,
    pub recaptcha_site_key: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub addr: SocketAddr,
    pub config_dir: PathBuf,
    pub orders_dir: PathBuf,
    pub batch: String,
    pub secrets: SecretOverrides,
}

impl Settings {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let value = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let addr = value("CLUB_ORDERS_ADDR").unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let addr = addr
            .parse()
            .with_context(|| format!("CLUB_ORDERS_ADDR is not a socket address: {addr}"))?;

        Ok(Self {
            addr,
            config_dir: value("CLUB_ORDERS_CONFIG_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("config")),
            orders_dir: value("CLUB_ORDERS_ORDERS_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("orders")),
            batch: value("CLUB_ORDERS_BATCH").unwrap_or_else(|| DEFAULT_BATCH.to_string()),
            secrets: SecretOverrides {
                smtp_password: value("SMTP_PASSWORD"),
                pushover_token: value("PUSHOVER_TOKEN"),
                pushover_user: value("PUSHOVER_USER"),
                recaptcha_secret_key: value("RECAPTCHA_SECRET_KEY"),
                recaptcha_site_key: value("RECAPTCHA_SITE_KEY"),
            },
        })
    }
}

fn enabled() -> bool {
    true
}

fn default_smtp_port() -> u16 {
    DEFAULT_SMTP_PORT
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SmtpSection {
    #[serde(default = "enabled")]
    pub enabled: bool,
    pub host: Option<String>,
    #[serde(default = "default_smtp_port")]
    pub port: u16,
    pub user: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PushoverSection {
    #[serde(default = "enabled")]
    pub enabled: bool,
    pub token: Option<String>,
    pub user_key: Option<String>,
    pub device: Option<String>,
    #[serde(default = "enabled")]
    pub verify_ssl: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RecaptchaSection {
    #[serde(default = "enabled")]
    pub enabled: bool,
    pub site_key: Option<String>,
    pub secret_key: Option<String>,
}

impl Default for RecaptchaSection {
    fn default() -> Self {
        Self {
            enabled: true,
            site_key: None,
            secret_key: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AppConfig {
    pub admin_email: Option<String>,
    pub smtp: Option<SmtpSection>,
    pub pushover: Option<PushoverSection>,
    #[serde(default)]
    pub recaptcha: RecaptchaSection,
}

/// Channel and CAPTCHA settings after overrides, with disabled or incomplete
/// sections dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub smtp: Option<SmtpSettings>,
    pub pushover: Option<PushoverSettings>,
    pub captcha_secret: Option<String>,
    pub captcha_site_key: Option<String>,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.trim().is_empty())
}

impl AppConfig {
    pub fn resolve(self, secrets: &SecretOverrides) -> ResolvedConfig {
        let smtp = self
            .smtp
            .filter(|section| section.enabled)
            .and_then(|section| {
                let password = secrets
                    .smtp_password
                    .clone()
                    .or_else(|| non_empty(section.password));
                match (
                    non_empty(section.host),
                    non_empty(section.user),
                    password,
                    non_empty(self.admin_email.clone()),
                ) {
                    (Some(host), Some(user), Some(password), Some(admin_email)) => {
                        Some(SmtpSettings {
                            host,
                            port: section.port,
                            user,
                            password,
                            admin_email,
                        })
                    }
                    _ => {
                        tracing::warn!(
                            channel = "mail",
                            "smtp is enabled but host, user, password or admin_email is missing; mail disabled"
                        );
                        None
                    }
                }
            });

        let pushover = self
            .pushover
            .filter(|section| section.enabled)
            .and_then(|section| {
                let token = secrets
                    .pushover_token
                    .clone()
                    .or_else(|| non_empty(section.token));
                let user_key = secrets
                    .pushover_user
                    .clone()
                    .or_else(|| non_empty(section.user_key));
                match (token, user_key) {
                    (Some(token), Some(user_key)) => Some(PushoverSettings {
                        token,
                        user_key,
                        device: non_empty(section.device),
                        verify_ssl: section.verify_ssl,
                    }),
                    _ => {
                        tracing::warn!(
                            channel = "push",
                            "pushover is enabled but token or user_key is missing; push disabled"
                        );
                        None
                    }
                }
            });

        let recaptcha = self.recaptcha;
        let (captcha_secret, captcha_site_key) = if recaptcha.enabled {
            (
                secrets
                    .recaptcha_secret_key
                    .clone()
                    .or_else(|| non_empty(recaptcha.secret_key)),
                secrets
                    .recaptcha_site_key
                    .clone()
                    .or_else(|| non_empty(recaptcha.site_key)),
            )
        } else {
            (None, None)
        };

        ResolvedConfig {
            smtp,
            pushover,
            captcha_secret,
            captcha_site_key,
        }
    }
}

pub async fn load_app_config(config_dir: &Path) -> Result<AppConfig, YamlFileError> {
    yaml_file::read_or_default(&config_dir.join(CONFIG_FILE)).await
}

pub async fn load_catalog(config_dir: &Path) -> Result<Catalog, YamlFileError> {
    yaml_file::read_or_default(&config_dir.join(ITEMS_FILE)).await
}
