use std::net::IpAddr;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::modules::club_orders::core::ports::CaptchaVerifier;

pub const RECAPTCHA_VERIFY_URL: &str = "https://www.google.com/recaptcha/api/siteverify";
const RECAPTCHA_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Deserialize)]
struct SiteVerifyResponse {
    success: bool,
    #[serde(default, rename = "error-codes")]
    error_codes: Vec<String>,
}

/// Google reCAPTCHA server-side check. Any transport or decoding failure
/// counts as a failed check.
pub struct RecaptchaVerifier {
    client: Client,
    secret: String,
}

impl RecaptchaVerifier {
    pub fn new(secret: impl Into<String>) -> anyhow::Result<Self> {
        let client = Client::builder().timeout(RECAPTCHA_TIMEOUT).build()?;
        Ok(Self {
            client,
            secret: secret.into(),
        })
    }
}

#[async_trait]
impl CaptchaVerifier for RecaptchaVerifier {
    async fn verify(&self, token: Option<&str>, remote_ip: Option<IpAddr>) -> bool {
        let Some(token) = token.filter(|token| !token.is_empty()) else {
            tracing::debug!("captcha token missing");
            return false;
        };

        let mut form = vec![
            ("secret", self.secret.clone()),
            ("response", token.to_string()),
        ];
        if let Some(ip) = remote_ip {
            form.push(("remoteip", ip.to_string()));
        }

        let response = match self
            .client
            .post(RECAPTCHA_VERIFY_URL)
            .form(&form)
            .send()
            .await
        {
            Ok(response) => response,
            Err(err) => {
                tracing::warn!(error = %err, "captcha verification request failed");
                return false;
            }
        };

        match response.json::<SiteVerifyResponse>().await {
            Ok(body) => {
                if !body.success {
                    tracing::info!(error_codes = ?body.error_codes, "captcha rejected");
                }
                body.success
            }
            Err(err) => {
                tracing::warn!(error = %err, "captcha verification response unreadable");
                false
            }
        }
    }
}
