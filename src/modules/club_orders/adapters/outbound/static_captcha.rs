use std::net::IpAddr;

use async_trait::async_trait;

use crate::modules::club_orders::core::ports::CaptchaVerifier;

/// Fixed verdict CAPTCHA check for tests and local development.
pub struct StaticCaptchaVerifier {
    accept: bool,
}

impl StaticCaptchaVerifier {
    pub fn accepting() -> Self {
        Self { accept: true }
    }

    pub fn rejecting() -> Self {
        Self { accept: false }
    }
}

#[async_trait]
impl CaptchaVerifier for StaticCaptchaVerifier {
    async fn verify(&self, _token: Option<&str>, _remote_ip: Option<IpAddr>) -> bool {
        self.accept
    }
}
