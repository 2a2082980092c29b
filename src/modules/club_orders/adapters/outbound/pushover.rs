use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::modules::club_orders::core::order::Order;
use crate::modules::club_orders::core::ports::OrderNotifier;

pub const PUSHOVER_MESSAGES_URL: &str = "https://api.pushover.net/1/messages.json";
const PUSHOVER_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PushoverSettings {
    pub token: String,
    pub user_key: String,
    pub device: Option<String>,
    pub verify_ssl: bool,
}

/// Pushes a short "new order" message naming the buyer.
pub struct PushoverNotifier {
    client: Client,
    settings: PushoverSettings,
}

impl PushoverNotifier {
    pub fn new(settings: PushoverSettings) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(PUSHOVER_TIMEOUT)
            .danger_accept_invalid_certs(!settings.verify_ssl)
            .build()?;
        Ok(Self { client, settings })
    }

    fn message_form(&self, buyer: &str) -> Vec<(&'static str, String)> {
        let mut form = vec![
            ("token", self.settings.token.clone()),
            ("user", self.settings.user_key.clone()),
            ("title", "Neue Vereinsbestellung".to_string()),
            ("message", format!("{buyer} hat soeben eine Bestellung abgegeben.")),
            ("priority", "0".to_string()),
        ];
        if let Some(device) = &self.settings.device {
            form.push(("device", device.clone()));
        }
        form
    }
}

#[async_trait]
impl OrderNotifier for PushoverNotifier {
    fn channel(&self) -> &'static str {
        "push"
    }

    async fn notify(&self, order: &Order) -> anyhow::Result<()> {
        let response = self
            .client
            .post(PUSHOVER_MESSAGES_URL)
            .form(&self.message_form(&order.buyer))
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("pushover responded with {status}: {body}");
        }
        Ok(())
    }
}
