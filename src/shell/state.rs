use std::sync::Arc;

use anyhow::Context;

use crate::modules::club_orders::adapters::outbound::pushover::PushoverNotifier;
use crate::modules::club_orders::adapters::outbound::recaptcha::RecaptchaVerifier;
use crate::modules::club_orders::adapters::outbound::smtp_mailer::SmtpMailer;
use crate::modules::club_orders::adapters::outbound::yaml_aggregate_store::YamlAggregateStore;
use crate::modules::club_orders::core::catalog::Catalog;
use crate::modules::club_orders::core::ports::{AggregateStore, CaptchaVerifier, OrderNotifier};
use crate::modules::club_orders::use_cases::place_order::handler::PlaceOrderHandler;
use crate::modules::club_orders::use_cases::view_overview::handler::OverviewHandler;
use crate::shell::config::{Settings, load_app_config, load_catalog};

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub place_order_handler: Arc<PlaceOrderHandler<dyn AggregateStore>>,
    pub overview_handler: Arc<OverviewHandler<dyn AggregateStore>>,
    pub captcha: Option<Arc<dyn CaptchaVerifier>>,
    pub captcha_site_key: Option<String>,
}

impl AppState {
    pub fn new(
        catalog: Catalog,
        store: Arc<dyn AggregateStore>,
        batch: &str,
        notifiers: Vec<Arc<dyn OrderNotifier>>,
    ) -> Self {
        Self {
            catalog: Arc::new(catalog),
            place_order_handler: Arc::new(PlaceOrderHandler::new(batch, store.clone(), notifiers)),
            overview_handler: Arc::new(OverviewHandler::new(batch, store)),
            captcha: None,
            captcha_site_key: None,
        }
    }

    pub fn with_captcha(
        mut self,
        verifier: Arc<dyn CaptchaVerifier>,
        site_key: Option<String>,
    ) -> Self {
        self.captcha = Some(verifier);
        self.captcha_site_key = site_key;
        self
    }

    /// Reads config.yml and items.yml and wires the file store and every
    /// enabled outbound channel.
    pub async fn from_settings(settings: &Settings) -> anyhow::Result<Self> {
        let config = load_app_config(&settings.config_dir)
            .await
            .context("failed to load service configuration")?;
        let catalog = load_catalog(&settings.config_dir)
            .await
            .context("failed to load item catalog")?;
        let resolved = config.resolve(&settings.secrets);

        let mut notifiers: Vec<Arc<dyn OrderNotifier>> = Vec::new();
        if let Some(smtp) = resolved.smtp {
            match SmtpMailer::new(smtp) {
                Ok(mailer) => notifiers.push(Arc::new(mailer)),
                Err(error) => {
                    tracing::warn!(channel = "mail", error = %error, "smtp settings unusable; mail disabled")
                }
            }
        }
        if let Some(pushover) = resolved.pushover {
            match PushoverNotifier::new(pushover) {
                Ok(notifier) => notifiers.push(Arc::new(notifier)),
                Err(error) => {
                    tracing::warn!(channel = "push", error = %error, "pushover client unusable; push disabled")
                }
            }
        }

        let yaml_store = YamlAggregateStore::new(settings.orders_dir.clone());
        yaml_store
            .batch_path(&settings.batch)
            .context("CLUB_ORDERS_BATCH is not a usable batch name")?;
        let store: Arc<dyn AggregateStore> = Arc::new(yaml_store);

        tracing::info!(
            items = catalog.names().count(),
            channels = ?notifiers.iter().map(|n| n.channel()).collect::<Vec<_>>(),
            captcha = resolved.captcha_secret.is_some(),
            batch = %settings.batch,
            orders_dir = %settings.orders_dir.display(),
            "configuration loaded"
        );

        let state = Self::new(catalog, store, &settings.batch, notifiers);
        match resolved.captcha_secret {
            Some(secret) => {
                let verifier: Arc<dyn CaptchaVerifier> = Arc::new(
                    RecaptchaVerifier::new(secret).context("failed to set up recaptcha client")?,
                );
                Ok(state.with_captcha(verifier, resolved.captcha_site_key))
            }
            None => Ok(Self {
                captcha_site_key: resolved.captcha_site_key,
                ..state
            }),
        }
    }
}
