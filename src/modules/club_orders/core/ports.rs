// Ports the club order use cases need from the outside world.
//
// - AggregateStore: load and save the running tally of a batch.
// - OrderNotifier: one best-effort notification channel (mail, push).
// - CaptchaVerifier: answer whether a submitted CAPTCHA token is valid.
//
// Adapters live in adapters::outbound, including in memory variants for tests.

use std::net::IpAddr;

use async_trait::async_trait;
use thiserror::Error;

use crate::modules::club_orders::core::aggregate::Aggregate;
use crate::modules::club_orders::core::order::Order;

#[derive(Debug, Error)]
pub enum AggregateStoreError {
    #[error("invalid batch name: {0:?}")]
    InvalidBatch(String),

    #[error("corrupt aggregate in batch {batch}: {reason}")]
    Corrupt { batch: String, reason: String },

    #[error("backend error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait AggregateStore: Send + Sync {
    /// Returns an empty aggregate when nothing was saved for `batch` yet.
    async fn load(&self, batch: &str) -> Result<Aggregate, AggregateStoreError>;

    /// Replaces everything stored for `batch`.
    async fn save(&self, batch: &str, aggregate: &Aggregate) -> Result<(), AggregateStoreError>;
}

#[async_trait]
pub trait OrderNotifier: Send + Sync {
    fn channel(&self) -> &'static str;

    async fn notify(&self, order: &Order) -> anyhow::Result<()>;
}

#[async_trait]
pub trait CaptchaVerifier: Send + Sync {
    async fn verify(&self, token: Option<&str>, remote_ip: Option<IpAddr>) -> bool;
}
