// Place-order handler orchestrates the write flow.
//
// - Decide on the command; rejected commands never touch the store.
// - Load, fold and save the batch while holding the writer lock.
// - Fire notifications after the save; their failures are only logged.

use std::sync::Arc;

use thiserror::Error;
use tokio::sync::Mutex;

use crate::modules::club_orders::adapters::outbound::notifications::dispatch_notifications;
use crate::modules::club_orders::core::evolve::evolve;
use crate::modules::club_orders::core::order::Order;
use crate::modules::club_orders::core::ports::{AggregateStore, AggregateStoreError, OrderNotifier};
use crate::modules::club_orders::use_cases::place_order::command::PlaceOrder;
use crate::modules::club_orders::use_cases::place_order::decide::decide_place_order;
use crate::modules::club_orders::use_cases::place_order::decision::{DecideError, Decision};

pub const DEFAULT_BATCH: &str = "pending";

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Store(#[from] AggregateStoreError),

    #[error("order rejected: {0}")]
    Domain(#[from] DecideError),
}

pub struct PlaceOrderHandler<TStore>
where
    TStore: AggregateStore + ?Sized,
{
    batch: String,
    store: Arc<TStore>,
    notifiers: Vec<Arc<dyn OrderNotifier>>,
    writer: Mutex<()>,
}

impl<TStore> PlaceOrderHandler<TStore>
where
    TStore: AggregateStore + ?Sized,
{
    pub fn new(
        batch: impl Into<String>,
        store: Arc<TStore>,
        notifiers: Vec<Arc<dyn OrderNotifier>>,
    ) -> Self {
        Self {
            batch: batch.into(),
            store,
            notifiers,
            writer: Mutex::new(()),
        }
    }

    pub fn batch(&self) -> &str {
        &self.batch
    }

    pub fn channels(&self) -> Vec<&'static str> {
        self.notifiers.iter().map(|notifier| notifier.channel()).collect()
    }

    pub async fn handle(&self, command: PlaceOrder) -> Result<Order, ApplicationError> {
        let order = match decide_place_order(command) {
            Decision::Accepted { order } => order,
            Decision::Rejected { reason } => return Err(ApplicationError::Domain(reason)),
        };

        {
            let _writer = self.writer.lock().await;
            let aggregate = self.store.load(&self.batch).await?;
            let aggregate = evolve(aggregate, &order);
            self.store.save(&self.batch, &aggregate).await?;
        }

        tracing::info!(
            order_id = %order.id,
            buyer = %order.buyer,
            batch = %self.batch,
            articles = order.articles.len(),
            quantity = order.total_quantity(),
            "order placed"
        );

        let outcome = dispatch_notifications(&self.notifiers, &order).await;
        if outcome.failed > 0 {
            tracing::warn!(
                order_id = %order.id,
                delivered = outcome.delivered,
                failed = outcome.failed,
                "some notifications were not delivered"
            );
        }
        Ok(order)
    }
}
