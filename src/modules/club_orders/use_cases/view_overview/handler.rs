use std::sync::Arc;

use crate::modules::club_orders::core::ports::{AggregateStore, AggregateStoreError};
use crate::modules::club_orders::use_cases::view_overview::projection::{OverviewRow, flatten};

/// Read side of a batch: load the tally and flatten it for display.
pub struct OverviewHandler<TStore>
where
    TStore: AggregateStore + ?Sized,
{
    batch: String,
    store: Arc<TStore>,
}

impl<TStore> OverviewHandler<TStore>
where
    TStore: AggregateStore + ?Sized,
{
    pub fn new(batch: impl Into<String>, store: Arc<TStore>) -> Self {
        Self {
            batch: batch.into(),
            store,
        }
    }

    pub async fn handle(&self) -> Result<Vec<OverviewRow>, AggregateStoreError> {
        let aggregate = self.store.load(&self.batch).await?;
        Ok(flatten(&aggregate))
    }
}
