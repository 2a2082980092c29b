// In memory implementation of the AggregateStore port.
//
// Purpose
// - Exercise the order handlers without touching the filesystem.
//
// Responsibilities
// - Keep one aggregate per batch in a map.
// - Simulate an unavailable backend and slow saves.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::modules::club_orders::core::aggregate::Aggregate;
use crate::modules::club_orders::core::ports::{AggregateStore, AggregateStoreError};

#[derive(Default)]
pub struct InMemoryAggregateStore {
    batches: RwLock<HashMap<String, Aggregate>>,
    delay_save_ms: AtomicU64,
    is_offline: bool,
}

impl InMemoryAggregateStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    pub fn set_delay_save_ms(&self, delay_ms: u64) {
        self.delay_save_ms.store(delay_ms, Ordering::Relaxed);
    }

    pub async fn saved_batches(&self) -> usize {
        self.batches.read().await.len()
    }
}

#[async_trait]
impl AggregateStore for InMemoryAggregateStore {
    async fn load(&self, batch: &str) -> Result<Aggregate, AggregateStoreError> {
        if self.is_offline {
            return Err(AggregateStoreError::Backend("Aggregate store offline".into()));
        }
        Ok(self
            .batches
            .read()
            .await
            .get(batch)
            .cloned()
            .unwrap_or_default())
    }

    async fn save(&self, batch: &str, aggregate: &Aggregate) -> Result<(), AggregateStoreError> {
        if self.is_offline {
            return Err(AggregateStoreError::Backend("Aggregate store offline".into()));
        }
        let delay_ms = self.delay_save_ms.load(Ordering::Relaxed);
        if delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(delay_ms)).await;
        }
        self.batches
            .write()
            .await
            .insert(batch.to_string(), aggregate.clone());
        Ok(())
    }
}
