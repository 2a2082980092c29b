// YAML file implementation of the AggregateStore port.
//
// One file per batch: `<orders_dir>/<batch>.yml`. Saves replace the file in
// full through yaml_file::write_atomic.

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::modules::club_orders::core::aggregate::Aggregate;
use crate::modules::club_orders::core::ports::{AggregateStore, AggregateStoreError};
use crate::shared::infrastructure::yaml_file::{self, YamlFileError};

#[derive(Debug, Clone)]
pub struct YamlAggregateStore {
    orders_dir: PathBuf,
}

impl YamlAggregateStore {
    pub fn new(orders_dir: impl Into<PathBuf>) -> Self {
        Self {
            orders_dir: orders_dir.into(),
        }
    }

    pub fn orders_dir(&self) -> &Path {
        &self.orders_dir
    }

    pub fn batch_path(&self, batch: &str) -> Result<PathBuf, AggregateStoreError> {
        let valid = !batch.is_empty()
            && !batch.starts_with('.')
            && !batch.contains(['/', '\\'])
            && !batch.contains('\0');
        if !valid {
            return Err(AggregateStoreError::InvalidBatch(batch.to_string()));
        }
        Ok(self.orders_dir.join(format!("{batch}.yml")))
    }
}

fn store_error(batch: &str, err: YamlFileError) -> AggregateStoreError {
    match err {
        YamlFileError::Parse { source, .. } => AggregateStoreError::Corrupt {
            batch: batch.to_string(),
            reason: source.to_string(),
        },
        other => AggregateStoreError::Backend(other.to_string()),
    }
}

#[async_trait]
impl AggregateStore for YamlAggregateStore {
    async fn load(&self, batch: &str) -> Result<Aggregate, AggregateStoreError> {
        let path = self.batch_path(batch)?;
        yaml_file::read_or_default(&path)
            .await
            .map_err(|err| store_error(batch, err))
    }

    async fn save(&self, batch: &str, aggregate: &Aggregate) -> Result<(), AggregateStoreError> {
        let path = self.batch_path(batch)?;
        yaml_file::write_atomic(&path, aggregate)
            .await
            .map_err(|err| store_error(batch, err))
    }
}
