use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::modules::club_orders::core::order::Order;
use crate::modules::club_orders::core::ports::OrderNotifier;

/// Records the ids of notified orders instead of delivering anything.
#[derive(Default)]
pub struct InMemoryNotifier {
    pub notified: Mutex<Vec<String>>,
    is_offline: bool,
}

impl InMemoryNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }
}

#[async_trait]
impl OrderNotifier for InMemoryNotifier {
    fn channel(&self) -> &'static str {
        "in-memory"
    }

    async fn notify(&self, order: &Order) -> anyhow::Result<()> {
        if self.is_offline {
            return Err(anyhow::anyhow!("Notifier offline"));
        }
        self.notified.lock().await.push(order.id.clone());
        Ok(())
    }
}
