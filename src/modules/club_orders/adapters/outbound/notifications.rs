use std::sync::Arc;

use crate::modules::club_orders::core::order::Order;
use crate::modules::club_orders::core::ports::OrderNotifier;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DispatchOutcome {
    pub delivered: usize,
    pub failed: usize,
}

/// Fire every notifier once for an accepted order. Failures are logged and
/// counted; they never reach the caller as errors.
pub async fn dispatch_notifications(
    notifiers: &[Arc<dyn OrderNotifier>],
    order: &Order,
) -> DispatchOutcome {
    let mut outcome = DispatchOutcome::default();
    for notifier in notifiers {
        match notifier.notify(order).await {
            Ok(()) => {
                outcome.delivered += 1;
                tracing::debug!(channel = notifier.channel(), order_id = %order.id, "notification sent");
            }
            Err(err) => {
                outcome.failed += 1;
                tracing::error!(
                    channel = notifier.channel(),
                    order_id = %order.id,
                    error = %err,
                    "notification failed"
                );
            }
        }
    }
    outcome
}

#[cfg(test)]
mod dispatch_notifications_tests {
    use super::*;
    use crate::modules::club_orders::adapters::outbound::in_memory_notifier::InMemoryNotifier;
    use crate::tests::fixtures::orders::{OrderBuilder, polo_shirt};
    use rstest::rstest;

    #[rstest]
    #[tokio::test]
    async fn it_should_notify_every_channel_once() {
        let first = Arc::new(InMemoryNotifier::new());
        let second = Arc::new(InMemoryNotifier::new());
        let notifiers = vec![
            first.clone() as Arc<dyn OrderNotifier>,
            second.clone() as Arc<dyn OrderNotifier>,
        ];
        let order = OrderBuilder::new().article(polo_shirt(1)).build();

        let outcome = dispatch_notifications(&notifiers, &order).await;

        assert_eq!(outcome, DispatchOutcome { delivered: 2, failed: 0 });
        assert_eq!(*first.notified.lock().await, vec![order.id.clone()]);
        assert_eq!(*second.notified.lock().await, vec![order.id]);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_keep_going_after_a_failing_channel() {
        let mut offline = InMemoryNotifier::new();
        offline.toggle_offline();
        let online = Arc::new(InMemoryNotifier::new());
        let notifiers = vec![
            Arc::new(offline) as Arc<dyn OrderNotifier>,
            online.clone() as Arc<dyn OrderNotifier>,
        ];
        let order = OrderBuilder::new().article(polo_shirt(1)).build();

        let outcome = dispatch_notifications(&notifiers, &order).await;

        assert_eq!(outcome, DispatchOutcome { delivered: 1, failed: 1 });
        assert_eq!(online.notified.lock().await.len(), 1);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_do_nothing_without_notifiers() {
        let order = OrderBuilder::new().article(polo_shirt(1)).build();
        let outcome = dispatch_notifications(&[], &order).await;
        assert_eq!(outcome, DispatchOutcome::default());
    }
}
