use crate::modules::club_orders::core::aggregate::{Aggregate, AggregateKey};
use crate::modules::club_orders::core::order::Order;

/// Fold one order into the running tally of its batch.
pub fn evolve(mut aggregate: Aggregate, order: &Order) -> Aggregate {
    for article in &order.articles {
        let key = AggregateKey::for_line_item(&order.buyer, article);
        aggregate.add(&key, u64::from(article.qty));
    }
    aggregate
}
