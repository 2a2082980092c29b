// Pure decision function for placing an order.
//
// Rules: a non-blank buyer, at least one article, every quantity positive.
// Accepted commands become an Order stamped with second precision UTC time.

use chrono::SecondsFormat;

use crate::modules::club_orders::core::order::Order;
use crate::modules::club_orders::use_cases::place_order::command::PlaceOrder;
use crate::modules::club_orders::use_cases::place_order::decision::{DecideError, Decision};

pub fn decide_place_order(command: PlaceOrder) -> Decision {
    let buyer = command.buyer.trim();
    if buyer.is_empty() {
        return Decision::Rejected {
            reason: DecideError::MissingBuyer,
        };
    }
    if command.articles.is_empty() {
        return Decision::Rejected {
            reason: DecideError::EmptyOrder,
        };
    }
    if let Some(article) = command.articles.iter().find(|article| article.qty == 0) {
        return Decision::Rejected {
            reason: DecideError::ZeroQuantity {
                item: article.item.clone(),
            },
        };
    }

    Decision::Accepted {
        order: Order {
            id: command.order_id,
            timestamp: command.placed_at.to_rfc3339_opts(SecondsFormat::Secs, true),
            buyer: buyer.to_string(),
            articles: command.articles,
        },
    }
}
