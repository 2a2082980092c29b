use chrono::{DateTime, Utc};

use crate::modules::club_orders::core::order::LineItem;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceOrder {
    pub order_id: String,
    pub placed_at: DateTime<Utc>,
    pub buyer: String,
    pub articles: Vec<LineItem>,
}
