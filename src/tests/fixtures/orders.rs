// Shared builders for orders and place-order commands used across unit tests.

use chrono::{DateTime, TimeZone, Utc};

use crate::modules::club_orders::core::order::{LineItem, Order, Payment, Size};
use crate::modules::club_orders::use_cases::place_order::command::PlaceOrder;

pub fn polo_shirt(qty: u32) -> LineItem {
    LineItem {
        item: "Poloshirt".into(),
        qty,
        size: Size::M,
        color: "weiß".into(),
        payment: Payment::SelfPay,
        custom: false,
    }
}

fn fixed_placed_at() -> DateTime<Utc> {
    Utc.timestamp_opt(1_700_000_000, 0).unwrap()
}

pub struct OrderBuilder {
    inner: Order,
}

impl Default for OrderBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl OrderBuilder {
    pub fn new() -> Self {
        Self {
            inner: Order {
                id: "order-fixed-0001".into(),
                timestamp: "2023-11-14T22:13:20Z".into(),
                buyer: "Max".into(),
                articles: Vec::new(),
            },
        }
    }

    pub fn id(mut self, v: impl Into<String>) -> Self {
        self.inner.id = v.into();
        self
    }

    pub fn buyer(mut self, v: impl Into<String>) -> Self {
        self.inner.buyer = v.into();
        self
    }

    pub fn article(mut self, v: LineItem) -> Self {
        self.inner.articles.push(v);
        self
    }

    pub fn build(self) -> Order {
        self.inner
    }
}

pub struct PlaceOrderBuilder {
    inner: PlaceOrder,
}

impl Default for PlaceOrderBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl PlaceOrderBuilder {
    pub fn new() -> Self {
        Self {
            inner: PlaceOrder {
                order_id: "order-fixed-0001".into(),
                placed_at: fixed_placed_at(),
                buyer: "Max".into(),
                articles: Vec::new(),
            },
        }
    }

    pub fn order_id(mut self, v: impl Into<String>) -> Self {
        self.inner.order_id = v.into();
        self
    }

    pub fn buyer(mut self, v: impl Into<String>) -> Self {
        self.inner.buyer = v.into();
        self
    }

    pub fn article(mut self, v: LineItem) -> Self {
        self.inner.articles.push(v);
        self
    }

    pub fn build(self) -> PlaceOrder {
        self.inner
    }
}
