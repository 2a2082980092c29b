use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::modules::club_orders::core::order::LineItem;

pub type BuyerTally = BTreeMap<String, u64>;
pub type ColorLevel = BTreeMap<String, BuyerTally>;
pub type SizeLevel = BTreeMap<String, ColorLevel>;
pub type ItemLevel = BTreeMap<String, SizeLevel>;

/// Running tally of one batch: payment label → item → size → color → buyer →
/// quantity. Ordered maps keep iteration in key order at every level.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Aggregate {
    payments: BTreeMap<String, ItemLevel>,
}

/// Full key path of one aggregate leaf, already resolved to display values.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AggregateKey {
    pub payment: String,
    pub item: String,
    pub size: String,
    pub color: String,
    pub buyer: String,
}

impl AggregateKey {
    pub fn for_line_item(buyer: &str, article: &LineItem) -> Self {
        Self {
            payment: article.payment.label().to_string(),
            item: article.item.clone(),
            size: article.size.as_str().to_string(),
            color: article.color_or_default().to_string(),
            buyer: buyer.to_string(),
        }
    }
}

impl Aggregate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.payments.is_empty()
    }

    pub fn add(&mut self, key: &AggregateKey, qty: u64) {
        let leaf = self
            .payments
            .entry(key.payment.clone())
            .or_default()
            .entry(key.item.clone())
            .or_default()
            .entry(key.size.clone())
            .or_default()
            .entry(key.color.clone())
            .or_default()
            .entry(key.buyer.clone())
            .or_default();
        *leaf = leaf.saturating_add(qty);
    }

    pub fn quantity(&self, key: &AggregateKey) -> Option<u64> {
        self.payments
            .get(&key.payment)?
            .get(&key.item)?
            .get(&key.size)?
            .get(&key.color)?
            .get(&key.buyer)
            .copied()
    }

    pub fn payments(&self) -> &BTreeMap<String, ItemLevel> {
        &self.payments
    }
}
