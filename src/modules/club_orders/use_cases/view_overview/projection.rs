use crate::modules::club_orders::core::aggregate::Aggregate;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct OverviewRow {
    pub payment: String,
    pub item: String,
    pub size: String,
    pub color: String,
    pub buyer: String,
    pub qty: u64,
}

/// One row per aggregate leaf, ordered by (payment, item, size, color, buyer).
///
/// The aggregate's ordered maps already yield keys in that order at every
/// level, so a depth-first walk produces the sorted sequence.
pub fn flatten(aggregate: &Aggregate) -> Vec<OverviewRow> {
    let mut rows = Vec::new();
    for (payment, items) in aggregate.payments() {
        for (item, sizes) in items {
            for (size, colors) in sizes {
                for (color, buyers) in colors {
                    for (buyer, qty) in buyers {
                        rows.push(OverviewRow {
                            payment: payment.clone(),
                            item: item.clone(),
                            size: size.clone(),
                            color: color.clone(),
                            buyer: buyer.clone(),
                            qty: *qty,
                        });
                    }
                }
            }
        }
    }
    rows
}

pub fn total_quantity(rows: &[OverviewRow]) -> u64 {
    rows.iter().map(|row| row.qty).sum()
}
