use crate::modules::club_orders::core::order::Order;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("an order needs at least one article")]
    EmptyOrder,

    #[error("buyer name must not be blank")]
    MissingBuyer,

    #[error("quantity for {item} must be positive")]
    ZeroQuantity { item: String },
}

pub enum Decision {
    Accepted { order: Order },
    Rejected { reason: DecideError },
}
