use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

/// Side of a synthesized strategy leg. Client orders echo their `side` verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderSide {
    Sell,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderStatus {
    Executed,
}

/// A placed order. `symbol` and `side` echo whatever JSON the client sent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Order {
    pub order_id: String,
    pub symbol: Value,
    pub side: Value,
    pub quantity: i64,
    pub price: f64,
    pub status: OrderStatus,
    pub executed_price: f64,
    pub timestamp: DateTime<Utc>,
}
