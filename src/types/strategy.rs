use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Number;

use crate::types::order::{OrderSide, OrderStatus};

/// One leg of a multi-order strategy. Quantity is kept in the form the client sent it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StrategyLeg {
    pub order_id: String,
    pub symbol: String,
    pub side: OrderSide,
    pub quantity: Number,
    pub price: f64,
    pub status: OrderStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StrategyExecution {
    pub strategy_id: String,
    #[serde(rename = "type")]
    pub strategy_type: String,
    pub status: OrderStatus,
    pub orders: Vec<StrategyLeg>,
    pub total_premium: f64,
    pub timestamp: DateTime<Utc>,
}
