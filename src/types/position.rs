use chrono::{DateTime, Utc};
use serde::Serialize;

/// Synthetic option holding. `pnl` and `pnl_percent` are sampled on their own and
/// do not follow from `ltp - avg_price`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Position {
    pub symbol: String,
    pub quantity: i64,
    pub avg_price: f64,
    pub ltp: f64,
    pub pnl: f64,
    pub pnl_percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Portfolio {
    pub total_value: f64,
    pub day_pnl: f64,
    pub day_pnl_percent: f64,
    pub total_pnl: f64,
    pub total_pnl_percent: f64,
    pub positions: Vec<Position>,
    pub timestamp: DateTime<Utc>,
}
