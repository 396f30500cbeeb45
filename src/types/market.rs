use chrono::{DateTime, Utc};
use serde::Serialize;

/// One index level. `change_percent` is always derived from the rounded `change`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Quote {
    pub value: f64,
    pub change: f64,
    pub change_percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarketSnapshot {
    pub sensex: Quote,
    pub nifty: Quote,
    pub timestamp: DateTime<Utc>,
}
