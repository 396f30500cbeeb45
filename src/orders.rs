//! Order placement: required-field validation, numeric coercion and a simulated fill.

use chrono::Utc;
use rand::Rng;
use serde_json::{Map, Value};

use crate::error::{ApiError, Result};
use crate::types::order::{Order, OrderStatus};

pub const REQUIRED_FIELDS: [&str; 4] = ["symbol", "side", "quantity", "price"];

/// Maximum distance between the requested and the executed price.
pub const MAX_SLIPPAGE: f64 = 0.5;

/// `prefix` followed by five random digits, e.g. `ORD40213`.
pub fn synthetic_id<R: Rng + ?Sized>(rng: &mut R, prefix: &str) -> String {
    format!("{}{}", prefix, rng.gen_range(10_000..=99_999))
}

/// Required keys absent from `body`. Falsy values such as `0` or `""` count as present.
pub fn missing_fields(body: &Map<String, Value>) -> Vec<String> {
    REQUIRED_FIELDS
        .iter()
        .filter(|field| !body.contains_key(**field))
        .map(|field| field.to_string())
        .collect()
}

/// Truncate toward zero, refusing values an `i64` cannot hold.
fn truncate_to_i64(f: f64) -> Option<i64> {
    let t = f.trunc();
    // `i64::MAX as f64` rounds up to 2^63, hence the half-open range.
    (i64::MIN as f64..i64::MAX as f64)
        .contains(&t)
        .then_some(t as i64)
}

pub fn coerce_int(field: &str, value: &Value) -> Result<i64> {
    let parsed = match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().and_then(truncate_to_i64)),
        Value::Bool(b) => Some(i64::from(*b)),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    };
    parsed.ok_or_else(|| ApiError::Unexpected(format!("invalid integer for '{}': {}", field, value)))
}

pub fn coerce_float(field: &str, value: &Value) -> Result<f64> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
    .filter(|f| f.is_finite());
    parsed.ok_or_else(|| ApiError::Unexpected(format!("invalid number for '{}': {}", field, value)))
}

/// Validate and "execute" a single order. Nothing is routed anywhere; the fill price is
/// the requested price plus uniform slippage.
pub fn place_order<R: Rng + ?Sized>(rng: &mut R, body: &Map<String, Value>) -> Result<Order> {
    let missing = missing_fields(body);
    if !missing.is_empty() {
        return Err(ApiError::MissingFields(missing));
    }

    let quantity = coerce_int("quantity", &body["quantity"])?;
    let price = coerce_float("price", &body["price"])?;

    Ok(Order {
        order_id: synthetic_id(rng, "ORD"),
        symbol: body["symbol"].clone(),
        side: body["side"].clone(),
        quantity,
        price,
        status: OrderStatus::Executed,
        executed_price: price + rng.gen_range(-MAX_SLIPPAGE..MAX_SLIPPAGE),
        timestamp: Utc::now(),
    })
}
