//! Options strategies. Only the short straddle builds legs; any other type executes
//! as an empty strategy.

use chrono::Utc;
use rand::Rng;
use serde_json::{Map, Number, Value};

use crate::error::{ApiError, Result};
use crate::orders::synthetic_id;
use crate::types::order::{OrderSide, OrderStatus};
use crate::types::strategy::{StrategyExecution, StrategyLeg};

pub const DEFAULT_TYPE: &str = "straddle";
pub const DEFAULT_QUANTITY: i64 = 25;

pub const STRADDLE_CALL: (&str, f64) = ("NIFTY 19500 CE", 125.50);
pub const STRADDLE_PUT: (&str, f64) = ("NIFTY 19500 PE", 118.25);

fn strategy_type(body: &Map<String, Value>) -> Result<String> {
    match body.get("type") {
        None => Ok(DEFAULT_TYPE.to_string()),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(other) => Err(ApiError::Unexpected(format!(
            "strategy type must be a string, got {}",
            other
        ))),
    }
}

fn leg_quantity(body: &Map<String, Value>) -> Result<Number> {
    match body.get("quantity") {
        None => Ok(Number::from(DEFAULT_QUANTITY)),
        Some(Value::Number(n)) => Ok(n.clone()),
        Some(other) => Err(ApiError::Unexpected(format!(
            "strategy quantity must be a number, got {}",
            other
        ))),
    }
}

fn sell_leg<R: Rng + ?Sized>(rng: &mut R, (symbol, price): (&str, f64), quantity: &Number) -> StrategyLeg {
    StrategyLeg {
        order_id: synthetic_id(rng, "ORD"),
        symbol: symbol.to_string(),
        side: OrderSide::Sell,
        quantity: quantity.clone(),
        price,
        status: OrderStatus::Executed,
    }
}

/// Sum of `price * quantity` over all legs.
pub fn total_premium(legs: &[StrategyLeg]) -> f64 {
    legs.iter()
        .map(|leg| leg.price * leg.quantity.as_f64().unwrap_or(0.0))
        .sum()
}

pub fn execute_strategy<R: Rng + ?Sized>(
    rng: &mut R,
    body: &Map<String, Value>,
) -> Result<StrategyExecution> {
    let strategy_type = strategy_type(body)?;
    let strategy_id = synthetic_id(rng, "STR");

    let orders = if strategy_type == DEFAULT_TYPE {
        let quantity = leg_quantity(body)?;
        vec![
            sell_leg(rng, STRADDLE_CALL, &quantity),
            sell_leg(rng, STRADDLE_PUT, &quantity),
        ]
    } else {
        Vec::new()
    };

    Ok(StrategyExecution {
        strategy_id,
        total_premium: total_premium(&orders),
        strategy_type,
        status: OrderStatus::Executed,
        orders,
        timestamp: Utc::now(),
    })
}

/// Upper-case the first letter of every run of letters and lower-case the rest.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_word = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }
    out
}

pub fn success_message(strategy_type: &str) -> String {
    format!("{} strategy executed successfully", title_case(strategy_type))
}
