//! Synthetic index quotes: a fixed baseline jittered by a uniform delta on every call.

use chrono::Utc;
use rand::Rng;

use crate::types::market::{MarketSnapshot, Quote};

pub const SENSEX_BASE: f64 = 65_000.0;
pub const SENSEX_SPREAD: f64 = 800.0;
pub const NIFTY_BASE: f64 = 19_500.0;
pub const NIFTY_SPREAD: f64 = 200.0;

/// Round half away from zero to two decimals.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Quote around `base` with a delta drawn from `[-spread, spread)`.
pub fn quote<R: Rng + ?Sized>(rng: &mut R, base: f64, spread: f64) -> Quote {
    let delta = rng.gen_range(-spread..spread);
    let change = round2(delta);
    Quote {
        value: round2(base + delta),
        change,
        change_percent: round2(change / base * 100.0),
    }
}

pub fn snapshot<R: Rng + ?Sized>(rng: &mut R) -> MarketSnapshot {
    MarketSnapshot {
        sensex: quote(rng, SENSEX_BASE, SENSEX_SPREAD),
        nifty: quote(rng, NIFTY_BASE, NIFTY_SPREAD),
        timestamp: Utc::now(),
    }
}
