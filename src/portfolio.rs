//! Fixed-shape demo portfolio with three jittered option positions.

use chrono::Utc;
use rand::Rng;

use crate::market::round2;
use crate::types::position::{Portfolio, Position};

pub const TOTAL_VALUE: f64 = 275_000.75;
pub const TOTAL_PNL: f64 = 25_000.50;
pub const TOTAL_PNL_PERCENT: f64 = 10.0;

/// Static description of a holding and the ranges its synthetic fields are drawn from.
struct Holding {
    symbol: &'static str,
    quantity: i64,
    avg_price: f64,
    ltp_spread: f64,
    pnl_spread: f64,
    pnl_percent_spread: f64,
}

const HOLDINGS: [Holding; 3] = [
    Holding {
        symbol: "NIFTY 19500 CE",
        quantity: 50,
        avg_price: 125.50,
        ltp_spread: 20.0,
        pnl_spread: 1000.0,
        pnl_percent_spread: 10.0,
    },
    Holding {
        symbol: "NIFTY 19500 PE",
        quantity: 50,
        avg_price: 118.25,
        ltp_spread: 15.0,
        pnl_spread: 800.0,
        pnl_percent_spread: 8.0,
    },
    Holding {
        symbol: "SENSEX 65000 CE",
        quantity: 25,
        avg_price: 200.00,
        ltp_spread: 30.0,
        pnl_spread: 1500.0,
        pnl_percent_spread: 15.0,
    },
];

fn position<R: Rng + ?Sized>(rng: &mut R, holding: &Holding) -> Position {
    Position {
        symbol: holding.symbol.to_string(),
        quantity: holding.quantity,
        avg_price: holding.avg_price,
        ltp: round2(holding.avg_price + rng.gen_range(-holding.ltp_spread..holding.ltp_spread)),
        pnl: rng.gen_range(-holding.pnl_spread..holding.pnl_spread),
        pnl_percent: rng.gen_range(-holding.pnl_percent_spread..holding.pnl_percent_spread),
    }
}

pub fn portfolio<R: Rng + ?Sized>(rng: &mut R) -> Portfolio {
    let day_pnl = rng.gen_range(-5000.0..5000.0);
    let day_pnl_percent = rng.gen_range(-2.0..2.0);
    let positions = HOLDINGS.iter().map(|h| position(rng, h)).collect();

    Portfolio {
        total_value: TOTAL_VALUE,
        day_pnl,
        day_pnl_percent,
        total_pnl: TOTAL_PNL,
        total_pnl_percent: TOTAL_PNL_PERCENT,
        positions,
        timestamp: Utc::now(),
    }
}
