//! Portfolio generator: fixed totals, position order and jitter ranges.

use algotrader_api::market::round2;
use algotrader_api::portfolio::{portfolio, TOTAL_PNL, TOTAL_PNL_PERCENT, TOTAL_VALUE};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn fixed_totals_are_constant() {
    let p = portfolio(&mut StdRng::seed_from_u64(3));
    assert_eq!(p.total_value, TOTAL_VALUE);
    assert_eq!(p.total_pnl, TOTAL_PNL);
    assert_eq!(p.total_pnl_percent, TOTAL_PNL_PERCENT);
    assert_eq!(TOTAL_VALUE, 275000.75);
}

#[test]
fn three_positions_in_fixed_order() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..50 {
        let p = portfolio(&mut rng);
        let symbols: Vec<&str> = p.positions.iter().map(|pos| pos.symbol.as_str()).collect();
        assert_eq!(symbols, ["NIFTY 19500 CE", "NIFTY 19500 PE", "SENSEX 65000 CE"]);
        let quantities: Vec<i64> = p.positions.iter().map(|pos| pos.quantity).collect();
        assert_eq!(quantities, [50, 50, 25]);
    }
}

#[test]
fn jitter_stays_within_ranges() {
    let mut rng = StdRng::seed_from_u64(5);
    let bands = [(125.50, 20.0, 1000.0, 10.0), (118.25, 15.0, 800.0, 8.0), (200.0, 30.0, 1500.0, 15.0)];
    for _ in 0..300 {
        let p = portfolio(&mut rng);
        assert!(p.day_pnl >= -5000.0 && p.day_pnl < 5000.0);
        assert!(p.day_pnl_percent >= -2.0 && p.day_pnl_percent < 2.0);
        for (pos, (avg, ltp_spread, pnl_spread, pct_spread)) in p.positions.iter().zip(bands) {
            assert_eq!(pos.avg_price, avg);
            assert!((pos.ltp - avg).abs() <= ltp_spread + 0.01);
            assert_eq!(pos.ltp, round2(pos.ltp));
            assert!(pos.pnl.abs() <= pnl_spread);
            assert!(pos.pnl_percent.abs() <= pct_spread);
        }
    }
}
