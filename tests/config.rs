//! Config helpers that do not touch the process environment.

use algotrader_api::config::Config;

#[test]
fn defaults_bind_all_interfaces_on_5000() {
    let config = Config::default();
    assert_eq!(config.bind_addr(), "0.0.0.0:5000");
    assert!(!config.upstox_configured());
}

#[test]
fn upstox_requires_both_credentials() {
    let mut config = Config {
        upstox_api_key: "key".to_string(),
        ..Config::default()
    };
    assert!(!config.upstox_configured());
    config.upstox_api_secret = "secret".to_string();
    assert!(config.upstox_configured());
    config.upstox_api_key.clear();
    assert!(!config.upstox_configured());
}
