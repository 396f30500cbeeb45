//! Demo trading API: synthetic market quotes, a mock portfolio, simulated order fills
//! and options strategies behind a JSON envelope.

pub mod api;
pub mod config;
pub mod error;
pub mod market;
pub mod orders;
pub mod portfolio;
pub mod strategy;
pub mod types;
