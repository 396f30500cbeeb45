pub mod envelope;
pub mod market;
pub mod order;
pub mod position;
pub mod strategy;
