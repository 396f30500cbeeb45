pub mod extract;
pub mod preflight;
pub mod routes;
