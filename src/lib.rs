pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod seed;
pub mod storage;
pub mod validation;

// HTTP surface
pub mod envelope;
pub mod handlers;
pub mod router;
pub mod server;
pub mod state;

// Domain data shapes shared across layers
pub mod domain;
