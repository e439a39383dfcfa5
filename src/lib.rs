// translate-gateway - single-endpoint HTTP translation gateway

pub mod cli;
pub mod config;
pub mod error;
pub mod gateway;
pub mod metrics;
pub mod models;
pub mod provider;
pub mod server;
pub mod utils;
