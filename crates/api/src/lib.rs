//! HTTP API: one ingestion endpoint in front of the derivation engine.

pub mod app;
pub mod config;
