//! HTTP API: server, routing, and request/response mapping for policy inference.

pub mod app;
pub mod config;
