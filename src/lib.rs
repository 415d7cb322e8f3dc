//! Volley - One-shot HTTP/1.x server
//!
//! Core library for the request-response engine and the static content store.

pub mod config;
pub mod http;
pub mod pages;
pub mod server;
pub mod store;
