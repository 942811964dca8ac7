//! HTTP client layer — `DovizHttp`, one method per endpoint.

pub mod client;

pub use client::DovizHttp;
