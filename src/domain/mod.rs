//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs` — Rich domain types (validated, presentation-ready)
//! - `wire.rs` — Raw serde structs matching backend responses
//! - `convert.rs` — `TryFrom`/`From` conversions with validation
//! - `state.rs` — State containers with update methods (app-owned)
//! - `client.rs` — Sub-client with HTTP methods

pub mod chart;
pub mod currency;
pub mod rate_history;
pub mod rates;
