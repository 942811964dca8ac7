//! Network URL constants for the Doviz SDK.

/// Default REST API base URL.
pub const DEFAULT_API_URL: &str = "http://localhost:8080";

/// Path prefix shared by every versioned endpoint.
pub const API_PREFIX: &str = "/api/v1";
