use std::env;

/// Application-level constants
pub const APP_NAME: &str = "CareForm";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Device-field value meaning "this patient has no monitoring device".
/// Submitted to the backend as JSON `null`.
pub const NO_DEVICE_SENTINEL: &str = "no device";

/// Token standing in for a null device ID in patient-page route queries.
pub const NO_DEVICE_ROUTE_TOKEN: &str = "no-device-id";

/// Defaults applied when the remote record omits a field.
pub const DEFAULT_GENDER: &str = "male";
pub const DEFAULT_DEVICE_LANGUAGE: &str = "en";

/// Display format for date of birth (en-US short date).
pub const DATE_OF_BIRTH_FORMAT: &str = "%m/%d/%Y";

/// Environment variable overriding the backend base URL.
pub const API_URL_ENV: &str = "CAREFORM_API_URL";

/// Base URL of the care-platform backend API.
/// `CAREFORM_API_URL` wins over the local development default.
pub fn api_base_url() -> String {
    env::var(API_URL_ENV).unwrap_or_else(|_| "http://localhost:8080/api/v2".to_string())
}

/// Default tracing filter when RUST_LOG is unset.
pub fn default_log_filter() -> String {
    format!("{}=info", env!("CARGO_PKG_NAME"))
}
