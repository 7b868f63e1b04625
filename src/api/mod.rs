pub mod client;
pub mod error;

pub use client::{ApiClient, MockBackend, PatientBackend, StaticTokenProvider, TokenProvider};
pub use error::ApiError;
