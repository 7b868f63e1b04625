//! CareForm — patient record editing core for the clinical remote-care portal.
//!
//! The crate is the headless half of the patient-edit form: it fetches the
//! patient record and its reference data, flattens the nested wire shapes
//! into a flat editable record, funnels every edit through a pure reducer,
//! validates the handful of submission rules, and reassembles the nested
//! update payload for `PUT /patient/{id}`. Rendering, routing, and toasts
//! stay in the host; this crate hands it typed state, outcomes, and routes.

pub mod api;
pub mod config;
pub mod controller;
pub mod form;
pub mod models;

use tracing_subscriber::EnvFilter;

pub use api::{ApiClient, ApiError, PatientBackend, TokenProvider};
pub use controller::{
    FormError, FormProps, PatientFormController, PostSubmitRoute, SubmitOutcome,
};
pub use form::types::{EditablePatientRecord, FormState, ViewerContext};

/// Install the tracing subscriber for hosts that do not bring their own.
/// `RUST_LOG` wins over the crate default.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);
}
