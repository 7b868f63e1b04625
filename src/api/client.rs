//! HTTP client for the care-platform backend.
//!
//! [`PatientBackend`] is the seam the controller depends on; [`ApiClient`]
//! implements it over reqwest, and [`MockBackend`] implements it in memory
//! for tests. Fetches are unauthenticated at this layer (the platform gateway
//! handles session cookies); the patient update carries an explicit bearer
//! token obtained from a [`TokenProvider`] just before the call.

use std::sync::Mutex;

use crate::api::error::{server_error, transport_error, ApiError};
use crate::config;
use crate::models::{
    DeviceLanguage, FacilityDevice, InsuranceRecord, PatientUpdate, Physician,
    RemotePatientRecord,
};

// ═══════════════════════════════════════════════════════════
// Seams
// ═══════════════════════════════════════════════════════════

/// Source of the short-lived bearer token attached to patient updates.
/// Implemented outside this crate by the platform's auth integration.
pub trait TokenProvider: Send + Sync {
    fn bearer_token(&self) -> Result<String, ApiError>;
}

/// A fixed token, for tests and local development.
pub struct StaticTokenProvider(pub String);

impl TokenProvider for StaticTokenProvider {
    fn bearer_token(&self) -> Result<String, ApiError> {
        Ok(self.0.clone())
    }
}

/// The backend operations the patient form needs.
#[allow(async_fn_in_trait)]
pub trait PatientBackend {
    async fn get_patient_data(
        &self,
        facility_id: &str,
        patient_id: &str,
    ) -> Result<RemotePatientRecord, ApiError>;

    /// `None` when the patient has no insurance record on file.
    async fn get_patient_insurance_info(
        &self,
        patient_id: &str,
    ) -> Result<Option<InsuranceRecord>, ApiError>;

    async fn get_available_devices(
        &self,
        facility_id: &str,
    ) -> Result<Vec<FacilityDevice>, ApiError>;

    async fn get_physicians_by_account_id(
        &self,
        account_id: &str,
    ) -> Result<Vec<Physician>, ApiError>;

    async fn get_device_languages(&self) -> Result<Vec<DeviceLanguage>, ApiError>;

    async fn update_patient(
        &self,
        patient_id: &str,
        body: &PatientUpdate,
        token: &str,
    ) -> Result<(), ApiError>;
}

// ═══════════════════════════════════════════════════════════
// ApiClient
// ═══════════════════════════════════════════════════════════

/// reqwest-backed [`PatientBackend`].
///
/// No request timeout is configured: in-flight requests are not cancellable
/// and a stalled request keeps the host's loading indicator active.
pub struct ApiClient {
    base_url: String,
    client: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Client pointed at `CAREFORM_API_URL` (or the local dev default).
    pub fn from_env() -> Self {
        Self::new(&config::api_base_url())
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<T, ApiError> {
        let url = format!("{}{path}", self.base_url);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| transport_error(&self.base_url, e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(server_error(status.as_u16(), &body));
        }

        response
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}

impl PatientBackend for ApiClient {
    async fn get_patient_data(
        &self,
        facility_id: &str,
        patient_id: &str,
    ) -> Result<RemotePatientRecord, ApiError> {
        self.get_json(&format!("/facility/{facility_id}/patient/{patient_id}"))
            .await
    }

    async fn get_patient_insurance_info(
        &self,
        patient_id: &str,
    ) -> Result<Option<InsuranceRecord>, ApiError> {
        match self
            .get_json(&format!("/patient/{patient_id}/insurance"))
            .await
        {
            Ok(record) => Ok(Some(record)),
            // No record on file is an expected state, not a failure.
            Err(ApiError::Server { status: 404, .. }) => Ok(None),
            Err(err) => Err(err),
        }
    }

    async fn get_available_devices(
        &self,
        facility_id: &str,
    ) -> Result<Vec<FacilityDevice>, ApiError> {
        self.get_json(&format!("/facility/{facility_id}/devices/available"))
            .await
    }

    async fn get_physicians_by_account_id(
        &self,
        account_id: &str,
    ) -> Result<Vec<Physician>, ApiError> {
        self.get_json(&format!("/account/{account_id}/physicians"))
            .await
    }

    async fn get_device_languages(&self) -> Result<Vec<DeviceLanguage>, ApiError> {
        self.get_json("/globals/device-languages").await
    }

    async fn update_patient(
        &self,
        patient_id: &str,
        body: &PatientUpdate,
        token: &str,
    ) -> Result<(), ApiError> {
        let url = format!("{}/patient/{patient_id}", self.base_url);
        let response = self
            .client
            .put(&url)
            .bearer_auth(token)
            .json(body)
            .send()
            .await
            .map_err(|e| transport_error(&self.base_url, e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(server_error(status.as_u16(), &body));
        }
        Ok(())
    }
}

// ═══════════════════════════════════════════════════════════
// MockBackend — in-memory backend for tests
// ═══════════════════════════════════════════════════════════

/// In-memory [`PatientBackend`] with canned responses. Updates are recorded
/// for assertion; `fail_update` injects a server failure.
#[derive(Default)]
pub struct MockBackend {
    pub patient: RemotePatientRecord,
    pub insurance: Option<InsuranceRecord>,
    pub devices: Vec<FacilityDevice>,
    pub physicians: Vec<Physician>,
    pub languages: Vec<DeviceLanguage>,
    /// `(status, responseMessage)` returned by `update_patient` when set.
    pub fail_update: Option<(u16, Option<String>)>,
    pub updates: Mutex<Vec<(String, PatientUpdate, String)>>,
}

impl MockBackend {
    pub fn with_patient(patient: RemotePatientRecord) -> Self {
        Self {
            patient,
            ..Default::default()
        }
    }

    /// Bodies of all recorded updates, in call order.
    pub fn recorded_updates(&self) -> Vec<PatientUpdate> {
        self.updates
            .lock()
            .expect("mock lock")
            .iter()
            .map(|(_, body, _)| body.clone())
            .collect()
    }
}

impl PatientBackend for MockBackend {
    async fn get_patient_data(
        &self,
        _facility_id: &str,
        _patient_id: &str,
    ) -> Result<RemotePatientRecord, ApiError> {
        Ok(self.patient.clone())
    }

    async fn get_patient_insurance_info(
        &self,
        _patient_id: &str,
    ) -> Result<Option<InsuranceRecord>, ApiError> {
        Ok(self.insurance.clone())
    }

    async fn get_available_devices(
        &self,
        _facility_id: &str,
    ) -> Result<Vec<FacilityDevice>, ApiError> {
        Ok(self.devices.clone())
    }

    async fn get_physicians_by_account_id(
        &self,
        _account_id: &str,
    ) -> Result<Vec<Physician>, ApiError> {
        Ok(self.physicians.clone())
    }

    async fn get_device_languages(&self) -> Result<Vec<DeviceLanguage>, ApiError> {
        Ok(self.languages.clone())
    }

    async fn update_patient(
        &self,
        patient_id: &str,
        body: &PatientUpdate,
        token: &str,
    ) -> Result<(), ApiError> {
        if let Some((status, message)) = &self.fail_update {
            return Err(ApiError::Server {
                status: *status,
                message: message.clone(),
            });
        }
        self.updates
            .lock()
            .expect("mock lock")
            .push((patient_id.to_string(), body.clone(), token.to_string()));
        Ok(())
    }
}
