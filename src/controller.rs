//! Patient form controller.
//!
//! Owns the [`FormState`] and runs the async flows around the pure core:
//! initial load, device-language fetch, physician roster sync, and submit.
//! All state mutation goes through [`reduce`], one action at a time; the
//! controller is single-threaded and the host drives it from its event loop.
//! In-flight requests are not cancellable and there is no retry policy —
//! failures surface once and the user re-submits.

use crate::api::{ApiError, PatientBackend, TokenProvider};
use crate::config::NO_DEVICE_ROUTE_TOKEN;
use crate::form::normalize::{device_select_items, language_select_items, normalize};
use crate::form::physicians::{physician_select_items, roster_for_facility, visible_to_viewer};
use crate::form::state::{reduce, FormAction};
use crate::form::submit::{assemble, ValidationError};
use crate::form::types::{EditablePatientRecord, FormState, SelectItem, ViewerContext};
use crate::models::PatientUpdate;

/// Shown when the server's error body carries no `responseMessage`.
pub const SUBMIT_FALLBACK_MESSAGE: &str = "Server Error: Failed to update patient information";

/// Path of the patient detail page; submitting from it rewrites its query.
pub const PATIENT_PAGE_PATH: &str = "/patient-page";

/// Identifiers the host passes when mounting the form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormProps {
    pub patient_id: String,
    pub facility_id: String,
}

/// Failures surfaced to the host. Each carries a user-facing message.
#[derive(Debug, thiserror::Error)]
pub enum FormError {
    #[error("Patient ID or facility ID is missing")]
    MissingIdentifiers,
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Failed to load patient data: {0}")]
    Load(#[from] ApiError),
    #[error("{message}")]
    Submit { message: String },
}

/// Where the host should navigate after a successful update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostSubmitRoute {
    /// Primary physician changed — notification routing moved, start over
    /// from the patient list.
    Root,
    /// Stay on the patient page, with its query rewritten to the new state.
    PatientPage {
        facility_id: String,
        patient_id: String,
        device_id: String,
    },
}

impl PostSubmitRoute {
    /// Render as a path for the host's router.
    pub fn to_path(&self) -> String {
        match self {
            PostSubmitRoute::Root => "/".to_string(),
            PostSubmitRoute::PatientPage {
                facility_id,
                patient_id,
                device_id,
            } => format!(
                "{PATIENT_PAGE_PATH}?facilityId={facility_id}&userId={patient_id}&deviceId={device_id}"
            ),
        }
    }
}

/// Result of a successful submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitOutcome {
    /// "First Last", for the host's success toast.
    pub updated_name: String,
    /// `None` when the host should stay where it is.
    pub route: Option<PostSubmitRoute>,
}

// ═══════════════════════════════════════════════════════════
// Controller
// ═══════════════════════════════════════════════════════════

pub struct PatientFormController<B> {
    props: FormProps,
    backend: B,
    state: FormState,
}

impl<B: PatientBackend> PatientFormController<B> {
    pub fn new(backend: B, props: FormProps) -> Self {
        Self {
            props,
            backend,
            state: FormState::default(),
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Apply one action to the form state.
    pub fn dispatch(&mut self, action: FormAction) {
        self.state = reduce(std::mem::take(&mut self.state), action);
    }

    /// Replace the editable record (the host clones, mutates, dispatches).
    pub fn edit_patient(&mut self, record: EditablePatientRecord) {
        self.dispatch(FormAction::SetPatientData(record));
    }

    /// Fetch the device-language options (mount-once fetch).
    pub async fn load_language_options(&mut self) -> Result<(), FormError> {
        let languages = self.backend.get_device_languages().await?;
        self.dispatch(FormAction::SetLanguageSelectItems(language_select_items(
            &languages,
        )));
        Ok(())
    }

    /// Initial load: patient record, insurance, and device inventory, then
    /// populate the form state. The loader is cleared on every exit.
    pub async fn load(&mut self) -> Result<(), FormError> {
        if self.props.patient_id.is_empty() || self.props.facility_id.is_empty() {
            tracing::warn!("Patient ID or facility ID is missing");
            return Err(FormError::MissingIdentifiers);
        }

        self.dispatch(FormAction::SetLoaderOn);
        let result = self.fetch_and_populate().await;
        self.dispatch(FormAction::SetLoaderOff);
        result
    }

    async fn fetch_and_populate(&mut self) -> Result<(), FormError> {
        let patient = self
            .backend
            .get_patient_data(&self.props.facility_id, &self.props.patient_id)
            .await?;
        let insurance = self
            .backend
            .get_patient_insurance_info(&self.props.patient_id)
            .await?;
        let devices = self
            .backend
            .get_available_devices(&self.props.facility_id)
            .await?;

        self.dispatch(FormAction::SetPrevDeviceId(
            patient.device_id.clone().filter(|id| !id.is_empty()),
        ));
        self.dispatch(FormAction::SetPrevPrimaryPhysicianId(
            patient.primary_physician_id.clone().unwrap_or_default(),
        ));
        self.dispatch(FormAction::SetDeviceList(device_select_items(
            &devices,
            patient.device_id.as_deref(),
        )));
        self.dispatch(FormAction::SetPatientData(normalize(
            &patient,
            insurance.as_ref(),
        )));
        self.dispatch(FormAction::SetPatientAccountId(
            patient.account_id.clone().filter(|id| !id.is_empty()),
        ));
        Ok(())
    }

    /// Fetch the physician roster once the account ID is known, narrowed to
    /// the target facility. A no-op until `load` has resolved an account ID.
    pub async fn sync_physician_roster(&mut self) -> Result<(), FormError> {
        let Some(account_id) = self.state.patient_account_id.clone() else {
            return Ok(());
        };
        if self.props.facility_id.is_empty() {
            return Ok(());
        }

        tracing::debug!(account_id = %account_id, "fetching physician roster");
        let roster = self.backend.get_physicians_by_account_id(&account_id).await?;
        let filtered = roster_for_facility(roster, &self.props.facility_id);
        self.dispatch(FormAction::SetPhysicianList(filtered));
        Ok(())
    }

    /// Physician dropdown entries, narrowed to what the viewer may see.
    pub fn physician_options(&self, viewer: &ViewerContext) -> Vec<SelectItem> {
        physician_select_items(&visible_to_viewer(&self.state.physician_data_list, viewer))
    }

    /// The device selector is locked for patients sharing a group device
    /// owned by another patient.
    pub fn device_field_locked(&self) -> bool {
        match &self.state.patient_data.patient_group_id {
            Some(group) if !group.is_empty() => group != &self.props.patient_id,
            _ => false,
        }
    }

    /// Validate, assemble, and submit the update. Validation failures abort
    /// before any network call; the loader is cleared on every exit.
    pub async fn submit(
        &mut self,
        tokens: &dyn TokenProvider,
        current_path: &str,
    ) -> Result<SubmitOutcome, FormError> {
        let update = assemble(
            &self.state.patient_data,
            self.state.previous_device_id.as_deref(),
        )?;

        self.dispatch(FormAction::SetLoaderOn);
        let result = self.send_update(&update, tokens).await;
        self.dispatch(FormAction::SetLoaderOff);
        result?;

        let outcome = SubmitOutcome {
            updated_name: self.state.patient_data.display_name(),
            route: self.post_submit_route(current_path, &update),
        };
        tracing::info!(patient_id = %self.props.patient_id, "patient record updated");
        Ok(outcome)
    }

    async fn send_update(
        &self,
        update: &PatientUpdate,
        tokens: &dyn TokenProvider,
    ) -> Result<(), FormError> {
        let token = tokens.bearer_token().map_err(|err| {
            tracing::error!(error = %err, "bearer token retrieval failed");
            FormError::Submit {
                message: SUBMIT_FALLBACK_MESSAGE.to_string(),
            }
        })?;

        self.backend
            .update_patient(&self.props.patient_id, update, &token)
            .await
            .map_err(|err| {
                tracing::error!(error = %err, patient_id = %self.props.patient_id, "patient update failed");
                FormError::Submit {
                    message: err
                        .server_message()
                        .map(str::to_string)
                        .unwrap_or_else(|| SUBMIT_FALLBACK_MESSAGE.to_string()),
                }
            })
    }

    fn post_submit_route(
        &self,
        current_path: &str,
        update: &PatientUpdate,
    ) -> Option<PostSubmitRoute> {
        if self.state.patient_data.primary_physician_id != self.state.prev_primary_physician_id {
            return Some(PostSubmitRoute::Root);
        }
        if current_path != PATIENT_PAGE_PATH {
            return None;
        }

        // An omitted device field means "unchanged" — the page keeps showing
        // the device the patient already had.
        let device_id = match &update.device_id {
            Some(Some(id)) => id.clone(),
            Some(None) => NO_DEVICE_ROUTE_TOKEN.to_string(),
            None => self
                .state
                .previous_device_id
                .clone()
                .unwrap_or_else(|| NO_DEVICE_ROUTE_TOKEN.to_string()),
        };

        Some(PostSubmitRoute::PatientPage {
            facility_id: self.state.patient_data.facility_id.clone().unwrap_or_default(),
            patient_id: self.props.patient_id.clone(),
            device_id,
        })
    }
}
