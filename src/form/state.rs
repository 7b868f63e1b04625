//! Form state transitions. One closed action enum, one pure reducer.
//!
//! Each action replaces exactly one top-level field of [`FormState`]. There
//! is no partial merge for `patient_data`: callers clone the current record,
//! mutate it, and dispatch the whole thing (see
//! [`EditablePatientRecord::with_field`]). Async work happens outside the
//! reducer; only its synchronous result is dispatched.

use crate::form::types::{EditablePatientRecord, FormState, SelectItem};
use crate::models::Physician;

/// Commands the form state machine accepts.
#[derive(Debug, Clone, PartialEq)]
pub enum FormAction {
    /// Replace the whole editable record.
    SetPatientData(EditablePatientRecord),
    SetLoaderOn,
    SetLoaderOff,
    SetPhysicianList(Vec<Physician>),
    SetPrevPrimaryPhysicianId(String),
    SetDeviceList(Vec<SelectItem>),
    SetLanguageSelectItems(Vec<SelectItem>),
    SetPrevDeviceId(Option<String>),
    SetPatientAccountId(Option<String>),
}

/// Apply one action to the state. Pure and synchronous.
pub fn reduce(mut state: FormState, action: FormAction) -> FormState {
    match action {
        FormAction::SetPatientData(patient_data) => state.patient_data = patient_data,
        FormAction::SetLoaderOn => state.is_loading = true,
        FormAction::SetLoaderOff => state.is_loading = false,
        FormAction::SetPhysicianList(list) => state.physician_data_list = list,
        FormAction::SetPrevPrimaryPhysicianId(id) => state.prev_primary_physician_id = id,
        FormAction::SetDeviceList(list) => state.available_devices_list = list,
        FormAction::SetLanguageSelectItems(items) => state.language_select_items = items,
        FormAction::SetPrevDeviceId(id) => state.previous_device_id = id,
        FormAction::SetPatientAccountId(id) => state.patient_account_id = id,
    }
    state
}
