//! Form-local types: the flat editable record the UI binds to, the form
//! state container, and the select-list item shape shared by the device,
//! language, and physician dropdowns.

use serde::{Deserialize, Serialize};

use crate::models::Physician;

/// One entry of a select/autocomplete list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectItem {
    pub display_name: String,
    /// The value submitted when this entry is chosen.
    pub data: String,
    /// Stable render key, unique within one list.
    pub key: String,
}

/// Flat, editable projection of a patient record. Every field is a string
/// bound directly to a form input; defaults are applied by the normalizer,
/// so an empty record means "nothing loaded yet", not "patient with no data".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EditablePatientRecord {
    pub first_name: String,
    pub last_name: String,
    pub middle_name: String,
    pub address1: String,
    pub address2: String,
    pub city: String,
    pub country: String,
    pub state: String,
    pub zip: String,
    /// Display form: no leading `+`, punctuation preserved.
    pub phone_number: String,
    /// Formatted date string, `""` when unknown.
    pub date_of_birth: String,
    pub gender: String,
    pub emergency_first_name: String,
    pub emergency_last_name: String,
    pub emergency_phone: String,
    pub emergency_relation: String,
    pub device_language: String,
    pub is_tcm: bool,
    pub subscriber: String,
    pub group_number: String,
    pub policy_number: String,
    pub primary_physician_id: String,
    /// Medical record number from the facility's EHR system.
    pub secondary_id: String,
    pub device_id: String,
    pub email: String,
    pub plan_of_care: String,
    pub diagnosis: String,
    pub weight: String,
    pub height_foot: String,
    pub height_inches: String,
    /// Carried through for the device-field lock; not edited directly.
    pub patient_group_id: Option<String>,
    /// Carried through for the post-submit patient-page route.
    pub facility_id: Option<String>,
}

/// Editable free-text fields, enumerated once so hosts can route keystrokes
/// without stringly-typed field access.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatientTextField {
    FirstName,
    LastName,
    MiddleName,
    Address1,
    Address2,
    City,
    Country,
    State,
    Zip,
    PhoneNumber,
    DateOfBirth,
    Gender,
    EmergencyFirstName,
    EmergencyLastName,
    EmergencyPhone,
    EmergencyRelation,
    DeviceLanguage,
    Subscriber,
    GroupNumber,
    PolicyNumber,
    PrimaryPhysicianId,
    SecondaryId,
    DeviceId,
    Email,
    PlanOfCare,
    Diagnosis,
    Weight,
    HeightFoot,
    HeightInches,
}

impl EditablePatientRecord {
    /// Return a copy with one text field replaced. Callers dispatch the result
    /// as a full-record update — the reducer never merges partially.
    pub fn with_field(&self, field: PatientTextField, value: &str) -> Self {
        let mut next = self.clone();
        let slot = match field {
            PatientTextField::FirstName => &mut next.first_name,
            PatientTextField::LastName => &mut next.last_name,
            PatientTextField::MiddleName => &mut next.middle_name,
            PatientTextField::Address1 => &mut next.address1,
            PatientTextField::Address2 => &mut next.address2,
            PatientTextField::City => &mut next.city,
            PatientTextField::Country => &mut next.country,
            PatientTextField::State => &mut next.state,
            PatientTextField::Zip => &mut next.zip,
            PatientTextField::PhoneNumber => &mut next.phone_number,
            PatientTextField::DateOfBirth => &mut next.date_of_birth,
            PatientTextField::Gender => &mut next.gender,
            PatientTextField::EmergencyFirstName => &mut next.emergency_first_name,
            PatientTextField::EmergencyLastName => &mut next.emergency_last_name,
            PatientTextField::EmergencyPhone => &mut next.emergency_phone,
            PatientTextField::EmergencyRelation => &mut next.emergency_relation,
            PatientTextField::DeviceLanguage => &mut next.device_language,
            PatientTextField::Subscriber => &mut next.subscriber,
            PatientTextField::GroupNumber => &mut next.group_number,
            PatientTextField::PolicyNumber => &mut next.policy_number,
            PatientTextField::PrimaryPhysicianId => &mut next.primary_physician_id,
            PatientTextField::SecondaryId => &mut next.secondary_id,
            PatientTextField::DeviceId => &mut next.device_id,
            PatientTextField::Email => &mut next.email,
            PatientTextField::PlanOfCare => &mut next.plan_of_care,
            PatientTextField::Diagnosis => &mut next.diagnosis,
            PatientTextField::Weight => &mut next.weight,
            PatientTextField::HeightFoot => &mut next.height_foot,
            PatientTextField::HeightInches => &mut next.height_inches,
        };
        *slot = value.to_string();
        next
    }

    /// Copy with the TCM flag replaced.
    pub fn with_tcm(&self, is_tcm: bool) -> Self {
        let mut next = self.clone();
        next.is_tcm = is_tcm;
        next
    }

    /// "First Last" used in success messages.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Everything the form tracks between mount and submit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    pub patient_data: EditablePatientRecord,
    pub physician_data_list: Vec<Physician>,
    pub is_loading: bool,
    pub prev_primary_physician_id: String,
    pub available_devices_list: Vec<SelectItem>,
    pub language_select_items: Vec<SelectItem>,
    pub previous_device_id: Option<String>,
    pub patient_account_id: Option<String>,
}

/// Read-only context about the current viewer, passed in explicitly instead
/// of read from ambient session state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewerContext {
    /// Facilities the viewer may see. Empty disables facility filtering.
    pub facilities: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_field_replaces_only_that_field() {
        let record = EditablePatientRecord {
            first_name: "Ada".into(),
            city: "Portland".into(),
            ..Default::default()
        };
        let edited = record.with_field(PatientTextField::City, "Salem");
        assert_eq!(edited.city, "Salem");
        assert_eq!(edited.first_name, "Ada");
        // source record untouched
        assert_eq!(record.city, "Portland");
    }

    #[test]
    fn with_tcm_toggles_flag() {
        let record = EditablePatientRecord::default();
        assert!(!record.is_tcm);
        assert!(record.with_tcm(true).is_tcm);
    }

    #[test]
    fn display_name_joins_first_and_last() {
        let record = EditablePatientRecord {
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            ..Default::default()
        };
        assert_eq!(record.display_name(), "Ada Lovelace");
    }

    #[test]
    fn default_state_is_empty_and_idle() {
        let state = FormState::default();
        assert!(!state.is_loading);
        assert!(state.physician_data_list.is_empty());
        assert!(state.previous_device_id.is_none());
        assert!(state.patient_account_id.is_none());
        assert_eq!(state.prev_primary_physician_id, "");
    }
}
