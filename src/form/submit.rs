//! Submission Assembler: validates the edited record and reconstructs the
//! nested wire payload. Pure — the network call belongs to the caller.

use crate::config::NO_DEVICE_SENTINEL;
use crate::form::types::EditablePatientRecord;
use crate::form::units::foot_inches_to_cm;
use crate::form::validation::{validate_height_inches, validate_phone_number};
use crate::models::{
    AddressUpdate, EmergencyContactUpdate, InsuranceUpdate, PatientUpdate,
};

/// Pre-submit validation failures. Messages are user-facing; the host shows
/// them as non-blocking warnings and no network call is made.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Height is invalid")]
    InvalidHeight,
    #[error("The phone number is not valid")]
    InvalidPhoneNumber,
    #[error("The emergency contact phone number is not valid")]
    InvalidEmergencyPhone,
}

/// Validate the edited record and assemble the `PUT /patient/{id}` body.
///
/// Rules, in order:
/// - height inches must parse into [0, 11] (non-numeric means "height unset");
/// - a non-empty patient phone must pass the country rule for the patient's
///   country; a non-empty emergency phone must pass the generic rule;
/// - free text is trimmed, phones reduced to digits only;
/// - empty optional fields become `null`, never `""`;
/// - the device key is omitted when unchanged from `previous_device_id`, and
///   the "no device" sentinel maps to `null`.
pub fn assemble(
    patient: &EditablePatientRecord,
    previous_device_id: Option<&str>,
) -> Result<PatientUpdate, ValidationError> {
    if let Ok(inches) = patient.height_inches.trim().parse::<f64>() {
        if !validate_height_inches(inches) {
            return Err(ValidationError::InvalidHeight);
        }
    }

    let phone = patient.phone_number.trim();
    if !phone.is_empty() && !validate_phone_number(&patient.country, phone) {
        return Err(ValidationError::InvalidPhoneNumber);
    }

    let emergency_phone = patient.emergency_phone.trim();
    if !emergency_phone.is_empty() && !validate_phone_number("", emergency_phone) {
        return Err(ValidationError::InvalidEmergencyPhone);
    }

    Ok(PatientUpdate {
        first_name: patient.first_name.trim().to_string(),
        middle_name: patient.middle_name.trim().to_string(),
        last_name: patient.last_name.trim().to_string(),
        date_of_birth: patient.date_of_birth.trim().to_string(),
        gender: patient.gender.clone(),
        phone_number: digits_only(phone),
        email: patient.email.trim().to_string(),
        address: AddressUpdate {
            address1: patient.address1.trim().to_string(),
            address2: patient.address2.trim().to_string(),
            city: patient.city.trim().to_string(),
            state: patient.state.trim().to_string(),
            country: patient.country.trim().to_string(),
            zip: patient.zip.trim().to_string(),
        },
        emergency_contact: EmergencyContactUpdate {
            first_name: patient.emergency_first_name.trim().to_string(),
            last_name: patient.emergency_last_name.trim().to_string(),
            relation: patient.emergency_relation.trim().to_string(),
            phone_number: digits_only(emergency_phone),
        },
        device_language: patient.device_language.clone(),
        tcm: patient.is_tcm,
        insurance: InsuranceUpdate {
            subscriber: empty_to_none(&patient.subscriber),
            group_number: empty_to_none(&patient.group_number),
            policy_number: empty_to_none(&patient.policy_number),
        },
        primary_physician_id: empty_to_none(&patient.primary_physician_id),
        secondary_id: empty_to_none(&patient.secondary_id),
        device_id: device_field(&patient.device_id, previous_device_id),
        plan_of_care: empty_to_none(&patient.plan_of_care),
        diagnosis: empty_to_none(&patient.diagnosis),
        weight: parse_weight(&patient.weight),
        height: foot_inches_to_cm(&patient.height_foot, &patient.height_inches),
    })
}

/// Device field resolution. Outer `None` = key omitted (unchanged device);
/// `Some(None)` = explicit null (device cleared or "no device" chosen).
fn device_field(current: &str, previous: Option<&str>) -> Option<Option<String>> {
    let current = empty_to_none(current);
    if current.as_deref() == previous {
        return None;
    }
    if current.as_deref() == Some(NO_DEVICE_SENTINEL) {
        return Some(None);
    }
    Some(current)
}

fn empty_to_none(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn digits_only(value: &str) -> String {
    value.chars().filter(|c| c.is_ascii_digit()).collect()
}

fn parse_weight(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse().ok()
}
