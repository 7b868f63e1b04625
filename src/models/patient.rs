//! Patient wire types: the nested inbound record, the separately-fetched
//! insurance record, and the nested outbound update payload.
//!
//! Every inbound field is optional — the backend omits what it does not know,
//! and deserialization must never fail on a missing nested path. Defaults are
//! applied later by the normalizer, not here.

use serde::{Deserialize, Serialize};

// ═══════════════════════════════════════════════════════════
// Inbound
// ═══════════════════════════════════════════════════════════

/// Epoch-seconds wrapper used by the backend for date fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EpochTimestamp {
    #[serde(default)]
    pub seconds: Option<i64>,
}

/// Nested postal address block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    #[serde(default)]
    pub address1: Option<String>,
    #[serde(default)]
    pub address2: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub zip: Option<String>,
}

/// Nested emergency-contact block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmergencyContact {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub relation: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
}

/// Patient record as returned by `GET` on the patient endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemotePatientRecord {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub middle_name: Option<String>,
    #[serde(default)]
    pub address: Option<Address>,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub date_of_birth: Option<EpochTimestamp>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub emergency_contact: Option<EmergencyContact>,
    #[serde(default)]
    pub device_language: Option<String>,
    /// Transitional Care Management flag.
    #[serde(default)]
    pub tcm: Option<bool>,
    #[serde(default, rename = "primaryPhysicianID")]
    pub primary_physician_id: Option<String>,
    /// Medical record number in the facility's EHR system.
    #[serde(default, rename = "secondaryID")]
    pub secondary_id: Option<String>,
    #[serde(default, rename = "deviceID")]
    pub device_id: Option<String>,
    #[serde(default, rename = "accountID")]
    pub account_id: Option<String>,
    /// Set when this patient shares a device with a patient group.
    #[serde(default, rename = "patientGroupID")]
    pub patient_group_id: Option<String>,
    #[serde(default, rename = "facilityID")]
    pub facility_id: Option<String>,
    #[serde(default)]
    pub plan_of_care: Option<String>,
    #[serde(default)]
    pub diagnosis: Option<String>,
    /// Pounds.
    #[serde(default)]
    pub weight: Option<f64>,
    /// Centimeters.
    #[serde(default)]
    pub height: Option<f64>,
}

/// Insurance details, fetched separately from the demographic record.
/// The whole record may be absent for patients with no insurance on file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsuranceRecord {
    #[serde(default)]
    pub subscriber: Option<String>,
    #[serde(default)]
    pub group_number: Option<String>,
    #[serde(default)]
    pub policy_number: Option<String>,
}

// ═══════════════════════════════════════════════════════════
// Outbound
// ═══════════════════════════════════════════════════════════

/// Address block of the outbound payload. Trimmed, never null — the backend
/// treats an empty string as "cleared" for address lines.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressUpdate {
    pub address1: String,
    pub address2: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub zip: String,
}

/// Emergency-contact block of the outbound payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmergencyContactUpdate {
    pub first_name: String,
    pub last_name: String,
    pub relation: String,
    /// Digits only.
    pub phone_number: String,
}

/// Insurance block of the outbound payload. Empty fields are sent as null,
/// never as `""`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsuranceUpdate {
    pub subscriber: Option<String>,
    pub group_number: Option<String>,
    pub policy_number: Option<String>,
}

/// Body of `PUT /patient/{patientId}`.
///
/// `device_id` is doubly optional: the outer `None` omits the key entirely
/// (device unchanged, no-op update), `Some(None)` serializes as JSON `null`
/// (device removed).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientUpdate {
    pub first_name: String,
    pub middle_name: String,
    pub last_name: String,
    pub date_of_birth: String,
    pub gender: String,
    /// Digits only.
    pub phone_number: String,
    pub email: String,
    pub address: AddressUpdate,
    pub emergency_contact: EmergencyContactUpdate,
    pub device_language: String,
    pub tcm: bool,
    pub insurance: InsuranceUpdate,
    #[serde(rename = "primaryPhysicianID")]
    pub primary_physician_id: Option<String>,
    #[serde(rename = "secondaryID")]
    pub secondary_id: Option<String>,
    #[serde(
        rename = "deviceID",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub device_id: Option<Option<String>>,
    pub plan_of_care: Option<String>,
    pub diagnosis: Option<String>,
    /// Pounds; null when the form field is empty or non-numeric.
    pub weight: Option<f64>,
    /// Centimeters; null when either height field is empty or non-numeric.
    pub height: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remote_record_tolerates_empty_object() {
        let record: RemotePatientRecord = serde_json::from_str("{}").unwrap();
        assert!(record.first_name.is_none());
        assert!(record.address.is_none());
        assert!(record.date_of_birth.is_none());
    }

    #[test]
    fn remote_record_reads_nested_paths() {
        let json = r#"{
            "firstName": "Ada",
            "address": { "city": "Portland", "zip": "97201" },
            "emergencyContact": { "firstName": "Grace", "phoneNumber": "+1 503 555 0100" },
            "dateOfBirth": { "seconds": 512784000 },
            "primaryPhysicianID": "phys-9",
            "deviceID": "CF-100",
            "accountID": "acct-1",
            "height": 172.72
        }"#;
        let record: RemotePatientRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.first_name.as_deref(), Some("Ada"));
        assert_eq!(
            record.address.as_ref().unwrap().city.as_deref(),
            Some("Portland")
        );
        assert_eq!(
            record
                .emergency_contact
                .as_ref()
                .unwrap()
                .phone_number
                .as_deref(),
            Some("+1 503 555 0100")
        );
        assert_eq!(record.date_of_birth.unwrap().seconds, Some(512784000));
        assert_eq!(record.primary_physician_id.as_deref(), Some("phys-9"));
        assert_eq!(record.device_id.as_deref(), Some("CF-100"));
    }

    #[test]
    fn update_omits_device_key_when_outer_none() {
        let update = PatientUpdate::default();
        let json = serde_json::to_value(&update).unwrap();
        assert!(json.get("deviceID").is_none());
    }

    #[test]
    fn update_serializes_inner_none_as_null() {
        let update = PatientUpdate {
            device_id: Some(None),
            ..Default::default()
        };
        let json = serde_json::to_value(&update).unwrap();
        assert!(json.get("deviceID").unwrap().is_null());
    }

    #[test]
    fn update_uses_backend_field_casing() {
        let update = PatientUpdate {
            primary_physician_id: Some("phys-1".into()),
            secondary_id: Some("mrn-7".into()),
            device_id: Some(Some("CF-200".into())),
            ..Default::default()
        };
        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(json["primaryPhysicianID"], "phys-1");
        assert_eq!(json["secondaryID"], "mrn-7");
        assert_eq!(json["deviceID"], "CF-200");
        assert!(json.get("emergencyContact").is_some());
        assert!(json.get("planOfCare").is_some());
    }
}
