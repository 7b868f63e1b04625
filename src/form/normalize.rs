//! Field Normalizer: flattens the nested remote patient record into the flat
//! editable record the form binds to, applying per-field defaults.
//!
//! Missing nested objects are never an error. Every accessor is enumerated
//! here once, with its default — `""` for strings, `"male"` for gender,
//! `"en"` for device language, `false` for the TCM flag, `None` for IDs.

use chrono::DateTime;

use crate::config::{DATE_OF_BIRTH_FORMAT, DEFAULT_DEVICE_LANGUAGE, DEFAULT_GENDER};
use crate::form::types::{EditablePatientRecord, SelectItem};
use crate::form::units::cm_to_foot_inches;
use crate::models::{DeviceLanguage, FacilityDevice, InsuranceRecord, RemotePatientRecord};

/// Flatten a remote record (plus its separately-fetched insurance) into the
/// editable form record.
pub fn normalize(
    remote: &RemotePatientRecord,
    insurance: Option<&InsuranceRecord>,
) -> EditablePatientRecord {
    let address = remote.address.as_ref();
    let emergency = remote.emergency_contact.as_ref();

    let (height_foot, height_inches) = remote
        .height
        .and_then(cm_to_foot_inches)
        .map(|(foot, inches)| (foot.to_string(), inches.to_string()))
        .unwrap_or_default();

    EditablePatientRecord {
        first_name: text(remote.first_name.as_deref()),
        last_name: text(remote.last_name.as_deref()),
        middle_name: text(remote.middle_name.as_deref()),
        address1: text(address.and_then(|a| a.address1.as_deref())),
        address2: text(address.and_then(|a| a.address2.as_deref())),
        city: text(address.and_then(|a| a.city.as_deref())),
        country: text(address.and_then(|a| a.country.as_deref())),
        state: text(address.and_then(|a| a.state.as_deref())),
        zip: text(address.and_then(|a| a.zip.as_deref())),
        phone_number: display_phone(remote.phone_number.as_deref().unwrap_or_default()),
        date_of_birth: format_date_of_birth(
            remote.date_of_birth.as_ref().and_then(|d| d.seconds),
        ),
        gender: remote
            .gender
            .clone()
            .filter(|g| !g.is_empty())
            .unwrap_or_else(|| DEFAULT_GENDER.to_string()),
        emergency_first_name: text(emergency.and_then(|e| e.first_name.as_deref())),
        emergency_last_name: text(emergency.and_then(|e| e.last_name.as_deref())),
        emergency_phone: display_phone(
            emergency
                .and_then(|e| e.phone_number.as_deref())
                .unwrap_or_default(),
        ),
        emergency_relation: text(emergency.and_then(|e| e.relation.as_deref())),
        device_language: remote
            .device_language
            .clone()
            .filter(|l| !l.is_empty())
            .unwrap_or_else(|| DEFAULT_DEVICE_LANGUAGE.to_string()),
        is_tcm: remote.tcm.unwrap_or(false),
        subscriber: text(insurance.and_then(|i| i.subscriber.as_deref())),
        group_number: text(insurance.and_then(|i| i.group_number.as_deref())),
        policy_number: text(insurance.and_then(|i| i.policy_number.as_deref())),
        primary_physician_id: text(remote.primary_physician_id.as_deref()),
        secondary_id: text(remote.secondary_id.as_deref()),
        device_id: text(remote.device_id.as_deref()),
        email: text(remote.email.as_deref()),
        plan_of_care: text(remote.plan_of_care.as_deref()),
        diagnosis: text(remote.diagnosis.as_deref()),
        weight: remote.weight.map(format_number).unwrap_or_default(),
        height_foot,
        height_inches,
        patient_group_id: remote.patient_group_id.clone(),
        facility_id: remote.facility_id.clone(),
    }
}

/// Build the device dropdown from the facility inventory. When the patient's
/// assigned device is missing from the inventory (already checked out, or
/// registered at another facility), append it so the current assignment stays
/// representable.
pub fn device_select_items(
    inventory: &[FacilityDevice],
    assigned: Option<&str>,
) -> Vec<SelectItem> {
    let mut items: Vec<SelectItem> = inventory
        .iter()
        .enumerate()
        .map(|(index, device)| SelectItem {
            display_name: device.device_id.clone(),
            data: device.device_id.clone(),
            key: format!("{}-device-{index}", device.device_id),
        })
        .collect();

    if let Some(assigned) = assigned.filter(|id| !id.is_empty()) {
        if !inventory.iter().any(|d| d.device_id == assigned) {
            items.push(SelectItem {
                display_name: assigned.to_string(),
                data: assigned.to_string(),
                key: format!("{assigned}-existing-data"),
            });
        }
    }

    items
}

/// Build the device-language dropdown.
pub fn language_select_items(languages: &[DeviceLanguage]) -> Vec<SelectItem> {
    languages
        .iter()
        .enumerate()
        .map(|(index, lang)| {
            let abbreviation = lang.abbreviation.as_deref().unwrap_or_default();
            SelectItem {
                display_name: text(lang.display_name.as_deref()),
                data: abbreviation.to_string(),
                key: format!("{abbreviation}-{index}"),
            }
        })
        .collect()
}

/// Phone display form: one leading `+` stripped, surrounding whitespace
/// trimmed, punctuation otherwise preserved.
pub fn display_phone(raw: &str) -> String {
    raw.trim().strip_prefix('+').unwrap_or(raw.trim()).trim().to_string()
}

/// Format an epoch-seconds date of birth for display.
///
/// The backend stores midnight UTC; formatting the UTC date directly keeps
/// the calendar day stable in every viewer timezone. Absent or unrepresentable
/// values render as `""`.
fn format_date_of_birth(seconds: Option<i64>) -> String {
    seconds
        .and_then(|s| DateTime::from_timestamp(s, 0))
        .map(|dt| dt.format(DATE_OF_BIRTH_FORMAT).to_string())
        .unwrap_or_default()
}

fn text(value: Option<&str>) -> String {
    value.unwrap_or_default().to_string()
}

/// Render a numeric field the way the form shows it: no trailing `.0` for
/// whole numbers.
fn format_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Address, EmergencyContact, EpochTimestamp};

    fn full_remote() -> RemotePatientRecord {
        RemotePatientRecord {
            first_name: Some("Ada".into()),
            last_name: Some("Lovelace".into()),
            middle_name: Some("King".into()),
            address: Some(Address {
                address1: Some("12 Analytical Way".into()),
                address2: Some("Suite 3".into()),
                city: Some("Portland".into()),
                state: Some("OR".into()),
                country: Some("US".into()),
                zip: Some("97201".into()),
            }),
            phone_number: Some("+1 503 555 0100".into()),
            email: Some("ada@example.com".into()),
            date_of_birth: Some(EpochTimestamp {
                // 1986-04-02T00:00:00Z
                seconds: Some(512_784_000),
            }),
            gender: Some("female".into()),
            emergency_contact: Some(EmergencyContact {
                first_name: Some("Grace".into()),
                last_name: Some("Hopper".into()),
                relation: Some("Friend".into()),
                phone_number: Some("+1 503 555 0101".into()),
            }),
            device_language: Some("es".into()),
            tcm: Some(true),
            primary_physician_id: Some("phys-9".into()),
            secondary_id: Some("MRN-44".into()),
            device_id: Some("CF-100".into()),
            account_id: Some("acct-1".into()),
            patient_group_id: Some("grp-2".into()),
            facility_id: Some("fac-7".into()),
            plan_of_care: Some("Monitor BP daily".into()),
            diagnosis: Some("I10".into()),
            weight: Some(151.0),
            height: Some(172.72),
        }
    }

    #[test]
    fn empty_remote_record_yields_documented_defaults() {
        let record = normalize(&RemotePatientRecord::default(), None);
        assert_eq!(record.first_name, "");
        assert_eq!(record.city, "");
        assert_eq!(record.phone_number, "");
        assert_eq!(record.date_of_birth, "");
        assert_eq!(record.gender, "male");
        assert_eq!(record.device_language, "en");
        assert!(!record.is_tcm);
        assert_eq!(record.subscriber, "");
        assert_eq!(record.height_foot, "");
        assert_eq!(record.height_inches, "");
        assert_eq!(record.weight, "");
        assert!(record.patient_group_id.is_none());
        assert!(record.facility_id.is_none());
    }

    #[test]
    fn full_record_flattens_every_field() {
        let insurance = InsuranceRecord {
            subscriber: Some("Ada Lovelace".into()),
            group_number: Some("G-12".into()),
            policy_number: Some("P-88".into()),
        };
        let record = normalize(&full_remote(), Some(&insurance));

        assert_eq!(record.first_name, "Ada");
        assert_eq!(record.address1, "12 Analytical Way");
        assert_eq!(record.state, "OR");
        assert_eq!(record.gender, "female");
        assert_eq!(record.device_language, "es");
        assert!(record.is_tcm);
        assert_eq!(record.emergency_first_name, "Grace");
        assert_eq!(record.emergency_relation, "Friend");
        assert_eq!(record.subscriber, "Ada Lovelace");
        assert_eq!(record.group_number, "G-12");
        assert_eq!(record.policy_number, "P-88");
        assert_eq!(record.primary_physician_id, "phys-9");
        assert_eq!(record.secondary_id, "MRN-44");
        assert_eq!(record.device_id, "CF-100");
        assert_eq!(record.plan_of_care, "Monitor BP daily");
        assert_eq!(record.weight, "151");
        assert_eq!(record.patient_group_id.as_deref(), Some("grp-2"));
        assert_eq!(record.facility_id.as_deref(), Some("fac-7"));
    }

    #[test]
    fn phones_lose_leading_plus_only() {
        let record = normalize(&full_remote(), None);
        assert_eq!(record.phone_number, "1 503 555 0100");
        assert_eq!(record.emergency_phone, "1 503 555 0101");
    }

    #[test]
    fn display_phone_preserves_punctuation() {
        assert_eq!(display_phone("  +1 (503) 555-0100  "), "1 (503) 555-0100");
        assert_eq!(display_phone("(503) 555-0100"), "(503) 555-0100");
        // Only a single leading plus is stripped.
        assert_eq!(display_phone("++15035550100"), "+15035550100");
    }

    #[test]
    fn date_of_birth_formats_utc_date() {
        let record = normalize(&full_remote(), None);
        assert_eq!(record.date_of_birth, "04/02/1986");
    }

    #[test]
    fn missing_dob_seconds_renders_empty() {
        let remote = RemotePatientRecord {
            date_of_birth: Some(EpochTimestamp { seconds: None }),
            ..Default::default()
        };
        assert_eq!(normalize(&remote, None).date_of_birth, "");
    }

    #[test]
    fn height_cm_splits_into_foot_and_inches() {
        let record = normalize(&full_remote(), None);
        assert_eq!(record.height_foot, "5");
        assert_eq!(record.height_inches, "8");
    }

    #[test]
    fn fractional_weight_keeps_fraction() {
        let remote = RemotePatientRecord {
            weight: Some(151.5),
            ..Default::default()
        };
        assert_eq!(normalize(&remote, None).weight, "151.5");
    }

    // ── Device select list ──────────────────────────────────────────

    fn inventory(ids: &[&str]) -> Vec<FacilityDevice> {
        ids.iter()
            .map(|id| FacilityDevice {
                device_id: id.to_string(),
            })
            .collect()
    }

    #[test]
    fn device_list_without_assignment_maps_inventory() {
        let items = device_select_items(&inventory(&["CF-1", "CF-2"]), None);
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].data, "CF-1");
        assert_eq!(items[0].key, "CF-1-device-0");
        assert_eq!(items[1].key, "CF-2-device-1");
    }

    #[test]
    fn assigned_device_missing_from_inventory_is_appended() {
        let items = device_select_items(&inventory(&["CF-1"]), Some("CF-99"));
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].data, "CF-99");
        assert_eq!(items[1].key, "CF-99-existing-data");
    }

    #[test]
    fn assigned_device_already_in_inventory_is_not_duplicated() {
        let items = device_select_items(&inventory(&["CF-1", "CF-2"]), Some("CF-2"));
        assert_eq!(items.len(), 2);
    }

    #[test]
    fn empty_assignment_is_ignored() {
        let items = device_select_items(&inventory(&["CF-1"]), Some(""));
        assert_eq!(items.len(), 1);
    }

    // ── Language select list ────────────────────────────────────────

    #[test]
    fn language_items_carry_indexed_keys() {
        let languages = vec![
            DeviceLanguage {
                display_name: Some("English".into()),
                abbreviation: Some("en".into()),
            },
            DeviceLanguage {
                display_name: Some("Español".into()),
                abbreviation: Some("es".into()),
            },
        ];
        let items = language_select_items(&languages);
        assert_eq!(items[0].key, "en-0");
        assert_eq!(items[1].key, "es-1");
        assert_eq!(items[1].display_name, "Español");
        assert_eq!(items[1].data, "es");
    }

    #[test]
    fn language_without_abbreviation_still_maps() {
        let items = language_select_items(&[DeviceLanguage {
            display_name: Some("English".into()),
            abbreviation: None,
        }]);
        assert_eq!(items[0].data, "");
        assert_eq!(items[0].key, "-0");
    }
}
