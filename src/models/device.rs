use serde::{Deserialize, Serialize};

/// Monitoring device available for assignment at a facility.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacilityDevice {
    #[serde(rename = "deviceID")]
    pub device_id: String,
}

/// Locale option pushed to a patient's assigned monitoring device.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceLanguage {
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub abbreviation: Option<String>,
}
