use serde::{Deserialize, Serialize};

/// Physician roster record from the account-level provider list.
///
/// `facilities` is absent for facility-agnostic physicians (account admins,
/// floaters) — absence means "practices everywhere", not "practices nowhere".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Physician {
    #[serde(rename = "userID")]
    pub user_id: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub facilities: Option<Vec<String>>,
}

impl Physician {
    /// "First Last" display form used in select lists.
    pub fn display_name(&self) -> String {
        format!(
            "{} {}",
            self.first_name.as_deref().unwrap_or_default(),
            self.last_name.as_deref().unwrap_or_default()
        )
    }
}
