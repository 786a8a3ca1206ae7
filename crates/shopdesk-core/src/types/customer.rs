use serde::{Deserialize, Serialize};

/// Display name used when the customer document is missing or unusable
pub const UNKNOWN_CUSTOMER: &str = "Unknown Customer";

/// Customer document from the `users` collection
///
/// Accounts were created by several app generations, so the name and
/// phone live under different keys depending on age. The resolver
/// methods apply the canonical fallback chains.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CustomerProfile {
    pub name: Option<String>,
    pub first_name: Option<String>,
    pub display_name: Option<String>,
    pub phone: Option<String>,
    pub phone_number: Option<String>,
    pub mobile: Option<String>,
    pub email: Option<String>,
}

impl CustomerProfile {
    /// name -> firstName -> displayName -> "Unknown Customer"
    pub fn resolved_name(&self) -> String {
        self.name
            .as_deref()
            .or(self.first_name.as_deref())
            .or(self.display_name.as_deref())
            .filter(|s| !s.is_empty())
            .unwrap_or(UNKNOWN_CUSTOMER)
            .to_string()
    }

    /// phone -> phoneNumber -> mobile -> ""
    pub fn resolved_phone(&self) -> String {
        self.phone
            .as_deref()
            .or(self.phone_number.as_deref())
            .or(self.mobile.as_deref())
            .unwrap_or("")
            .to_string()
    }
}
