use serde::{Deserialize, Serialize};

/// Shop document from the `shops` collection
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ShopProfile {
    pub shop_name: Option<String>,
    pub name: Option<String>,
    pub owner_name: Option<String>,
    pub email: Option<String>,
}

impl ShopProfile {
    /// shopName -> name -> ownerName -> "Shop"
    pub fn resolved_name(&self) -> String {
        self.shop_name
            .as_deref()
            .or(self.name.as_deref())
            .or(self.owner_name.as_deref())
            .filter(|s| !s.is_empty())
            .unwrap_or("Shop")
            .to_string()
    }
}
