use serde::{Deserialize, Serialize};

/// A tenant scope. Every order, return and product belongs to exactly one
/// business; the UI can also view "all" of them at once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Business {
    pub id: i64,
    #[serde(default)]
    pub business_name: String,
    #[serde(default)]
    pub business_type: String,
    #[serde(default)]
    pub contact_number: String,
    #[serde(default)]
    pub gst_tax_id: String,
    #[serde(default)]
    pub business_address: String,
    #[serde(default)]
    pub department_branch: String,
}

impl Business {
    /// Display name with the same fallback the rest of the UI uses.
    pub fn display_name(&self) -> String {
        if self.business_name.is_empty() {
            format!("Business {}", self.id)
        } else {
            self.business_name.clone()
        }
    }
}

/// Payload for `POST /businesses/add/`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct NewBusiness {
    pub business_name: String,
    pub business_type: String,
    pub contact_number: String,
    pub gst_tax_id: String,
    pub business_address: String,
    pub department_branch: String,
    /// Optional source business to clone the product catalogue from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copy_from_business: Option<String>,
}
