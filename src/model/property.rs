use serde::{Deserialize, Serialize};

/// A building or site that contains offices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: String,
    pub code: String,
    pub name: String,
    #[serde(rename = "type")]
    pub property_type: String,
    pub region: String,
    pub address: String,
    /// Floor area in square metres.
    pub area: f64,
    pub floors: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certificate_no: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    /// Branch of the company that occupies the property.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch_name: Option<String>,
}

/// Form payload for creating or editing a property.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewProperty {
    pub code: String,
    pub name: String,
    pub property_type: String,
    pub region: String,
    pub address: String,
    pub area: f64,
    pub floors: u32,
    pub certificate_no: Option<String>,
    pub company: Option<String>,
    pub branch_name: Option<String>,
}

impl Property {
    #[must_use]
    pub fn from_draft(id: String, draft: NewProperty) -> Self {
        Self {
            id,
            code: draft.code,
            name: draft.name,
            property_type: draft.property_type,
            region: draft.region,
            address: draft.address,
            area: draft.area,
            floors: draft.floors,
            certificate_no: draft.certificate_no,
            company: draft.company,
            branch_name: draft.branch_name,
        }
    }
}
