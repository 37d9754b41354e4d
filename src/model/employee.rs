use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmployeeType {
    Internal,
    /// Seconded from another company.
    External,
}

impl fmt::Display for EmployeeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Internal => "internal",
            Self::External => "external",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: String,
    pub name: String,
    pub department: String,
    pub company: String,
    pub employee_no: String,
    #[serde(rename = "type")]
    pub employee_type: EmployeeType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workstation_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewEmployee {
    pub name: String,
    pub department: String,
    pub company: String,
    pub employee_no: String,
    pub employee_type: EmployeeType,
}

impl Employee {
    #[must_use]
    pub fn from_draft(id: String, draft: NewEmployee) -> Self {
        Self {
            id,
            name: draft.name,
            department: draft.department,
            company: draft.company,
            employee_no: draft.employee_no,
            employee_type: draft.employee_type,
            workstation_id: None,
        }
    }

    #[must_use]
    pub fn is_seated(&self) -> bool {
        self.workstation_id.is_some()
    }
}
