//! Partner schema - collaborating institutions attached to a project

use serde::{Deserialize, Serialize};

/// A collaborating partner on a project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Partner {
    /// Unique identifier within the project
    pub id: String,

    /// Partner organisation or individual
    pub name: String,

    /// Role in the project (e.g. "Co-investigator host")
    pub role: String,

    /// Stored filename of the signed MOU
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mou_filename: Option<String>,

    /// When the MOU was uploaded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uploaded_date: Option<String>,
}

impl Partner {
    /// Create a new partner without an MOU on file
    pub fn new(id: String, name: String, role: String) -> Self {
        Partner {
            id,
            name,
            role,
            mou_filename: None,
            uploaded_date: None,
        }
    }

    /// Return a new Partner with the signed MOU recorded
    pub fn with_mou(mut self, filename: String, uploaded_date: String) -> Self {
        self.mou_filename = Some(filename);
        self.uploaded_date = Some(uploaded_date);
        self
    }
}
