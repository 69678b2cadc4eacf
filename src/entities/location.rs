use serde::{Deserialize, Serialize};

use crate::Record;

/// A shooting location, with scout photos.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Record)]
#[record(key = "locations", name = "Location")]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub id: String,
    #[serde(default)]
    pub project_id: String,
    pub name: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub contact_name: Option<String>,
    #[serde(default)]
    pub contact_phone: Option<String>,
    #[serde(default)]
    pub permit_status: Option<String>,
    #[serde(default)]
    pub photos: Vec<String>,
    #[serde(default)]
    pub notes: Option<String>,
}
