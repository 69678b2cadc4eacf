use serde::{Deserialize, Serialize};

use crate::Record;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Record)]
#[record(key = "crew", name = "Crew")]
#[serde(rename_all = "camelCase")]
pub struct CrewMember {
    pub id: String,
    #[serde(default)]
    pub project_id: String,
    pub name: String,
    pub department: String,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub day_rate: Option<f64>,
    #[serde(default)]
    pub photo: Option<String>,
}

impl CrewMember {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        department: impl Into<String>,
    ) -> Self {
        CrewMember {
            id: id.into(),
            name: name.into(),
            department: department.into(),
            ..Default::default()
        }
    }

    pub fn in_project(mut self, project_id: impl Into<String>) -> Self {
        self.project_id = project_id.into();
        self
    }
}
