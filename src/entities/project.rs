use serde::{Deserialize, Serialize};

use crate::Record;

/// Where a project is in its life.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    #[default]
    Development,
    PreProduction,
    Production,
    PostProduction,
    Wrapped,
}

/// A film production. Every other record points at one through `projectId`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Record)]
#[record(key = "projects", name = "Project")]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub status: ProjectStatus,
    #[serde(default)]
    pub production_company: Option<String>,
    #[serde(default)]
    pub logline: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub poster: Option<String>,
}

impl Project {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Project {
            id: id.into(),
            title: title.into(),
            ..Default::default()
        }
    }
}
