use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::view::natural_cmp;
use crate::Record;

/// A script scene, broken down for scheduling.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Record)]
#[record(key = "scenes", name = "Scene")]
#[serde(rename_all = "camelCase")]
pub struct Scene {
    pub id: String,
    #[serde(default)]
    pub project_id: String,
    pub scene_number: String,
    #[serde(default)]
    pub heading: Option<String>,
    #[serde(default)]
    pub time_of_day: Option<String>,
    /// Length in eighths of a page.
    #[serde(default)]
    pub eighths: Option<u32>,
    #[serde(default)]
    pub location_id: Option<String>,
    #[serde(default)]
    pub cast_ids: Vec<String>,
    #[serde(default)]
    pub synopsis: Option<String>,
}

impl Scene {
    /// Script order.
    pub fn script_order(a: &Scene, b: &Scene) -> Ordering {
        natural_cmp(&a.scene_number, &b.scene_number)
    }
}
