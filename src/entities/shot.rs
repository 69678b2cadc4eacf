use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::view::natural_cmp;
use crate::Record;

/// One planned camera setup in the shot list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Record)]
#[record(key = "shots", name = "Shot")]
#[serde(rename_all = "camelCase")]
pub struct Shot {
    pub id: String,
    #[serde(default)]
    pub project_id: String,
    pub scene_number: String,
    pub shot_label: String,
    #[serde(default)]
    pub shot_type: Option<String>,
    #[serde(default)]
    pub lens: Option<String>,
    #[serde(default)]
    pub movement: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub reference_image: Option<String>,
    #[serde(default)]
    pub completed: bool,
}

impl Shot {
    pub fn new(
        id: impl Into<String>,
        project_id: impl Into<String>,
        scene_number: impl Into<String>,
        shot_label: impl Into<String>,
    ) -> Self {
        Shot {
            id: id.into(),
            project_id: project_id.into(),
            scene_number: scene_number.into(),
            shot_label: shot_label.into(),
            ..Default::default()
        }
    }

    /// Shot list order: scene number, then shot label, both numeric-aware.
    pub fn shot_list_order(a: &Shot, b: &Shot) -> Ordering {
        natural_cmp(&a.scene_number, &b.scene_number)
            .then_with(|| natural_cmp(&a.shot_label, &b.shot_label))
    }
}
