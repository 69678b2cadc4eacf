use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::view::natural_cmp;
use crate::Record;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Record)]
#[record(key = "continuity", name = "Continuity")]
#[serde(rename_all = "camelCase")]
pub struct ContinuityNote {
    pub id: String,
    #[serde(default)]
    pub project_id: String,
    pub scene_number: String,
    #[serde(default)]
    pub character: Option<String>,
    pub note: String,
    #[serde(default)]
    pub photos: Vec<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl ContinuityNote {
    pub fn scene_order(a: &ContinuityNote, b: &ContinuityNote) -> Ordering {
        natural_cmp(&a.scene_number, &b.scene_number)
            .then_with(|| a.created_at.cmp(&b.created_at))
    }
}
