use serde::{Deserialize, Serialize};

use crate::Record;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Record)]
#[record(key = "cast", name = "Cast")]
#[serde(rename_all = "camelCase")]
pub struct CastMember {
    pub id: String,
    #[serde(default)]
    pub project_id: String,
    pub actor_name: String,
    pub character: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub headshot: Option<String>,
}
