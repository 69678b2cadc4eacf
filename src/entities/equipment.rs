use serde::{Deserialize, Serialize};

use crate::Record;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Record)]
#[record(key = "equipment", name = "Equipment")]
#[serde(rename_all = "camelCase")]
pub struct EquipmentItem {
    pub id: String,
    #[serde(default)]
    pub project_id: String,
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default = "one")]
    pub quantity: u32,
    #[serde(default)]
    pub rental_house: Option<String>,
    #[serde(default)]
    pub daily_rate: Option<f64>,
    #[serde(default)]
    pub checked_out: bool,
}

fn one() -> u32 {
    1
}
