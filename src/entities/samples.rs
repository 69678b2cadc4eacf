//! Default seed collections written the first time each store loads.

use super::{CrewMember, Project, ProjectStatus, Shot};

pub const SAMPLE_PROJECT_ID: &str = "sample-project";

pub fn projects() -> Vec<Project> {
    vec![Project {
        status: ProjectStatus::PreProduction,
        logline: Some("A lighthouse keeper finds a radio that receives tomorrow's weather.".into()),
        ..Project::new(SAMPLE_PROJECT_ID, "The Lighthouse Signal")
    }]
}

pub fn crew() -> Vec<CrewMember> {
    vec![
        CrewMember {
            role: Some("Director".into()),
            ..CrewMember::new("sample-crew-1", "Jordan Reyes", "direction").in_project(SAMPLE_PROJECT_ID)
        },
        CrewMember {
            role: Some("Director of Photography".into()),
            ..CrewMember::new("sample-crew-2", "Sam Okafor", "camera").in_project(SAMPLE_PROJECT_ID)
        },
    ]
}

pub fn shots() -> Vec<Shot> {
    vec![
        Shot {
            shot_type: Some("wide".into()),
            description: Some("Establishing: lighthouse at dusk".into()),
            ..Shot::new("sample-shot-1", SAMPLE_PROJECT_ID, "1", "A")
        },
        Shot {
            shot_type: Some("close-up".into()),
            description: Some("Radio dial glowing".into()),
            ..Shot::new("sample-shot-2", SAMPLE_PROJECT_ID, "1", "B")
        },
    ]
}
