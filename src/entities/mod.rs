//! Production records: the typed entities a filmmaker tracks per project.
//!
//! Every type serializes with camelCase field names (`projectId`,
//! `sceneNumber`, ...) so a persisted collection is plain JSON. Image fields
//! hold whatever reference the picker returned; they are never interpreted.

mod budget;
mod cast;
mod continuity;
mod crew;
mod equipment;
mod location;
mod project;
mod scene;
mod schedule;
mod shot;

pub mod samples;

pub use budget::BudgetItem;
pub use cast::CastMember;
pub use continuity::ContinuityNote;
pub use crew::CrewMember;
pub use equipment::EquipmentItem;
pub use location::Location;
pub use project::{Project, ProjectStatus};
pub use scene::Scene;
pub use schedule::ScheduleDay;
pub use shot::Shot;
