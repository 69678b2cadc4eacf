//! Production - every entity store for one device, wired to a shared backend.
//!
//! `Production` owns one `EntityStore` per record type plus the active project
//! selection. It is also where relationships between stores live: views read
//! the active project, and removing a project cascades to its records.

use log::info;

use crate::active_project::{ActiveProject, ACTIVE_PROJECT_KEY};
use crate::config::StoreConfig;
use crate::entities::{
    samples, BudgetItem, CastMember, ContinuityNote, CrewMember, EquipmentItem, Location, Project,
    Scene, ScheduleDay, Shot,
};
use crate::error::StoreError;
use crate::lock::LockManager;
use crate::record::{ProjectScoped, Record};
use crate::storage::KeyValueStore;
use crate::store::EntityStore;
use crate::view::{project_view, project_view_by};

/// How many records a project removal took with it, per store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CascadeReport {
    pub project_removed: bool,
    /// `(store name, removed count)` for every dependent store.
    pub dependents: Vec<(String, usize)>,
}

impl CascadeReport {
    pub fn total_dependents(&self) -> usize {
        self.dependents.iter().map(|(_, count)| count).sum()
    }

    pub fn removed_from(&self, name: &str) -> usize {
        self.dependents
            .iter()
            .find(|(store, _)| store == name)
            .map(|(_, count)| *count)
            .unwrap_or(0)
    }
}

pub struct Production<S> {
    projects: EntityStore<Project, S>,
    crew: EntityStore<CrewMember, S>,
    cast: EntityStore<CastMember, S>,
    locations: EntityStore<Location, S>,
    scenes: EntityStore<Scene, S>,
    shots: EntityStore<Shot, S>,
    schedule: EntityStore<ScheduleDay, S>,
    budget: EntityStore<BudgetItem, S>,
    continuity: EntityStore<ContinuityNote, S>,
    equipment: EntityStore<EquipmentItem, S>,
    active: ActiveProject<S>,
}

impl<S: KeyValueStore + Clone> Production<S> {
    /// Open every store over `backend` with the default config.
    pub fn open(backend: S) -> Result<Self, StoreError> {
        Self::open_with(backend, &StoreConfig::default())
    }

    /// Open every store over `backend`. Nothing is read until `load_all`.
    pub fn open_with(backend: S, config: &StoreConfig) -> Result<Self, StoreError> {
        Self::open_with_locks(backend, config, &LockManager::new())
    }

    /// Open every store with locks from `locks`. Two productions opened over
    /// the same backend and lock manager serialize their mutations per key.
    pub fn open_with_locks(
        backend: S,
        config: &StoreConfig,
        locks: &LockManager,
    ) -> Result<Self, StoreError> {
        let seeded = config.seed_samples;

        Ok(Production {
            projects: open_store(&backend, config, locks, seeded.then(samples::projects))?,
            crew: open_store(&backend, config, locks, seeded.then(samples::crew))?,
            cast: open_store(&backend, config, locks, None)?,
            locations: open_store(&backend, config, locks, None)?,
            scenes: open_store(&backend, config, locks, None)?,
            shots: open_store(&backend, config, locks, seeded.then(samples::shots))?,
            schedule: open_store(&backend, config, locks, None)?,
            budget: open_store(&backend, config, locks, None)?,
            continuity: open_store(&backend, config, locks, None)?,
            equipment: open_store(&backend, config, locks, None)?,
            active: ActiveProject::with_key(
                backend.clone(),
                config.storage_key(ACTIVE_PROJECT_KEY),
            ),
        })
    }

    /// Load every collection and restore the active project.
    pub fn load_all(&self) {
        self.projects.load();
        self.crew.load();
        self.cast.load();
        self.locations.load();
        self.scenes.load();
        self.shots.load();
        self.schedule.load();
        self.budget.load();
        self.continuity.load();
        self.equipment.load();
        self.active.load();
    }

    /// True while any store is still waiting for its first load.
    pub fn is_loading(&self) -> bool {
        self.projects.is_loading()
            || self.crew.is_loading()
            || self.cast.is_loading()
            || self.locations.is_loading()
            || self.scenes.is_loading()
            || self.shots.is_loading()
            || self.schedule.is_loading()
            || self.budget.is_loading()
            || self.continuity.is_loading()
            || self.equipment.is_loading()
    }

    // ========================================================================
    // Stores
    // ========================================================================

    pub fn projects(&self) -> &EntityStore<Project, S> {
        &self.projects
    }

    pub fn crew(&self) -> &EntityStore<CrewMember, S> {
        &self.crew
    }

    pub fn cast(&self) -> &EntityStore<CastMember, S> {
        &self.cast
    }

    pub fn locations(&self) -> &EntityStore<Location, S> {
        &self.locations
    }

    pub fn scenes(&self) -> &EntityStore<Scene, S> {
        &self.scenes
    }

    pub fn shots(&self) -> &EntityStore<Shot, S> {
        &self.shots
    }

    pub fn schedule(&self) -> &EntityStore<ScheduleDay, S> {
        &self.schedule
    }

    pub fn budget(&self) -> &EntityStore<BudgetItem, S> {
        &self.budget
    }

    pub fn continuity(&self) -> &EntityStore<ContinuityNote, S> {
        &self.continuity
    }

    pub fn equipment(&self) -> &EntityStore<EquipmentItem, S> {
        &self.equipment
    }

    // ========================================================================
    // Active project
    // ========================================================================

    pub fn active_project_id(&self) -> Option<String> {
        self.active.get()
    }

    /// The selected project record, if it still exists.
    pub fn active_project(&self) -> Option<Project> {
        self.active.get().and_then(|id| self.projects.get(&id))
    }

    pub fn select_project(&self, id: Option<&str>) -> Result<(), StoreError> {
        self.active.select(id)
    }

    // ========================================================================
    // Per-project views
    // ========================================================================

    /// Records of `store` belonging to the active project, in collection order.
    pub fn view_of<R: ProjectScoped>(&self, store: &EntityStore<R, S>) -> Vec<R> {
        project_view(&store.current_items(), self.active.get().as_deref())
    }

    pub fn crew_view(&self) -> Vec<CrewMember> {
        self.view_of(&self.crew)
    }

    pub fn cast_view(&self) -> Vec<CastMember> {
        self.view_of(&self.cast)
    }

    pub fn locations_view(&self) -> Vec<Location> {
        self.view_of(&self.locations)
    }

    pub fn scenes_view(&self) -> Vec<Scene> {
        project_view_by(
            &self.scenes.current_items(),
            self.active.get().as_deref(),
            Scene::script_order,
        )
    }

    pub fn shots_view(&self) -> Vec<Shot> {
        project_view_by(
            &self.shots.current_items(),
            self.active.get().as_deref(),
            Shot::shot_list_order,
        )
    }

    pub fn schedule_view(&self) -> Vec<ScheduleDay> {
        project_view_by(
            &self.schedule.current_items(),
            self.active.get().as_deref(),
            ScheduleDay::calendar_order,
        )
    }

    pub fn budget_view(&self) -> Vec<BudgetItem> {
        self.view_of(&self.budget)
    }

    pub fn continuity_view(&self) -> Vec<ContinuityNote> {
        project_view_by(
            &self.continuity.current_items(),
            self.active.get().as_deref(),
            ContinuityNote::scene_order,
        )
    }

    pub fn equipment_view(&self) -> Vec<EquipmentItem> {
        self.view_of(&self.equipment)
    }

    // ========================================================================
    // Cascade
    // ========================================================================

    /// Remove a project together with every record that points at it.
    ///
    /// Dependents go first, so a failure part-way leaves the project in place
    /// and the call can be retried. Deselects the project if it was active.
    pub fn remove_project(&self, id: &str) -> Result<CascadeReport, StoreError> {
        let mut report = CascadeReport::default();

        cascade(&self.crew, id, &mut report)?;
        cascade(&self.cast, id, &mut report)?;
        cascade(&self.locations, id, &mut report)?;
        cascade(&self.scenes, id, &mut report)?;
        cascade(&self.shots, id, &mut report)?;
        cascade(&self.schedule, id, &mut report)?;
        cascade(&self.budget, id, &mut report)?;
        cascade(&self.continuity, id, &mut report)?;
        cascade(&self.equipment, id, &mut report)?;

        report.project_removed = self.projects.remove(id)? > 0;

        if self.active.is(id) {
            self.active.clear()?;
        }

        info!(
            "removed project {} and {} dependent records",
            id,
            report.total_dependents()
        );
        Ok(report)
    }
}

fn open_store<R: Record, S: KeyValueStore + Clone>(
    backend: &S,
    config: &StoreConfig,
    locks: &LockManager,
    seed: Option<Vec<R>>,
) -> Result<EntityStore<R, S>, StoreError> {
    let key = config.storage_key(R::STORAGE_KEY);
    let lock = locks.get_lock(&key)?;
    Ok(EntityStore::new(backend.clone())
        .with_key(key)
        .with_lock(lock)
        .with_seed(seed.unwrap_or_default()))
}

fn cascade<R: ProjectScoped, S: KeyValueStore>(
    store: &EntityStore<R, S>,
    project_id: &str,
    report: &mut CascadeReport,
) -> Result<(), StoreError> {
    let removed = store.remove_where(|r| r.project_id() == Some(project_id))?;
    report.dependents.push((store.name().to_string(), removed));
    Ok(())
}
