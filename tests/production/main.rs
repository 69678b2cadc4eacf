//! Integration tests for Production: store wiring, active project, cascade.

mod views;

use clapboard::entities::{
    samples, BudgetItem, CastMember, ContinuityNote, CrewMember, Project, Shot,
};
use clapboard::{
    FileKeyValueStore, InMemoryKeyValueStore, KeyValueStore, LockManager, Production, StoreConfig,
};

pub fn config() -> StoreConfig {
    StoreConfig {
        key_prefix: "@test/".into(),
        seed_samples: false,
        ..StoreConfig::default()
    }
}

pub fn open(backend: &InMemoryKeyValueStore) -> Production<InMemoryKeyValueStore> {
    let production = Production::open_with(backend.clone(), &config()).unwrap();
    production.load_all();
    production
}

#[test]
fn first_open_seeds_sample_project() {
    let backend = InMemoryKeyValueStore::new();
    let production = Production::open(backend.clone()).unwrap();
    assert!(production.is_loading());

    production.load_all();
    assert!(!production.is_loading());
    assert_eq!(production.projects().current_items(), samples::projects());
    assert_eq!(production.crew().current_items().len(), 2);
    assert!(production.budget().current_items().is_empty());
    assert!(backend.get("@clapboard/projects").unwrap().is_some());
}

#[test]
fn keys_follow_configured_prefix() {
    let backend = InMemoryKeyValueStore::new();
    let production = open(&backend);

    assert_eq!(production.crew().key(), "@test/crew");
    assert_eq!(production.shots().key(), "@test/shots");
    assert!(backend.get("@test/budget").unwrap().is_some());
    assert!(backend.get("budget").unwrap().is_none());
}

#[test]
fn active_project_survives_restart() {
    let backend = InMemoryKeyValueStore::new();
    {
        let production = open(&backend);
        production
            .projects()
            .add(Project::new("p1", "Night Shoot"))
            .unwrap();
        production.select_project(Some("p1")).unwrap();
    }

    let production = open(&backend);
    assert_eq!(production.active_project_id().as_deref(), Some("p1"));
    assert_eq!(
        production.active_project().map(|p| p.title),
        Some("Night Shoot".to_string())
    );
}

#[test]
fn removing_a_project_cascades_to_its_records() {
    let backend = InMemoryKeyValueStore::new();
    let production = open(&backend);

    production
        .projects()
        .add_many(vec![Project::new("p1", "Keep"), Project::new("p2", "Drop")])
        .unwrap();
    production
        .crew()
        .add_many(vec![
            CrewMember::new("c1", "Alex", "camera").in_project("p1"),
            CrewMember::new("c2", "Rui", "grip").in_project("p2"),
            CrewMember::new("c3", "Ana", "sound").in_project("p2"),
        ])
        .unwrap();
    production
        .shots()
        .add_many(vec![
            Shot::new("s1", "p2", "1", "A"),
            Shot::new("s2", "p1", "1", "A"),
        ])
        .unwrap();
    production
        .cast()
        .add(CastMember {
            id: "a1".into(),
            project_id: "p2".into(),
            actor_name: "Mira".into(),
            character: "Keeper".into(),
            ..Default::default()
        })
        .unwrap();
    production.select_project(Some("p2")).unwrap();

    let report = production.remove_project("p2").unwrap();

    assert!(report.project_removed);
    assert_eq!(report.removed_from("Crew"), 2);
    assert_eq!(report.removed_from("Shot"), 1);
    assert_eq!(report.removed_from("Cast"), 1);
    assert_eq!(report.removed_from("Budget"), 0);
    assert_eq!(report.total_dependents(), 4);

    let project_ids: Vec<String> = production
        .projects()
        .current_items()
        .into_iter()
        .map(|p| p.id)
        .collect();
    assert_eq!(project_ids, vec!["p1"]);
    assert_eq!(production.crew().current_items().len(), 1);
    assert_eq!(production.shots().current_items()[0].id, "s2");
    assert_eq!(production.active_project_id(), None);

    // Persisted too, not just cached.
    let reopened = open(&backend);
    assert_eq!(reopened.crew().current_items().len(), 1);
    assert!(reopened.cast().current_items().is_empty());
}

#[test]
fn removing_an_inactive_project_keeps_selection() {
    let backend = InMemoryKeyValueStore::new();
    let production = open(&backend);
    production
        .projects()
        .add_many(vec![Project::new("p1", "Keep"), Project::new("p2", "Drop")])
        .unwrap();
    production.select_project(Some("p1")).unwrap();

    let report = production.remove_project("p2").unwrap();
    assert!(report.project_removed);
    assert_eq!(report.total_dependents(), 0);
    assert_eq!(production.active_project_id().as_deref(), Some("p1"));
}

#[test]
fn removing_unknown_project_still_clears_orphans() {
    let backend = InMemoryKeyValueStore::new();
    let production = open(&backend);
    production
        .continuity()
        .add(ContinuityNote {
            id: "n1".into(),
            project_id: "ghost".into(),
            scene_number: "4".into(),
            note: "Left sleeve rolled".into(),
            ..Default::default()
        })
        .unwrap();

    let report = production.remove_project("ghost").unwrap();
    assert!(!report.project_removed);
    assert_eq!(report.removed_from("Continuity"), 1);
}

#[test]
fn productions_sharing_locks_and_backend_see_each_others_writes() {
    let backend = InMemoryKeyValueStore::new();
    let locks = LockManager::new();
    let foreground = Production::open_with_locks(backend.clone(), &config(), &locks).unwrap();
    let importer = Production::open_with_locks(backend.clone(), &config(), &locks).unwrap();
    foreground.load_all();
    importer.load_all();

    foreground
        .budget()
        .add(BudgetItem {
            id: "b1".into(),
            project_id: "p1".into(),
            category: "equipment".into(),
            estimated: 500.0,
            ..Default::default()
        })
        .unwrap();
    importer
        .budget()
        .add_many(vec![BudgetItem {
            id: "b2".into(),
            project_id: "p1".into(),
            category: "locations".into(),
            estimated: 900.0,
            ..Default::default()
        }])
        .unwrap();

    assert_eq!(importer.budget().current_items().len(), 2);
    assert_eq!(foreground.budget().load().len(), 2);
}

#[test]
fn file_backed_production_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let config = StoreConfig {
        data_dir: dir.path().to_path_buf(),
        ..config()
    };

    {
        let production = Production::open_with(config.open_file_backend(), &config).unwrap();
        production.load_all();
        production
            .projects()
            .add(Project::new("p1", "Desert Road"))
            .unwrap();
        production.select_project(Some("p1")).unwrap();
    }

    let production: Production<FileKeyValueStore> =
        Production::open_with(config.open_file_backend(), &config).unwrap();
    production.load_all();
    assert_eq!(production.active_project().map(|p| p.id).as_deref(), Some("p1"));
}
