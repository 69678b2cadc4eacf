//! Per-project views over the active selection.

use clapboard::entities::{BudgetItem, CrewMember, Scene, ScheduleDay, Shot};
use clapboard::InMemoryKeyValueStore;

use crate::open;

fn budget_item(id: &str, project: &str, estimated: f64) -> BudgetItem {
    BudgetItem {
        id: id.into(),
        project_id: project.into(),
        category: "equipment".into(),
        estimated,
        ..Default::default()
    }
}

#[test]
fn no_active_project_means_empty_views() {
    let production = open(&InMemoryKeyValueStore::new());
    production
        .crew()
        .add(CrewMember::new("c1", "Alex", "camera").in_project("p1"))
        .unwrap();

    assert_eq!(production.active_project_id(), None);
    assert!(production.crew_view().is_empty());
    assert!(production.shots_view().is_empty());
}

#[test]
fn view_keeps_only_active_project_records_in_order() {
    let production = open(&InMemoryKeyValueStore::new());
    production
        .crew()
        .add_many(vec![
            CrewMember::new("c1", "Alex", "camera").in_project("p1"),
            CrewMember::new("c2", "Rui", "grip").in_project("p2"),
            CrewMember::new("c3", "Ana", "sound").in_project("p1"),
            CrewMember::new("c4", "Loose", "art"),
        ])
        .unwrap();

    production.select_project(Some("p1")).unwrap();
    let ids: Vec<String> = production.crew_view().into_iter().map(|c| c.id).collect();
    assert_eq!(ids, vec!["c1", "c3"]);

    production.select_project(Some("p2")).unwrap();
    let ids: Vec<String> = production.crew_view().into_iter().map(|c| c.id).collect();
    assert_eq!(ids, vec!["c2"]);
}

#[test]
fn view_follows_later_mutations() {
    let production = open(&InMemoryKeyValueStore::new());
    production.select_project(Some("p1")).unwrap();
    production.budget().add(budget_item("b1", "p1", 500.0)).unwrap();

    let spent = BudgetItem {
        actual: 450.0,
        ..budget_item("b1", "p1", 500.0)
    };
    assert!(production.budget().update(spent).unwrap());

    let view = production.budget_view();
    assert_eq!(view.len(), 1);
    assert_eq!(view[0].actual, 450.0);
    assert!(!view[0].is_over_budget());

    production.budget().add(budget_item("b2", "p2", 100.0)).unwrap();
    assert_eq!(production.budget_view().len(), 1);
}

#[test]
fn shots_view_is_in_shot_list_order() {
    let production = open(&InMemoryKeyValueStore::new());
    production
        .shots()
        .add_many(vec![
            Shot::new("s1", "p1", "12", "A"),
            Shot::new("s2", "p1", "3", "B"),
            Shot::new("s3", "p2", "1", "A"),
            Shot::new("s4", "p1", "3", "A"),
        ])
        .unwrap();
    production.select_project(Some("p1")).unwrap();

    let ids: Vec<String> = production.shots_view().into_iter().map(|s| s.id).collect();
    assert_eq!(ids, vec!["s4", "s2", "s1"]);
    // The underlying collection keeps insertion order.
    assert_eq!(production.shots().current_items()[0].id, "s1");
}

#[test]
fn scenes_and_schedule_views_are_sorted() {
    let production = open(&InMemoryKeyValueStore::new());
    production
        .scenes()
        .add_many(vec![
            Scene {
                id: "sc10".into(),
                project_id: "p1".into(),
                scene_number: "10".into(),
                ..Default::default()
            },
            Scene {
                id: "sc9".into(),
                project_id: "p1".into(),
                scene_number: "9".into(),
                ..Default::default()
            },
        ])
        .unwrap();
    production
        .schedule()
        .add_many(vec![
            ScheduleDay {
                id: "d2".into(),
                project_id: "p1".into(),
                date: "2026-03-02".into(),
                call_time: Some("06:30".into()),
                ..Default::default()
            },
            ScheduleDay {
                id: "d1".into(),
                project_id: "p1".into(),
                date: "2026-03-01".into(),
                call_time: Some("18:00".into()),
                ..Default::default()
            },
        ])
        .unwrap();
    production.select_project(Some("p1")).unwrap();

    let scenes: Vec<String> = production.scenes_view().into_iter().map(|s| s.id).collect();
    assert_eq!(scenes, vec!["sc9", "sc10"]);
    let days: Vec<String> = production.schedule_view().into_iter().map(|d| d.id).collect();
    assert_eq!(days, vec!["d1", "d2"]);
}
