//! Overlapping mutations, shared locks and change notifications.

use std::sync::{mpsc, Arc, Mutex};
use std::thread;
use std::time::Duration;

use clapboard::entities::CrewMember;
use clapboard::{
    ChangeEvent, ChangeKind, EntityStore, InMemoryKeyValueStore, LockManager, StoreError,
};

use crate::support::FlakyBackend;

#[test]
fn overlapping_adds_are_all_kept() {
    let backend = FlakyBackend::new();
    let store = Arc::new(EntityStore::<CrewMember, _>::new(backend.clone()));
    store.load();
    backend.delay_writes(Duration::from_millis(10));

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                store
                    .add(CrewMember::new(format!("c{}", i), format!("Crew {}", i), "grip"))
                    .unwrap();
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(store.current_items().len(), 8);
    let reopened = EntityStore::<CrewMember, _>::new(backend);
    assert_eq!(reopened.load().len(), 8);
}

#[test]
fn two_stores_sharing_a_key_and_lock_do_not_lose_updates() {
    let backend = FlakyBackend::new();
    let locks = LockManager::new();
    let lock = locks.get_lock("crew").unwrap();

    let a = Arc::new(EntityStore::<CrewMember, _>::new(backend.clone()).with_lock(lock.clone()));
    let b = Arc::new(EntityStore::<CrewMember, _>::new(backend.clone()).with_lock(lock));
    a.load();
    b.load();
    backend.delay_writes(Duration::from_millis(5));

    let writer_a = {
        let a = Arc::clone(&a);
        thread::spawn(move || {
            for i in 0..5 {
                a.add(CrewMember::new(format!("a{}", i), "A", "camera")).unwrap();
            }
        })
    };
    let writer_b = {
        let b = Arc::clone(&b);
        thread::spawn(move || {
            for i in 0..5 {
                b.add(CrewMember::new(format!("b{}", i), "B", "sound")).unwrap();
            }
        })
    };
    writer_a.join().unwrap();
    writer_b.join().unwrap();

    // Each store's cache may lag the other's writes; the backend has all ten.
    let reopened = EntityStore::<CrewMember, _>::new(backend);
    assert_eq!(reopened.load().len(), 10);
    assert_eq!(a.load().len(), 10);
}

#[test]
fn edit_from_stale_snapshot_is_rejected_not_lost() {
    let store = EntityStore::<CrewMember, _>::new(InMemoryKeyValueStore::new());
    store.load();

    // An editor takes a snapshot, then another mutation lands first.
    let editor_base = store.snapshot();
    store.add(CrewMember::new("c1", "Jordan", "direction")).unwrap();

    let mut edited = editor_base.data;
    edited.push(CrewMember::new("c2", "Sam", "camera"));
    let err = store.replace_all(editor_base.version, edited).unwrap_err();
    assert!(matches!(err, StoreError::ConcurrencyConflict { .. }));

    let ids: Vec<String> = store.current_items().into_iter().map(|c| c.id).collect();
    assert_eq!(ids, vec!["c1"]);
}

#[test]
fn subscribers_hear_each_persisted_change() {
    let store = EntityStore::<CrewMember, _>::new(InMemoryKeyValueStore::new());
    let (tx, rx) = mpsc::channel::<ChangeEvent>();
    let tx = Mutex::new(tx);
    store.subscribe(move |event| {
        let _ = tx.lock().unwrap().send(event);
    });

    store.load();
    store.add(CrewMember::new("c1", "Jordan", "direction")).unwrap();
    store.remove("c1").unwrap();

    let mut events: Vec<ChangeEvent> = (0..3)
        .map(|_| rx.recv_timeout(Duration::from_secs(2)).unwrap())
        .collect();
    // Listeners run on their own threads, so arrival order is not guaranteed.
    events.sort_by_key(|e| e.version);

    let kinds: Vec<ChangeKind> = events.iter().map(|e| e.kind).collect();
    assert_eq!(kinds, vec![ChangeKind::Loaded, ChangeKind::Added, ChangeKind::Removed]);
    assert!(events.iter().all(|e| e.name == "Crew" && e.key == "crew"));
    assert_eq!(events[2].version, store.version());
}

#[test]
fn failed_write_sends_no_notification() {
    let backend = FlakyBackend::new();
    let store = EntityStore::<CrewMember, _>::new(backend.clone());
    store.load();

    let (tx, rx) = mpsc::channel::<ChangeEvent>();
    let tx = Mutex::new(tx);
    let listener = store.subscribe(move |event| {
        let _ = tx.lock().unwrap().send(event);
    });

    backend.fail_writes(true);
    assert!(store.add(CrewMember::new("c1", "Jordan", "direction")).is_err());
    assert!(rx.recv_timeout(Duration::from_millis(100)).is_err());

    assert!(store.unsubscribe(&listener));
    assert!(!store.unsubscribe(&listener));
}
