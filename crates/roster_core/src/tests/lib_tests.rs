use super::*;

use std::{cell::RefCell, collections::HashSet, rc::Rc};

use crate::seed::demo_roster;
use shared::domain::MemberDraft;

fn draft(name: &str, email: &str, role: &str) -> MemberDraft {
    MemberDraft {
        name: name.to_string(),
        email: email.to_string(),
        role: role.to_string(),
    }
}

#[test]
fn appends_grow_the_collection_in_call_order() {
    let mut store = RosterStore::new();
    store.append(draft("Amy", "amy@email.com", "UI-UX Designer"));
    store.append(draft("Bob", "bob@email.com", "Marketer"));
    store.append(draft("Chris", "chris@email.com", "Front-End Developer"));

    let members = store.snapshot();
    assert_eq!(members.len(), 3);
    let names: Vec<&str> = members.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, ["Amy", "Bob", "Chris"]);
}

#[test]
fn assigned_ids_are_pairwise_distinct() {
    let mut store = RosterStore::with_seed(demo_roster());
    for i in 0..10 {
        store.append(draft(&format!("extra-{i}"), "", ""));
    }

    let members = store.snapshot();
    let ids: HashSet<i64> = members.iter().map(|m| m.id.0).collect();
    assert_eq!(ids.len(), members.len());
}

#[test]
fn seeded_construction_appends_in_seed_order() {
    let store = RosterStore::with_seed(demo_roster());
    let members = store.snapshot();

    assert_eq!(members.len(), 3);
    assert_eq!(members[0].name, "Amy");
    assert_eq!(members[0].role, "UI-UX Designer");
    assert_eq!(members[1].name, "Bob");
    assert_eq!(members[2].name, "Chris");
    assert_eq!(members[2].email, "chris@email.com");
}

#[test]
fn empty_draft_is_appended_without_rejection() {
    let mut store = RosterStore::new();
    store.append(MemberDraft::default());
    store.append(MemberDraft::default());

    let members = store.snapshot();
    assert_eq!(members.len(), 2);
    for member in members.iter() {
        assert_eq!(member.name, "");
        assert_eq!(member.email, "");
        assert_eq!(member.role, "");
    }
    assert_ne!(members[0].id, members[1].id);
}

#[test]
fn earlier_snapshots_are_unaffected_by_later_appends() {
    let mut store = RosterStore::with_seed(demo_roster());
    let before = store.snapshot();

    store.append(draft("Dana", "dana@email.com", "Engineer"));

    assert_eq!(before.len(), 3);
    assert_eq!(store.snapshot().len(), 4);
    assert!(before.iter().all(|m| m.name != "Dana"));
}

#[test]
fn subscribers_observe_every_append_with_the_new_snapshot() {
    let observed: Rc<RefCell<Vec<usize>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&observed);

    let mut store = RosterStore::new();
    store.subscribe(move |snapshot| sink.borrow_mut().push(snapshot.len()));

    store.append(draft("Amy", "amy@email.com", "UI-UX Designer"));
    store.append(MemberDraft::default());

    assert_eq!(*observed.borrow(), vec![1, 2]);
}

#[test]
fn adding_a_member_to_the_seeded_demo_roster() {
    let mut store = RosterStore::with_seed(demo_roster());
    store.append(draft("Dana", "dana@email.com", "Engineer"));

    let members = store.snapshot();
    assert_eq!(members.len(), 4);

    let dana = &members[3];
    assert_eq!(dana.name, "Dana");
    assert_eq!(dana.email, "dana@email.com");
    assert_eq!(dana.role, "Engineer");
    assert!(members[..3].iter().all(|m| m.id != dana.id));
}
