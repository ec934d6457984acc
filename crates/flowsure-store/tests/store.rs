use chrono::NaiveDate;
use flowsure_core::{Department, HistoryEntry, Lead, LeadId, LeadSource, LeadStatus};
use flowsure_store::error::StoreErrorKind;
use flowsure_store::LeadStore;

fn lead(id: u32, department: Department) -> Lead {
    Lead {
        id: LeadId(id),
        company: format!("Company {id}"),
        contact_person: format!("Person {id}"),
        status: LeadStatus::New,
        source: LeadSource::Referral,
        department,
        created_at: NaiveDate::from_ymd_opt(2025, 9, 1).unwrap(),
        next_contact_date: None,
        history: Vec::new(),
        documents: Vec::new(),
    }
}

#[test]
fn get_all_preserves_insertion_order() {
    let store = LeadStore::new(vec![
        lead(3, Department::Retail),
        lead(1, Department::Technology),
        lead(2, Department::Services),
    ])
    .expect("store");
    let ids: Vec<u32> = store.get_all().iter().map(|lead| lead.id.get()).collect();
    assert_eq!(ids, vec![3, 1, 2]);
    assert_eq!(store.get_all().len(), 3);
}

#[test]
fn duplicate_ids_are_rejected() {
    let err = LeadStore::new(vec![
        lead(1, Department::Retail),
        lead(1, Department::Technology),
    ])
    .unwrap_err();
    assert_eq!(err.kind(), StoreErrorKind::DuplicateId);
}

#[test]
fn commit_status_mutates_in_place() {
    let mut store = LeadStore::new(vec![lead(1, Department::Retail)]).expect("store");
    let previous = store
        .commit_status(LeadId(1), LeadStatus::Won)
        .expect("commit");
    assert_eq!(previous, LeadStatus::New);
    assert_eq!(
        store.get(LeadId(1)).expect("lead").status,
        LeadStatus::Won
    );
}

#[test]
fn commit_status_on_unknown_id_is_not_found() {
    let mut store = LeadStore::new(vec![lead(1, Department::Retail)]).expect("store");
    let err = store
        .commit_status(LeadId(9), LeadStatus::Won)
        .unwrap_err();
    assert_eq!(err.kind(), StoreErrorKind::NotFound);
}

#[test]
fn history_is_appended_in_order() {
    let mut store = LeadStore::new(vec![lead(1, Department::Retail)]).expect("store");
    let date = NaiveDate::from_ymd_opt(2025, 9, 12).unwrap();
    store
        .append_history(
            LeadId(1),
            HistoryEntry::new(date, "Call", "Initial contact", "user001").expect("entry"),
        )
        .expect("append");
    store
        .append_history(
            LeadId(1),
            HistoryEntry::new(date, "Email", "Sent proposal", "user002").expect("entry"),
        )
        .expect("append");
    let history = &store.get(LeadId(1)).expect("lead").history;
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].notes, "Initial contact");
    assert_eq!(history[1].actor_id, "user002");
}

#[test]
fn remove_drops_the_lead() {
    let mut store = LeadStore::new(vec![
        lead(1, Department::Retail),
        lead(2, Department::Retail),
    ])
    .expect("store");
    let removed = store.remove(LeadId(1)).expect("remove");
    assert_eq!(removed.id, LeadId(1));
    assert!(store.get(LeadId(1)).is_none());
    assert_eq!(store.remove(LeadId(1)).unwrap_err().kind(), StoreErrorKind::NotFound);
}

#[test]
fn next_contact_date_can_be_rescheduled_and_cleared() {
    let mut store = LeadStore::new(vec![lead(1, Department::Technology)]).unwrap();
    let date = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
    store.set_next_contact_date(LeadId(1), Some(date)).unwrap();
    assert_eq!(store.get(LeadId(1)).unwrap().next_contact_date, Some(date));
    store.set_next_contact_date(LeadId(1), None).unwrap();
    assert_eq!(store.get(LeadId(1)).unwrap().next_contact_date, None);
    assert!(store.set_next_contact_date(LeadId(9), None).is_err());
}
