//! Integration tests for the request lifecycle
//!
//! Covers the submit/resolve flow end to end on plain collections:
//! - Scenario from an empty collection to an approved request
//! - Validation leaving collections untouched
//! - Resolution touching exactly one record

use balvatika::lifecycle::{
    count_by_status, filter_by_submitter, resolve_request, submit_request, AdminSummary,
    ManagerSummary,
};
use balvatika::models::{Decision, DeskError, Request, RequestFields, RequestStatus};
use chrono::Local;

fn fields(student: &str, message: &str) -> RequestFields {
    RequestFields::new(student, "3rd Grade", "Mathematics", message)
}

fn seeded() -> Vec<Request> {
    let mut records = Vec::new();
    for (student, manager) in [
        ("Arjun Sharma", "manager1"),
        ("Priya Patel", "manager2"),
        ("Kabir Singh", "manager1"),
        ("Meera Iyer", "manager3"),
    ] {
        let (next, _) = submit_request(&records, fields(student, "Need help"), manager).unwrap();
        records = next;
    }
    records
}

#[test]
fn test_submit_then_approve_scenario() {
    let (records, created) =
        submit_request(&[], fields("Arjun Sharma", "Need help"), "manager1").unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].status, RequestStatus::Pending);

    let records = resolve_request(&records, created.id, Decision::Approved).unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].status, RequestStatus::Approved);
    assert_eq!(count_by_status(&records, RequestStatus::Approved), 1);
}

#[test]
fn test_new_ids_are_fresh() {
    let records = seeded();
    let (after, created) = submit_request(&records, fields("Dev", "Reading"), "manager2").unwrap();

    assert!(records.iter().all(|r| r.id != created.id));
    assert_eq!(created.status, RequestStatus::Pending);
    assert_eq!(after.len(), records.len() + 1);
}

#[test]
fn test_blank_submission_leaves_collection_unchanged() {
    let records = seeded();
    let snapshot = records.clone();

    let err = submit_request(&records, fields("Dev", "   "), "manager2").unwrap_err();
    assert!(matches!(err, DeskError::Validation(ref field) if field == "message"));
    assert_eq!(records, snapshot);
}

#[test]
fn test_resolution_touches_one_record() {
    let records = seeded();
    let target = records[2].id;

    let after = resolve_request(&records, target, Decision::Rejected).unwrap();

    assert_eq!(after.len(), records.len());
    for (before, now) in records.iter().zip(&after) {
        assert_eq!(before.id, now.id);
        if before.id == target {
            assert_eq!(now.status, RequestStatus::Rejected);
            assert_eq!(now.student_name, before.student_name);
            assert_eq!(now.timestamp, before.timestamp);
            assert_eq!(now.submitted_by, before.submitted_by);
        } else {
            assert_eq!(now, before);
        }
    }
}

#[test]
fn test_resolve_missing_id_fails() {
    let records = seeded();
    let missing = records.iter().map(|r| r.id).max().unwrap() + 1;

    let err = resolve_request(&records, missing, Decision::Approved).unwrap_err();
    assert!(matches!(err, DeskError::NotFound(id) if id == missing));
}

#[test]
fn test_rejected_request_can_be_approved_again() {
    // Resolution does not guard against a second decision
    let records = seeded();
    let id = records[0].id;

    let records = resolve_request(&records, id, Decision::Rejected).unwrap();
    let records = resolve_request(&records, id, Decision::Approved).unwrap();
    assert_eq!(records[0].status, RequestStatus::Approved);
}

#[test]
fn test_filter_by_submitter_subset_in_order() {
    let records = seeded();
    let mine = filter_by_submitter(&records, "manager1");

    let expected: Vec<&Request> = records.iter().filter(|r| r.submitted_by == "manager1").collect();
    assert_eq!(mine, expected);
    assert_eq!(mine[0].student_name, "Arjun Sharma");
    assert_eq!(mine[1].student_name, "Kabir Singh");
}

#[test]
fn test_dashboard_summaries() {
    let records = seeded();
    let records = resolve_request(&records, records[0].id, Decision::Approved).unwrap();
    let records = resolve_request(&records, records[1].id, Decision::Rejected).unwrap();

    let manager = ManagerSummary::for_submitter(&records, "manager1");
    assert_eq!(manager.my_requests, 2);
    assert_eq!(manager.pending, 1);
    assert_eq!(manager.students_helped, 1);

    let admin = AdminSummary::compute(&records, Local::now().date_naive());
    assert_eq!(admin.total, 4);
    assert_eq!(admin.pending, 2);
}
