use crate::models::{
    Decision, DeskError, DeskResult, Request, RequestFields, RequestId, RequestStatus,
};
use chrono::{DateTime, Local, NaiveDate, Utc};
use std::collections::HashSet;

/// Next free request id
///
/// Uses the creation time in milliseconds, bumped past the largest existing id
/// when two submissions land in the same millisecond (or the clock went back).
/// When the largest id is already `u64::MAX`, the first unused id is taken instead.
pub fn next_id(current: &[Request], now: DateTime<Utc>) -> RequestId {
    let candidate = u64::try_from(now.timestamp_millis()).unwrap_or(0);
    match current.iter().map(|r| r.id).max() {
        Some(max) if max >= candidate => max
            .checked_add(1)
            .unwrap_or_else(|| first_unused_id(current, candidate)),
        _ => candidate,
    }
}

/// First id not held by any request, scanning upward from `from` and wrapping at the top
fn first_unused_id(current: &[Request], from: RequestId) -> RequestId {
    let taken: HashSet<RequestId> = current.iter().map(|r| r.id).collect();
    (from..=RequestId::MAX)
        .chain(0..from)
        .find(|id| !taken.contains(id))
        .unwrap_or(from)
}

/// Submit a new request stamped with the current time
pub fn submit_request(
    current: &[Request],
    fields: RequestFields,
    submitted_by: &str,
) -> DeskResult<(Vec<Request>, Request)> {
    submit_request_at(current, fields, submitted_by, Utc::now())
}

/// Submit a new request stamped with `now`
///
/// Returns the full new collection (input plus the appended record) and the
/// created record. `current` is never modified.
pub fn submit_request_at(
    current: &[Request],
    fields: RequestFields,
    submitted_by: &str,
    now: DateTime<Utc>,
) -> DeskResult<(Vec<Request>, Request)> {
    if let Some(field) = fields.first_missing() {
        return Err(DeskError::Validation(field.to_string()));
    }

    let request = Request::pending(next_id(current, now), fields, submitted_by, now);

    let mut records = Vec::with_capacity(current.len() + 1);
    records.extend_from_slice(current);
    records.push(request.clone());

    Ok((records, request))
}

/// Set the status of request `id` to the decision
///
/// Resolving an already resolved request overwrites its status again; there is
/// no guard against re-approving a rejected request or the reverse.
pub fn resolve_request(
    current: &[Request],
    id: RequestId,
    decision: Decision,
) -> DeskResult<Vec<Request>> {
    let index = current
        .iter()
        .position(|r| r.id == id)
        .ok_or(DeskError::NotFound(id))?;

    let mut records = current.to_vec();
    records[index].status = decision.into();
    Ok(records)
}

/// Find a request by id
pub fn find_request(current: &[Request], id: RequestId) -> Option<&Request> {
    current.iter().find(|r| r.id == id)
}

/// Requests created by `submitted_by`, in collection order
pub fn filter_by_submitter<'a>(current: &'a [Request], submitted_by: &str) -> Vec<&'a Request> {
    current
        .iter()
        .filter(|r| r.submitted_by == submitted_by)
        .collect()
}

/// Requests with the given status, in collection order
pub fn filter_by_status(current: &[Request], status: RequestStatus) -> Vec<&Request> {
    current.iter().filter(|r| r.status == status).collect()
}

pub fn count_by_status(current: &[Request], status: RequestStatus) -> usize {
    current.iter().filter(|r| r.status == status).count()
}

/// Approved requests created today (local calendar day)
pub fn count_approved_today(current: &[Request]) -> usize {
    count_approved_on(current, Local::now().date_naive())
}

/// Approved requests whose creation timestamp falls on `day` in local time
pub fn count_approved_on(current: &[Request], day: NaiveDate) -> usize {
    current
        .iter()
        .filter(|r| r.status == RequestStatus::Approved)
        .filter(|r| r.timestamp.with_timezone(&Local).date_naive() == day)
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn fields(student: &str) -> RequestFields {
        RequestFields::new(student, "3rd Grade", "Mathematics", "Need help")
    }

    fn noon() -> DateTime<Utc> {
        Local
            .with_ymd_and_hms(2024, 5, 1, 12, 0, 0)
            .unwrap()
            .with_timezone(&Utc)
    }

    fn collection() -> Vec<Request> {
        let (records, _) = submit_request_at(&[], fields("Arjun"), "manager1", noon()).unwrap();
        let (records, _) = submit_request_at(&records, fields("Priya"), "manager2", noon()).unwrap();
        let (records, _) = submit_request_at(&records, fields("Kabir"), "manager1", noon()).unwrap();
        records
    }

    #[test]
    fn test_submit_creates_pending_record() {
        let (records, created) =
            submit_request_at(&[], fields("Arjun Sharma"), "manager1", noon()).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0], created);
        assert_eq!(created.status, RequestStatus::Pending);
        assert_eq!(created.submitted_by, "manager1");
        assert_eq!(created.student_name, "Arjun Sharma");
        assert_eq!(created.timestamp, noon());
        assert_eq!(created.id, noon().timestamp_millis() as u64);
    }

    #[test]
    fn test_submit_appends_and_keeps_existing() {
        let before = collection();
        let (after, created) =
            submit_request_at(&before, fields("Meera"), "manager3", noon()).unwrap();

        assert_eq!(after.len(), before.len() + 1);
        assert_eq!(&after[..before.len()], &before[..]);
        assert_eq!(after.last(), Some(&created));
    }

    #[test]
    fn test_submit_assigns_unique_ids_within_same_millisecond() {
        let records = collection();
        let mut ids: Vec<_> = records.iter().map(|r| r.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), records.len());
    }

    #[test]
    fn test_next_id_skips_past_future_ids() {
        let existing = vec![Request::pending(
            u64::MAX / 2,
            fields("Arjun"),
            "manager1",
            noon(),
        )];
        assert_eq!(next_id(&existing, noon()), u64::MAX / 2 + 1);
        assert_eq!(next_id(&[], noon()), noon().timestamp_millis() as u64);
    }

    #[test]
    fn test_next_id_at_max_takes_first_unused() {
        let millis = noon().timestamp_millis() as u64;
        let existing = vec![
            Request::pending(u64::MAX, fields("Arjun"), "manager1", noon()),
            Request::pending(millis, fields("Priya"), "manager2", noon()),
        ];
        assert_eq!(next_id(&existing, noon()), millis + 1);

        let (records, created) =
            submit_request_at(&existing, fields("Kabir"), "manager1", noon()).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(created.id, millis + 1);
        let ids: HashSet<RequestId> = records.iter().map(|r| r.id).collect();
        assert_eq!(ids.len(), 3);
    }

    #[test]
    fn test_submit_after_max_id_stays_unique() {
        let existing = vec![Request::pending(
            u64::MAX,
            fields("Arjun"),
            "manager1",
            noon(),
        )];
        let (records, first) = submit_request(&existing, fields("Priya"), "manager2").unwrap();
        let (records, second) = submit_request(&records, fields("Kabir"), "manager1").unwrap();

        assert_ne!(first.id, u64::MAX);
        assert_ne!(second.id, u64::MAX);
        assert_ne!(first.id, second.id);
        assert_eq!(records.len(), 3);
    }

    #[test]
    fn test_submit_rejects_blank_fields() {
        let before = collection();
        let cases = [
            (RequestFields::new("", "3rd Grade", "Mathematics", "Need help"), "student name"),
            (RequestFields::new("Arjun", " ", "Mathematics", "Need help"), "grade"),
            (RequestFields::new("Arjun", "3rd Grade", "", "Need help"), "subject"),
            (RequestFields::new("Arjun", "3rd Grade", "Mathematics", "\n"), "message"),
        ];

        for (input, missing) in cases {
            match submit_request_at(&before, input, "manager1", noon()) {
                Err(DeskError::Validation(field)) => assert_eq!(field, missing),
                other => panic!("expected validation error, got {:?}", other),
            }
        }
        assert_eq!(before.len(), 3);
    }

    #[test]
    fn test_resolve_changes_only_target() {
        let before = collection();
        let target = before[1].id;

        let after = resolve_request(&before, target, Decision::Approved).unwrap();

        assert_eq!(after.len(), before.len());
        for (old, new) in before.iter().zip(&after) {
            if old.id == target {
                assert_eq!(new.status, RequestStatus::Approved);
                assert_eq!(
                    Request { status: old.status, ..new.clone() },
                    old.clone()
                );
            } else {
                assert_eq!(old, new);
            }
        }
    }

    #[test]
    fn test_resolve_unknown_id() {
        let before = collection();
        let err = resolve_request(&before, 7, Decision::Rejected).unwrap_err();
        assert!(matches!(err, DeskError::NotFound(7)));
    }

    #[test]
    fn test_resolve_is_permissive_on_resolved_requests() {
        let records = collection();
        let id = records[0].id;

        let rejected = resolve_request(&records, id, Decision::Rejected).unwrap();
        assert_eq!(rejected[0].status, RequestStatus::Rejected);

        // A second decision overwrites the first
        let approved = resolve_request(&rejected, id, Decision::Approved).unwrap();
        assert_eq!(approved[0].status, RequestStatus::Approved);
    }

    #[test]
    fn test_filter_by_submitter_preserves_order() {
        let records = collection();
        let mine = filter_by_submitter(&records, "manager1");

        let names: Vec<_> = mine.iter().map(|r| r.student_name.as_str()).collect();
        assert_eq!(names, vec!["Arjun", "Kabir"]);
        assert!(filter_by_submitter(&records, "nobody").is_empty());
    }

    #[test]
    fn test_count_and_filter_by_status() {
        let records = collection();
        let records = resolve_request(&records, records[0].id, Decision::Approved).unwrap();
        let records = resolve_request(&records, records[2].id, Decision::Rejected).unwrap();

        assert_eq!(count_by_status(&records, RequestStatus::Pending), 1);
        assert_eq!(count_by_status(&records, RequestStatus::Approved), 1);
        assert_eq!(count_by_status(&records, RequestStatus::Rejected), 1);
        assert_eq!(filter_by_status(&records, RequestStatus::Pending)[0].student_name, "Priya");
    }

    #[test]
    fn test_count_approved_on_day() {
        let yesterday = noon() - Duration::days(1);
        let (records, _) = submit_request_at(&[], fields("Old"), "manager1", yesterday).unwrap();
        let (records, _) = submit_request_at(&records, fields("New"), "manager1", noon()).unwrap();
        let (records, _) = submit_request_at(&records, fields("Waiting"), "manager1", noon()).unwrap();
        let records = resolve_request(&records, records[0].id, Decision::Approved).unwrap();
        let records = resolve_request(&records, records[1].id, Decision::Approved).unwrap();

        let day = noon().with_timezone(&Local).date_naive();
        assert_eq!(count_approved_on(&records, day), 1);
        assert_eq!(count_approved_on(&records, day - Duration::days(1)), 1);
        assert_eq!(count_approved_on(&records, day + Duration::days(1)), 0);
    }

    #[test]
    fn test_count_approved_today_uses_clock() {
        let (records, created) =
            submit_request(&[], fields("Arjun"), "manager1").unwrap();
        assert_eq!(count_approved_today(&records), 0);

        let records = resolve_request(&records, created.id, Decision::Approved).unwrap();
        assert_eq!(count_approved_today(&records), 1);

        let records = resolve_request(&records, created.id, Decision::Rejected).unwrap();
        assert_eq!(count_approved_today(&records), 0);
    }

    #[test]
    fn test_find_request() {
        let records = collection();
        let id = records[2].id;
        assert_eq!(find_request(&records, id).map(|r| r.student_name.as_str()), Some("Kabir"));
        assert!(find_request(&records, 1).is_none());
    }
}
