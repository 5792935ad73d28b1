//! Demo data
//!
//! Sample requests for trying the dashboards out. Only written when the
//! configuration asks for it; the lifecycle never depends on them.

use super::{RecordStore, StoreResult};
use crate::models::{Request, RequestFields, RequestStatus};
use chrono::{DateTime, Duration, Utc};

/// The two demo requests: one pending from manager1, one approved from manager2 a day earlier
pub fn demo_requests(now: DateTime<Utc>) -> Vec<Request> {
    let arjun = Request::pending(
        1,
        RequestFields::new(
            "Arjun Sharma",
            "3rd Grade",
            "Mathematics",
            "Need extra help with multiplication tables",
        ),
        "manager1",
        now,
    );

    let mut priya = Request::pending(
        2,
        RequestFields::new(
            "Priya Patel",
            "5th Grade",
            "English",
            "Struggling with essay writing",
        ),
        "manager2",
        now - Duration::days(1),
    );
    priya.status = RequestStatus::Approved;

    vec![arjun, priya]
}

/// Write the demo requests if the slot has never been written
///
/// Returns true when the slot was seeded.
pub fn seed_if_empty<S: RecordStore + ?Sized>(store: &mut S, now: DateTime<Utc>) -> StoreResult<bool> {
    if store.exists() {
        return Ok(false);
    }
    store.save(&demo_requests(now))?;
    Ok(true)
}
