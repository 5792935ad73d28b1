//! Request lifecycle
//!
//! Pure functions over an explicit request collection:
//! - Submission (validation, id assignment, append)
//! - Resolution (pending -> approved | rejected)
//! - Queries and dashboard aggregates
//!
//! Nothing here touches storage or the clock implicitly; the `*_at` / `*_on`
//! variants take the time as an argument.

mod requests;
mod summary;

pub use requests::{
    count_approved_on, count_approved_today, count_by_status, filter_by_status,
    filter_by_submitter, find_request, next_id, resolve_request, submit_request,
    submit_request_at,
};
pub use summary::{AdminSummary, ManagerSummary};
