use super::requests::{count_approved_on, count_by_status, filter_by_submitter};
use crate::models::{Request, RequestStatus};
use chrono::NaiveDate;
use serde::Serialize;

/// Stat cards on the manager dashboard, over the manager's own requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ManagerSummary {
    pub my_requests: usize,
    pub pending: usize,
    pub approved: usize,
    /// Same figure as `approved`: one approved request is one student helped
    pub students_helped: usize,
}

impl ManagerSummary {
    pub fn for_submitter(current: &[Request], submitted_by: &str) -> Self {
        let mine = filter_by_submitter(current, submitted_by);
        let count = |status: RequestStatus| mine.iter().filter(|r| r.status == status).count();
        let approved = count(RequestStatus::Approved);

        Self {
            my_requests: mine.len(),
            pending: count(RequestStatus::Pending),
            approved,
            students_helped: approved,
        }
    }
}

/// Stat cards on the admin dashboard, over the whole collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AdminSummary {
    pub total: usize,
    pub pending: usize,
    pub approved_today: usize,
}

impl AdminSummary {
    pub fn compute(current: &[Request], today: NaiveDate) -> Self {
        Self {
            total: current.len(),
            pending: count_by_status(current, RequestStatus::Pending),
            approved_today: count_approved_on(current, today),
        }
    }
}
