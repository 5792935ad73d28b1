//! Request desk
//!
//! Application service tying the pieces together for a view layer:
//! - Explicit store handle and session state (no globals)
//! - Mutations computed by the pure lifecycle, persisted as a full collection,
//!   then applied in memory only once the save succeeded
//! - Change listeners and a notification sink for every outcome

use crate::lifecycle::{self, AdminSummary, ManagerSummary};
use crate::models::{Decision, DeskError, DeskResult, Request, RequestFields, RequestId, Role, Session};
use crate::notify::{Notification, Notifier};
use crate::session::SessionState;
use crate::store::RecordStore;
use chrono::Local;
use tracing::{debug, info, warn};

type Listener = Box<dyn FnMut(&[Request])>;

/// Request desk over a record store
pub struct Desk<S: RecordStore, N: Notifier> {
    store: S,
    records: Vec<Request>,
    session: SessionState,
    notifier: N,
    listeners: Vec<Listener>,
}

impl<S: RecordStore, N: Notifier> Desk<S, N> {
    /// Load the current collection from `store`
    pub fn open(store: S, mut notifier: N) -> DeskResult<Self> {
        let records = match store.load() {
            Ok(records) => records,
            Err(e) => {
                let err = DeskError::from(e);
                notifier.notify(Notification::error(err.title(), err.to_string()));
                return Err(err);
            }
        };
        debug!(count = records.len(), "loaded requests");

        Ok(Self {
            store,
            records,
            session: SessionState::new(),
            notifier,
            listeners: Vec::new(),
        })
    }

    /// Re-read the slot, picking up writes made by other processes
    pub fn reload(&mut self) -> DeskResult<()> {
        let result = self.store.load().map_err(DeskError::from);
        let records = self.report(result)?;
        debug!(count = records.len(), "reloaded requests");
        self.records = records;
        Ok(())
    }

    // =========================================================================
    // Session
    // =========================================================================

    pub fn login(&mut self, role: Role, username: &str, password: &str) -> DeskResult<Session> {
        match self.session.login(role, username, password) {
            Ok(session) => {
                let session = session.clone();
                info!(role = %session.role, username = %session.username, "signed in");
                self.notifier.notify(Notification::success(
                    "Login Successful! 🎉",
                    format!("Welcome to Balvatika, {}!", session.username),
                ));
                Ok(session)
            }
            Err(e) => {
                self.notifier.notify(Notification::error(
                    "Login Failed",
                    "Please enter both username and password",
                ));
                Err(e)
            }
        }
    }

    pub fn logout(&mut self) -> Option<Session> {
        let previous = self.session.logout();
        if let Some(session) = &previous {
            info!(username = %session.username, "signed out");
        }
        previous
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.current()
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Submit a request as the signed-in manager
    pub fn submit(&mut self, fields: RequestFields) -> DeskResult<Request> {
        let result = self.try_submit(fields);
        let request = self.report(result)?;

        info!(id = request.id, student = %request.student_name, "request submitted");
        self.notifier.notify(Notification::success(
            "Request Submitted! 🎉",
            "Your student request has been sent to the admin for review.",
        ));
        Ok(request)
    }

    fn try_submit(&mut self, fields: RequestFields) -> DeskResult<Request> {
        let submitted_by = self.session.require(Role::Manager)?.username.clone();
        let (records, request) = lifecycle::submit_request(&self.records, fields, &submitted_by)?;
        self.commit(records)?;
        Ok(request)
    }

    pub fn approve(&mut self, id: RequestId) -> DeskResult<Request> {
        self.resolve(id, Decision::Approved)
    }

    pub fn reject(&mut self, id: RequestId) -> DeskResult<Request> {
        self.resolve(id, Decision::Rejected)
    }

    /// Resolve a request as the signed-in admin
    pub fn resolve(&mut self, id: RequestId, decision: Decision) -> DeskResult<Request> {
        let result = self.try_resolve(id, decision);
        let request = self.report(result)?;

        info!(id, decision = %decision, "request resolved");
        self.notifier.notify(Notification::success(
            format!("Request {}! ✅", decision),
            format!("Student request has been {} successfully.", decision),
        ));
        Ok(request)
    }

    fn try_resolve(&mut self, id: RequestId, decision: Decision) -> DeskResult<Request> {
        self.session.require(Role::Admin)?;

        if let Some(existing) = lifecycle::find_request(&self.records, id) {
            if existing.status.is_resolved() {
                warn!(id, from = %existing.status, to = %decision, "re-resolving a request");
            }
        }

        let records = lifecycle::resolve_request(&self.records, id, decision)?;
        self.commit(records)?;

        lifecycle::find_request(&self.records, id)
            .cloned()
            .ok_or(DeskError::NotFound(id))
    }

    /// Persist the full new collection, then adopt it
    fn commit(&mut self, records: Vec<Request>) -> DeskResult<()> {
        self.store.save(&records)?;
        debug!(count = records.len(), "saved requests");
        self.records = records;

        for listener in &mut self.listeners {
            listener(&self.records);
        }
        Ok(())
    }

    /// Forward an error to the notifier and hand the result back
    fn report<T>(&mut self, result: DeskResult<T>) -> DeskResult<T> {
        if let Err(e) = &result {
            warn!(error = %e, "action failed");
            self.notifier
                .notify(Notification::error(e.title(), e.to_string()));
        }
        result
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Every request, in submission order
    pub fn records(&self) -> &[Request] {
        &self.records
    }

    /// Requests submitted by the signed-in manager
    pub fn my_requests(&self) -> DeskResult<Vec<&Request>> {
        let session = self.session.require(Role::Manager)?;
        Ok(lifecycle::filter_by_submitter(&self.records, &session.username))
    }

    pub fn manager_summary(&self) -> DeskResult<ManagerSummary> {
        let session = self.session.require(Role::Manager)?;
        Ok(ManagerSummary::for_submitter(&self.records, &session.username))
    }

    pub fn admin_summary(&self) -> DeskResult<AdminSummary> {
        self.session.require(Role::Admin)?;
        Ok(AdminSummary::compute(&self.records, Local::now().date_naive()))
    }

    // =========================================================================
    // Plumbing
    // =========================================================================

    /// Call `listener` with the new collection after every successful change
    pub fn subscribe(&mut self, listener: impl FnMut(&[Request]) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }
}
