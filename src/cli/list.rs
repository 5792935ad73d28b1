use super::{open_store, render};
use crate::lifecycle::{filter_by_status, filter_by_submitter};
use crate::models::{Request, RequestStatus};
use crate::store::RecordStore;
use crate::Result;
use colored::Colorize;
use std::path::Path;

pub fn run(
    project_root: &Path,
    data_dir: Option<&Path>,
    submitted_by: Option<&str>,
    status: Option<RequestStatus>,
    json: bool,
) -> Result<()> {
    let store = open_store(project_root, data_dir)?;
    let records = store.load()?;
    let selected = select_requests(&records, submitted_by, status);

    if json {
        println!("{}", serde_json::to_string_pretty(&selected)?);
        return Ok(());
    }

    let heading = match submitted_by {
        Some(user) => format!("📋 Requests submitted by {}", user),
        None => "📋 Student requests".to_string(),
    };
    println!("{}", heading.cyan());
    println!();
    render::print_requests(selected);

    Ok(())
}

/// Apply the optional submitter and status filters, keeping collection order
pub fn select_requests<'a>(
    records: &'a [Request],
    submitted_by: Option<&str>,
    status: Option<RequestStatus>,
) -> Vec<&'a Request> {
    let selected = match (submitted_by, status) {
        (Some(user), _) => filter_by_submitter(records, user),
        (None, Some(status)) => return filter_by_status(records, status),
        (None, None) => return records.iter().collect(),
    };
    match status {
        Some(status) => selected.into_iter().filter(|r| r.status == status).collect(),
        None => selected,
    }
}
