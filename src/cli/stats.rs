use super::{open_store, render};
use crate::lifecycle::{AdminSummary, ManagerSummary};
use crate::store::RecordStore;
use crate::Result;
use chrono::Local;
use colored::Colorize;
use std::path::Path;

pub fn run(
    project_root: &Path,
    data_dir: Option<&Path>,
    submitted_by: Option<&str>,
    json: bool,
) -> Result<()> {
    let store = open_store(project_root, data_dir)?;
    let records = store.load()?;

    match submitted_by {
        Some(user) => {
            let summary = ManagerSummary::for_submitter(&records, user);
            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                println!("{}", format!("📊 Summary for {}", user).cyan());
                render::print_manager_summary(&summary);
            }
        }
        None => {
            let summary = AdminSummary::compute(&records, Local::now().date_naive());
            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                println!("{}", "📊 Request summary".cyan());
                render::print_admin_summary(&summary);
            }
        }
    }

    Ok(())
}
