//! Interactive dashboards
//!
//! Login form, then the manager or admin dashboard for the chosen role.
//! Logging out returns to the login form; drafts are not kept.

use super::{open_desk, render};
use crate::desk::Desk;
use crate::models::{Decision, RequestFields, Role, GRADES, SUBJECTS};
use crate::notify::TerminalNotifier;
use crate::store::JsonFileStore;
use crate::Result;
use colored::Colorize;
use dialoguer::{Confirm, Input, Password, Select};
use std::path::Path;

type TerminalDesk = Desk<JsonFileStore, TerminalNotifier>;

const ROLES: [Role; 2] = [Role::Admin, Role::Manager];

pub fn run(project_root: &Path, data_dir: Option<&Path>) -> Result<()> {
    let mut desk = open_desk(project_root, data_dir)?;

    loop {
        println!();
        println!("{}", "🎓 Balvatika".cyan().bold());
        println!("{}", "   Coaching Center Management System".bright_black());
        println!();

        let choice = Select::new()
            .items(&["Sign In", "Quit"])
            .default(0)
            .interact()
            .map_err(|e| anyhow::anyhow!("Terminal not available: {}", e))?;
        if choice == 1 {
            return Ok(());
        }

        let Some(role) = login_form(&mut desk)? else {
            continue;
        };

        match role {
            Role::Manager => manager_dashboard(&mut desk)?,
            Role::Admin => admin_dashboard(&mut desk)?,
        }
    }
}

/// Returns the role signed in with, or None when the form was rejected
fn login_form(desk: &mut TerminalDesk) -> Result<Option<Role>> {
    let username: String = Input::new()
        .with_prompt("Username")
        .allow_empty(true)
        .interact_text()?;
    let password = Password::new()
        .with_prompt("Password")
        .allow_empty_password(true)
        .interact()?;
    let role_names: Vec<&str> = ROLES.iter().map(|r| r.name()).collect();
    let role = Select::new()
        .with_prompt("Role")
        .items(&role_names)
        .default(0)
        .interact()?;

    match desk.login(ROLES[role], &username, &password) {
        Ok(session) => Ok(Some(session.role)),
        Err(_) => Ok(None),
    }
}

// =============================================================================
// Manager
// =============================================================================

fn manager_dashboard(desk: &mut TerminalDesk) -> Result<()> {
    loop {
        print_header(desk, Role::Manager);
        if let Ok(summary) = desk.manager_summary() {
            render::print_manager_summary(&summary);
        }
        println!();
        println!("{}", "My Requests".green().bold());
        if let Ok(mine) = desk.my_requests() {
            render::print_requests(mine);
        }
        println!();

        let choice = Select::new()
            .items(&["New Request", "Refresh", "Logout"])
            .default(0)
            .interact()?;

        match choice {
            0 => {
                if let Some(fields) = request_form()? {
                    let _ = desk.submit(fields);
                }
            }
            1 => {
                let _ = desk.reload();
            }
            _ => {
                desk.logout();
                return Ok(());
            }
        }
    }
}

/// Submission form; None when cancelled
fn request_form() -> Result<Option<RequestFields>> {
    println!();
    println!("{}", "Submit Student Request".cyan().bold());

    let student_name: String = Input::new()
        .with_prompt("Student Name")
        .allow_empty(true)
        .interact_text()?;
    let grade = Select::new()
        .with_prompt("Grade")
        .items(GRADES)
        .default(0)
        .interact()?;
    let subject = Select::new()
        .with_prompt("Subject")
        .items(SUBJECTS)
        .default(0)
        .interact()?;
    let message: String = Input::new()
        .with_prompt("Message")
        .allow_empty(true)
        .interact_text()?;

    let submit = Confirm::new()
        .with_prompt("Submit request?")
        .default(true)
        .interact()?;
    if !submit {
        return Ok(None);
    }

    Ok(Some(RequestFields::new(
        student_name,
        GRADES[grade],
        SUBJECTS[subject],
        message,
    )))
}

// =============================================================================
// Admin
// =============================================================================

fn admin_dashboard(desk: &mut TerminalDesk) -> Result<()> {
    loop {
        print_header(desk, Role::Admin);
        if let Ok(summary) = desk.admin_summary() {
            render::print_admin_summary(&summary);
        }
        println!();
        println!("{}", "Student Requests".green().bold());
        render::print_requests(desk.records());
        println!();

        let choice = Select::new()
            .items(&["Review Pending Request", "Refresh", "Logout"])
            .default(0)
            .interact()?;

        match choice {
            0 => review_pending(desk)?,
            1 => {
                let _ = desk.reload();
            }
            _ => {
                desk.logout();
                return Ok(());
            }
        }
    }
}

fn review_pending(desk: &mut TerminalDesk) -> Result<()> {
    let pending: Vec<_> = desk
        .records()
        .iter()
        .filter(|r| r.is_pending())
        .map(|r| (r.id, render::request_choice(r)))
        .collect();

    if pending.is_empty() {
        println!("{}", "No pending requests.".yellow());
        return Ok(());
    }

    let mut items: Vec<&str> = pending.iter().map(|(_, label)| label.as_str()).collect();
    items.push("Back");
    let picked = Select::new()
        .with_prompt("Request")
        .items(&items)
        .default(0)
        .interact()?;
    let Some((id, _)) = pending.get(picked) else {
        return Ok(());
    };

    let action = Select::new()
        .with_prompt("Decision")
        .items(&["Approve", "Reject", "Back"])
        .default(0)
        .interact()?;
    let decision = match action {
        0 => Decision::Approved,
        1 => Decision::Rejected,
        _ => return Ok(()),
    };

    let _ = desk.resolve(*id, decision);
    Ok(())
}

fn print_header(desk: &TerminalDesk, role: Role) {
    println!();
    println!("{}", role.dashboard_title().cyan().bold());
    if let Some(session) = desk.session() {
        println!("{}", format!("   Welcome back, {}!", session.username).bright_black());
    }
    println!();
}
