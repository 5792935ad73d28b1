use crate::lifecycle::{AdminSummary, ManagerSummary};
use crate::models::{Request, RequestStatus};
use chrono::Local;
use colored::{ColoredString, Colorize};

pub fn status_label(status: RequestStatus) -> ColoredString {
    let label = format!("{} {}", status.emoji(), status.name());
    match status {
        RequestStatus::Pending => label.yellow(),
        RequestStatus::Approved => label.green(),
        RequestStatus::Rejected => label.red(),
    }
}

/// One request as a card
pub fn print_request(request: &Request) {
    println!(
        "   {} {}  [{}] [{}]  {}",
        format!("#{}", request.id).bright_black(),
        request.student_name.bold(),
        request.grade,
        request.subject,
        status_label(request.status)
    );
    println!("      {}", request.message);
    println!(
        "      {}",
        format!(
            "Submitted by: {} • {}",
            request.submitted_by,
            request.timestamp.with_timezone(&Local).format("%Y-%m-%d")
        )
        .bright_black()
    );
}

pub fn print_requests<'a>(requests: impl IntoIterator<Item = &'a Request>) {
    let mut empty = true;
    for request in requests {
        print_request(request);
        empty = false;
    }
    if empty {
        println!("   {}", "No requests found".bright_black());
    }
}

pub fn print_manager_summary(summary: &ManagerSummary) {
    println!(
        "   My Requests: {}   Pending: {}   Approved: {}   Students Helped: {}",
        summary.my_requests.to_string().cyan().bold(),
        summary.pending.to_string().yellow().bold(),
        summary.approved.to_string().green().bold(),
        summary.students_helped.to_string().purple().bold(),
    );
}

pub fn print_admin_summary(summary: &AdminSummary) {
    println!(
        "   Requests: {}   Pending: {}   Approved Today: {}",
        summary.total.to_string().cyan().bold(),
        summary.pending.to_string().yellow().bold(),
        summary.approved_today.to_string().purple().bold(),
    );
}

/// Menu line for picking a request
pub fn request_choice(request: &Request) -> String {
    format!(
        "#{} {} ({}, {})",
        request.id, request.student_name, request.grade, request.subject
    )
}
