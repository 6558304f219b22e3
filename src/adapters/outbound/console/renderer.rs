//! Console rendering: tables, detail views, toasts and a request spinner.
//!
//! Rendering writes to stdout; toasts and the spinner go to stderr so
//! piped output stays clean.

use crate::application::store::{
    CollectionSlice, FetchPhase, Notification, NotificationLevel, NotificationQueue,
};
use crate::compliance::domain::{
    Finding, Framework, Identified, Incident, Policy, Severity, TrainingCourse, User,
};
use chrono::Utc;
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use std::future::Future;
use std::time::Duration;

/// Runs a request future behind a stderr spinner.
pub async fn with_spinner<F, T>(message: &str, future: F) -> T
where
    F: Future<Output = T>,
{
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("   {spinner:.green} {msg}")
            .expect("Failed to set spinner template"),
    );
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(80));

    let result = future.await;
    spinner.finish_and_clear();
    result
}

/// Drains and prints all pending toasts.
pub fn render_notifications(queue: &mut NotificationQueue) {
    for Notification { level, message } in queue.drain() {
        match level {
            NotificationLevel::Info => eprintln!("{} {}", "ℹ".blue(), message),
            NotificationLevel::Success => eprintln!("{} {}", "✔".green(), message),
            NotificationLevel::Warning => eprintln!("{} {}", "⚠".yellow(), message),
            NotificationLevel::Error => eprintln!("{} {}", "✖".red(), message),
        }
    }
}

fn severity_label(severity: Severity) -> String {
    match severity {
        Severity::Critical => severity.to_string().red().bold().to_string(),
        Severity::High => severity.to_string().red().to_string(),
        Severity::Medium => severity.to_string().yellow().to_string(),
        Severity::Low => severity.to_string().green().to_string(),
    }
}

fn page_footer<T: Identified + Clone>(slice: &CollectionSlice<T>) -> String {
    format!(
        "page {} of {}, {} total",
        slice.page(),
        slice.pages().max(1),
        slice.total()
    )
}

/// Prints the list phase error, if any. Returns true when an error was
/// shown so callers can skip the table.
fn render_phase_error(phase: &FetchPhase) -> bool {
    if let Some(message) = phase.error() {
        eprintln!("{} {}", "✖".red(), message);
        true
    } else {
        false
    }
}

pub fn render_framework_list(slice: &CollectionSlice<Framework>) {
    if render_phase_error(slice.list_phase()) {
        return;
    }
    println!(
        "{:<38} {:<30} {:>8} {:>10}",
        "ID".bold(),
        "NAME".bold(),
        "SCORE".bold(),
        "PROGRESS".bold()
    );
    for framework in slice.items() {
        println!(
            "{:<38} {:<30} {:>7.1}% {:>9.1}%",
            framework.id,
            framework.name,
            framework.compliance_score,
            framework.implementation_progress
        );
    }
    println!("{}", page_footer(slice).dimmed());
}

pub fn render_framework_detail(framework: &Framework) {
    println!("{} {}", framework.name.bold(), format!("({})", framework.id).dimmed());
    if !framework.description.is_empty() {
        println!("{}", framework.description);
    }
    println!(
        "score {:.1}%  progress {:.1}%",
        framework.compliance_score, framework.implementation_progress
    );
    for group in &framework.control_groups {
        println!("\n{}", group.name.bold());
        for control in &group.controls {
            println!("  {:<10} {:<50} {}", control.code, control.title, control.status);
        }
    }
}

pub fn render_policy_list(slice: &CollectionSlice<Policy>) {
    if render_phase_error(slice.list_phase()) {
        return;
    }
    println!(
        "{:<38} {:<32} {:<18} {:<10} {}",
        "ID".bold(),
        "TITLE".bold(),
        "CATEGORY".bold(),
        "VERSION".bold(),
        "STATUS".bold()
    );
    for policy in slice.items() {
        println!(
            "{:<38} {:<32} {:<18} {:<10} {}",
            policy.id, policy.title, policy.category, policy.version, policy.status
        );
    }
    println!("{}", page_footer(slice).dimmed());
}

pub fn render_policy_detail(policy: &Policy) {
    println!("{} {}", policy.title.bold(), format!("({})", policy.id).dimmed());
    println!("category {}  version {}  status {}", policy.category, policy.version, policy.status);
    if !policy.summary.is_empty() {
        println!("\n{}", policy.summary);
    }
    if let Some(document) = &policy.document {
        println!(
            "\ndocument: {} (uploaded {})",
            document.file_name,
            document.uploaded_at.format("%Y-%m-%d")
        );
    }
}

pub fn render_finding_list(slice: &CollectionSlice<Finding>) {
    if render_phase_error(slice.list_phase()) {
        return;
    }
    println!(
        "{:<38} {:<40} {:<10} {:<16} {}",
        "ID".bold(),
        "TITLE".bold(),
        "SEVERITY".bold(),
        "STATUS".bold(),
        "TASKS".bold()
    );
    for finding in slice.items() {
        println!(
            "{:<38} {:<40} {:<10} {:<16} {}/{}",
            finding.id,
            finding.title,
            severity_label(finding.severity),
            finding.status,
            finding.completed_tasks(),
            finding.remediation_tasks.len()
        );
    }
    println!("{}", page_footer(slice).dimmed());
}

pub fn render_finding_detail(finding: &Finding) {
    println!("{} {}", finding.title.bold(), format!("({})", finding.id).dimmed());
    println!(
        "severity {}  status {}  likelihood {}  impact {}",
        severity_label(finding.severity),
        finding.status,
        finding.risk_likelihood,
        finding.risk_impact
    );
    if !finding.description.is_empty() {
        println!("\n{}", finding.description);
    }
    if !finding.remediation_tasks.is_empty() {
        println!("\n{}", "Remediation".bold());
        for task in &finding.remediation_tasks {
            let mark = if task.done { "✔".green().to_string() } else { "·".to_string() };
            println!("  {} {}", mark, task.description);
        }
    }
    if !finding.evidence.is_empty() {
        println!("\n{}", "Evidence".bold());
        for item in &finding.evidence {
            println!("  {} ({})", item.file_name, item.uploaded_at.format("%Y-%m-%d"));
        }
    }
    if !finding.comments.is_empty() {
        println!("\n{}", "Comments".bold());
        for comment in &finding.comments {
            println!(
                "  [{}] {}: {}",
                comment.created_at.format("%Y-%m-%d %H:%M"),
                comment.author,
                comment.body
            );
        }
    }
    if !finding.history.is_empty() {
        println!("\n{}", "History".bold());
        for entry in &finding.history {
            println!("  [{}] {}", entry.at.format("%Y-%m-%d %H:%M"), entry.event);
        }
    }
}

pub fn render_incident_list(slice: &CollectionSlice<Incident>) {
    if render_phase_error(slice.list_phase()) {
        return;
    }
    let now = Utc::now();
    println!(
        "{:<38} {:<36} {:<10} {:<14} {}",
        "ID".bold(),
        "TITLE".bold(),
        "SEVERITY".bold(),
        "STATUS".bold(),
        "SLA".bold()
    );
    for incident in slice.items() {
        let sla = match incident.sla_deadline {
            Some(deadline) if incident.sla_breached(now) => {
                format!("{} {}", deadline.format("%Y-%m-%d %H:%M"), "BREACHED".red().bold())
            }
            Some(deadline) => deadline.format("%Y-%m-%d %H:%M").to_string(),
            None => "-".to_string(),
        };
        println!(
            "{:<38} {:<36} {:<10} {:<14} {}",
            incident.id,
            incident.title,
            severity_label(incident.severity),
            incident.status,
            sla
        );
    }
    println!("{}", page_footer(slice).dimmed());
}

pub fn render_incident_detail(incident: &Incident) {
    println!("{} {}", incident.title.bold(), format!("({})", incident.id).dimmed());
    println!(
        "severity {}  status {}  reported {}",
        severity_label(incident.severity),
        incident.status,
        incident.reported_at.format("%Y-%m-%d %H:%M")
    );
    if let Some(deadline) = incident.sla_deadline {
        let suffix = if incident.sla_breached(Utc::now()) {
            format!(" {}", "BREACHED".red().bold())
        } else {
            String::new()
        };
        println!("SLA deadline {}{}", deadline.format("%Y-%m-%d %H:%M"), suffix);
    }
    if !incident.description.is_empty() {
        println!("\n{}", incident.description);
    }
    if !incident.updates.is_empty() {
        println!("\n{}", "Timeline".bold());
        for update in &incident.updates {
            println!(
                "  [{}] {}: {}",
                update.at.format("%Y-%m-%d %H:%M"),
                update.author,
                update.note
            );
        }
    }
}

pub fn render_course_list(slice: &CollectionSlice<TrainingCourse>) {
    if render_phase_error(slice.list_phase()) {
        return;
    }
    println!(
        "{:<38} {:<36} {:<10} {:>10} {:>8}",
        "ID".bold(),
        "TITLE".bold(),
        "STATUS".bold(),
        "ASSIGNED".bold(),
        "DONE".bold()
    );
    for course in slice.items() {
        let stats = course.completion_stats();
        println!(
            "{:<38} {:<36} {:<10} {:>10} {:>7.0}%",
            course.id,
            course.title,
            course.status,
            stats.assigned,
            stats.rate()
        );
    }
    println!("{}", page_footer(slice).dimmed());
}

pub fn render_course_detail(course: &TrainingCourse) {
    println!("{} {}", course.title.bold(), format!("({})", course.id).dimmed());
    println!("status {}", course.status);
    if !course.description.is_empty() {
        println!("\n{}", course.description);
    }
    let stats = course.completion_stats();
    println!(
        "\n{} assigned, {} completed ({:.0}%), {} overdue",
        stats.assigned,
        stats.completed,
        stats.rate(),
        stats.overdue
    );
    for assignment in &course.assignments {
        let due = assignment
            .due_date
            .map(|d| format!(" due {}", d))
            .unwrap_or_default();
        println!("  {} {}{}", assignment.user_id, assignment.status, due);
    }
}

pub fn render_user(user: &User) {
    println!("{} <{}> - {}", user.name.bold(), user.email, user.role);
}
