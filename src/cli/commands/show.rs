//! Show command - Show details of a specific project

use std::path::Path;

use chrono::Utc;
use serde_json::json;

use crate::domain::{
    annotate_overdue, available_actions, calculate_progress, count_overdue, parse_instant, Actor,
};
use crate::errors::{GrantflowError, Result};
use crate::fs::read_project;
use crate::presentation::{
    closure_badge, final_report_badge, milestone_badge, project_badge, requisition_badge,
};

use super::{resolve_actor, workspace_root};

/// Show details of a specific project
pub async fn run(
    cwd: Option<&Path>,
    id: &str,
    json: bool,
    as_of: Option<&str>,
    role: Option<&str>,
    email: Option<&str>,
) -> Result<()> {
    let root = workspace_root(cwd)?;
    let actor = resolve_actor(&root, role, email)?;
    let now = match as_of {
        Some(value) => parse_instant(value).ok_or_else(|| {
            GrantflowError::SchemaValidation(format!("cannot parse --as-of instant {:?}", value))
        })?,
        None => Utc::now(),
    };

    let project = annotate_overdue(&read_project(&root, id)?, now);
    let progress = calculate_progress(&project.milestones);
    let overdue = count_overdue(&project.milestones, now);
    let actions = available_actions(&project, &actor);

    if json {
        let output = json!({
            "project": project,
            "progress": progress,
            "overdue_milestones": overdue,
            "available_actions": actions.iter().map(|a| a.to_string()).collect::<Vec<_>>(),
        });
        println!("{}", serde_json::to_string_pretty(&output).unwrap_or_default());
        return Ok(());
    }

    print_project(&project, progress, overdue, &actor);
    Ok(())
}

fn print_project(
    project: &crate::schemas::Project,
    progress: u8,
    overdue: usize,
    actor: &Actor,
) {
    let badge = project_badge(project.status);
    println!("{}  [{}]", project.title, badge.label);
    println!("  id: {}  application: {}", project.id, project.application_id);
    println!("  period: {} to {}", project.start_date, project.end_date);
    println!("  progress: {}%  overdue milestones: {}", progress, overdue);

    if !project.milestones.is_empty() {
        println!("  milestones:");
        for m in &project.milestones {
            let badge = milestone_badge(m.status);
            let overdue_mark = if m.is_overdue == Some(true) { "  OVERDUE" } else { "" };
            let report_mark = if m.progress_report_uploaded { "  report on file" } else { "" };
            println!(
                "    {}  [{}] {} (due {}){}{}",
                m.id, badge.label, m.title, m.due_date, overdue_mark, report_mark
            );
        }
    }

    if !project.requisitions.is_empty() {
        println!("  requisitions:");
        for r in &project.requisitions {
            let badge = requisition_badge(r.status);
            println!(
                "    {}  [{}] {:.2} against {}",
                r.id, badge.label, r.amount, r.milestone_id
            );
        }
    }

    if !project.partners.is_empty() {
        println!("  partners:");
        for p in &project.partners {
            let mou = if p.mou_filename.is_some() { "  MOU on file" } else { "" };
            println!("    {}  {} ({}){}", p.id, p.name, p.role, mou);
        }
    }

    if let Some(report) = &project.final_report {
        let badge = final_report_badge(report.status);
        println!("  final report: [{}]", badge.label);
        if let Some(doc) = &report.narrative_report {
            println!("    narrative: {}", doc.filename);
        }
        if let Some(doc) = &report.financial_report {
            println!("    financial: {}", doc.filename);
        }
    }

    let closure = closure_badge(project.closure_status());
    println!("  closure: [{}]", closure.label);

    let actions = available_actions(project, actor);
    if !actions.is_empty() {
        let names: Vec<_> = actions.iter().map(|a| a.to_string()).collect();
        println!("  available actions for {}: {}", actor.role, names.join(", "));
    }
}
