//! List command - List projects with progress and overdue summaries

use std::path::Path;

use chrono::Utc;
use serde_json::json;

use crate::domain::{annotate_overdue, calculate_progress, count_overdue};
use crate::errors::Result;
use crate::fs::{list_project_ids, read_project};
use crate::presentation::project_badge;
use crate::schemas::ProjectStatus;

use super::workspace_root;

/// List projects with optional status filtering
pub async fn run(cwd: Option<&Path>, json: bool, status: Option<&str>) -> Result<()> {
    let root = workspace_root(cwd)?;
    let filter = status.map(str::parse::<ProjectStatus>).transpose()?;
    let now = Utc::now();

    let mut rows = Vec::new();
    for id in list_project_ids(&root)? {
        let project = read_project(&root, &id)?;
        if let Some(wanted) = filter {
            if project.status != wanted {
                continue;
            }
        }
        let annotated = annotate_overdue(&project, now);
        rows.push((
            annotated.id.clone(),
            annotated.title.clone(),
            project.status,
            calculate_progress(&annotated.milestones),
            count_overdue(&annotated.milestones, now),
        ));
    }

    if json {
        let items: Vec<_> = rows
            .iter()
            .map(|(id, title, status, progress, overdue)| {
                json!({
                    "id": id,
                    "title": title,
                    "status": status,
                    "label": project_badge(*status).label,
                    "progress": progress,
                    "overdue_milestones": overdue,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&items).unwrap_or_default());
    } else if rows.is_empty() {
        println!("No projects found");
    } else {
        for (id, title, status, progress, overdue) in rows {
            let badge = project_badge(status);
            let overdue_note = if overdue > 0 {
                format!(", {} overdue", overdue)
            } else {
                String::new()
            };
            println!(
                "{}  [{}] {}  ({}%{})",
                id, badge.label, title, progress, overdue_note
            );
        }
    }

    Ok(())
}
