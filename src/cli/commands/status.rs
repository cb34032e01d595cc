//! Status command - Portfolio rollup across all projects

use std::collections::BTreeMap;
use std::path::Path;

use chrono::Utc;
use serde_json::json;

use crate::domain::{calculate_progress, count_overdue};
use crate::errors::Result;
use crate::fs::{list_project_ids, read_project};

use super::workspace_root;

/// Show a portfolio rollup across all projects
pub async fn run(cwd: Option<&Path>, json: bool) -> Result<()> {
    let root = workspace_root(cwd)?;
    let now = Utc::now();

    let mut by_status: BTreeMap<String, usize> = BTreeMap::new();
    let mut total = 0usize;
    let mut total_overdue = 0usize;
    let mut progress_sum = 0u32;

    for id in list_project_ids(&root)? {
        let project = read_project(&root, &id)?;
        *by_status.entry(project.status.to_string()).or_insert(0) += 1;
        total += 1;
        total_overdue += count_overdue(&project.milestones, now);
        progress_sum += calculate_progress(&project.milestones) as u32;
    }

    let average_progress = if total == 0 { 0 } else { progress_sum / total as u32 };

    if json {
        let output = json!({
            "projects": total,
            "by_status": by_status,
            "overdue_milestones": total_overdue,
            "average_progress": average_progress,
        });
        println!("{}", serde_json::to_string_pretty(&output).unwrap_or_default());
        return Ok(());
    }

    println!("{} projects, average progress {}%", total, average_progress);
    for (status, count) in &by_status {
        println!("  {}: {}", status, count);
    }
    if total_overdue > 0 {
        println!("  overdue milestones across portfolio: {}", total_overdue);
    }

    Ok(())
}
