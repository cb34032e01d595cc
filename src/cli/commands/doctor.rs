//! Doctor command - Validate all project files in the workspace

use std::path::Path;

use crate::domain::validate_project;
use crate::errors::{GrantflowError, Result};
use crate::fs::{list_project_ids, read_project};

use super::workspace_root;

/// Validate all project files in the workspace
pub async fn run(cwd: Option<&Path>) -> Result<()> {
    let root = workspace_root(cwd)?;
    let ids = list_project_ids(&root)?;

    let mut failures = 0usize;
    for id in &ids {
        let outcome = read_project(&root, id).and_then(|p| validate_project(&p));
        match outcome {
            Ok(()) => println!("{}: ok", id),
            Err(e) => {
                failures += 1;
                println!("{}: {} ({})", id, e, e.code());
            }
        }
    }

    if failures > 0 {
        return Err(GrantflowError::SchemaValidation(format!(
            "{} of {} projects failed validation",
            failures,
            ids.len()
        )));
    }

    println!("{} projects validated", ids.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::write_project;
    use crate::schemas::{Milestone, Project, Requisition};
    use chrono::Utc;
    use tempfile::TempDir;

    fn setup() -> TempDir {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir_all(temp.path().join(".grantflow").join("projects")).unwrap();
        temp
    }

    fn valid_project(id: &str) -> Project {
        let now = Utc::now();
        Project::new(
            id.to_string(),
            "app-042".to_string(),
            "Coastal erosion monitoring".to_string(),
            "2025-01-01".to_string(),
            "2025-12-31".to_string(),
            now,
        )
        .with_milestone(
            Milestone::new(
                "m-001".to_string(),
                "Baseline survey".to_string(),
                "Complete the baseline shoreline survey".to_string(),
                "2025-04-01".to_string(),
            ),
            now,
        )
    }

    #[tokio::test]
    async fn test_doctor_passes_valid_workspace() {
        let temp = setup();
        write_project(temp.path(), &valid_project("proj-001")).unwrap();
        write_project(temp.path(), &valid_project("proj-002")).unwrap();

        run(Some(temp.path())).await.unwrap();
    }

    #[tokio::test]
    async fn test_doctor_reports_dangling_reference() {
        let temp = setup();
        let mut project = valid_project("proj-001");
        project.requisitions.push(Requisition::new(
            "req-001".to_string(),
            "m-404".to_string(),
            100.0,
            Utc::now().to_rfc3339(),
            "Misc".to_string(),
        ));
        write_project(temp.path(), &project).unwrap();

        let err = run(Some(temp.path())).await.unwrap_err();
        assert_eq!(err.code(), "SCHEMA_VALIDATION");
    }
}
