//! CLI command implementations

pub mod closure;
pub mod doctor;
pub mod init;
pub mod list;
pub mod milestone;
pub mod partner;
pub mod project;
pub mod report;
pub mod requisition;
pub mod show;
pub mod status;

use std::path::{Path, PathBuf};

use crate::config::load_config;
use crate::domain::Actor;
use crate::errors::Result;
use crate::fs::{find_workspace_root, resolve_cwd};

/// Locate the workspace root from an optional cwd override.
pub(crate) fn workspace_root(cwd: Option<&Path>) -> Result<PathBuf> {
    find_workspace_root(&resolve_cwd(cwd))
}

/// Build the acting identity from CLI overrides and workspace config.
pub(crate) fn resolve_actor(
    root: &Path,
    role: Option<&str>,
    email: Option<&str>,
) -> Result<Actor> {
    let config = load_config(root)?;
    Ok(Actor::new(
        role.map(str::to_string).unwrap_or(config.default_role),
        email.map(str::to_string).unwrap_or(config.default_email),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_resolve_actor_prefers_overrides() {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir(temp.path().join(".grantflow")).unwrap();
        std::fs::write(
            temp.path().join(".grantflow").join("config.json"),
            r#"{"default_role": "Researcher", "default_email": "pi@uni.edu"}"#,
        )
        .unwrap();

        let actor = resolve_actor(temp.path(), Some("Grants Manager"), None).unwrap();
        assert_eq!(actor.role, "Grants Manager");
        assert_eq!(actor.email, "pi@uni.edu");

        let actor = resolve_actor(temp.path(), None, None).unwrap();
        assert_eq!(actor.role, "Researcher");
    }

    #[test]
    fn test_workspace_root_errors_outside_workspace() {
        let temp = TempDir::new().unwrap();
        assert!(workspace_root(Some(temp.path())).is_err());
    }
}
