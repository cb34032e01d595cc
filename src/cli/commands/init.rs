//! Init command - Initialize a grantflow workspace

use std::fs;
use std::path::Path;

use crate::errors::{GrantflowError, Result};
use crate::fs::{get_config_path, get_grantflow_dir, get_projects_dir, resolve_cwd, write_json};
use crate::schemas::Config;

/// Initialize a grantflow workspace in the specified directory
pub async fn run(cwd: Option<&Path>, force: bool) -> Result<()> {
    let root = resolve_cwd(cwd);
    let grantflow_dir = get_grantflow_dir(&root);

    if grantflow_dir.exists() && !force {
        return Err(GrantflowError::ConfigError(format!(
            "{} already exists (use --force to reinitialize)",
            grantflow_dir.display()
        )));
    }

    fs::create_dir_all(get_projects_dir(&root))?;
    write_json(&get_config_path(&root), &Config::default())?;

    println!("Initialized grantflow workspace at {}", grantflow_dir.display());
    Ok(())
}
