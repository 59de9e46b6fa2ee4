use std::path::PathBuf;

use tinct_core::config::{save_solver_config, solver_config_handle, SolverConfig};

use super::load_defaults;

/// Print the effective solver configuration as YAML.
pub fn cmd_config_show(config: Option<PathBuf>, verbose: bool) -> Result<(), String> {
    let solver = load_defaults(config.as_deref(), verbose);

    match &solver_config_handle(None).source {
        Some(source) => println!("# Loaded from {}", source.display()),
        None => println!("# Built-in defaults"),
    }
    print!("{}", SolverConfig { solver }.to_yaml()?);
    Ok(())
}

/// Write a config file holding the built-in defaults.
pub fn cmd_config_init(path: PathBuf, force: bool) -> Result<(), String> {
    if path.exists() && !force {
        return Err(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        ));
    }
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .map_err(|e| format!("Failed to create config directory: {}", e))?;
    }

    save_solver_config(&SolverConfig::default(), &path)?;
    println!("Wrote default solver config to {}", path.display());
    Ok(())
}
