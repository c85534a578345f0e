//! Config subcommands handler

use anyhow::{bail, Result};
use std::path::Path;

use segplay::theme::current_theme;
use segplay::Config;

/// Show the effective configuration as TOML.
#[cfg(not(tarpaulin_include))]
pub fn handle_show(config: &Config) -> Result<()> {
    let toml_str = toml::to_string_pretty(config)?;
    let theme = current_theme();
    println!("{}", theme.primary_text(&toml_str));
    Ok(())
}

/// Print the config file location, marking whether it exists.
pub fn handle_path(config_path: &Path) -> Result<()> {
    let theme = current_theme();
    let suffix = if config_path.exists() {
        String::new()
    } else {
        format!(" {}", theme.secondary_text("(not created yet)"))
    };
    println!("{}{}", config_path.display(), suffix);
    Ok(())
}

/// Write the default configuration to `config_path`.
///
/// Refuses to overwrite an existing file unless `force` is set.
pub fn handle_init(config_path: &Path, force: bool) -> Result<()> {
    let theme = current_theme();

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {} (use --force to overwrite)",
            config_path.display()
        );
    }

    Config::default().save_to(config_path)?;
    println!(
        "{}",
        theme.success_text(&format!("Config written to {}", config_path.display()))
    );
    Ok(())
}
