//! Show or write the service policy config

use std::path::Path;

use fleetcheck::config::GlobalConfig;
use fleetcheck::output::OutputMode;

/// Print the effective config, or write it out with `init`
///
/// `path` is the `--config` override; without it the global config file is used.
pub fn config(
    path: Option<&Path>,
    config: &GlobalConfig,
    init: bool,
    force: bool,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let target = path.map_or_else(GlobalConfig::config_path, Path::to_path_buf);

    if init {
        if target.exists() && !force {
            println!("Already initialized ({} exists).", target.display());
            println!("Use --force to overwrite.");
            return Ok(());
        }
        match path {
            Some(path) => config.save_to(path)?,
            None => config.save()?,
        }
        log::info!("wrote {}", target.display());
    }

    match mode {
        OutputMode::Json => println!("{}", serde_json::to_string_pretty(config)?),
        OutputMode::Human => {
            println!("# {}", target.display());
            print!("{}", toml::to_string_pretty(config)?);
        },
    }
    Ok(())
}
