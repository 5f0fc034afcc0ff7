use solcasa_domain::{CliOverrides, Config};

/// Load and validate configuration. Runs before logging is initialized.
pub fn load_config(
    config_path: Option<&str>,
    cli_overrides: CliOverrides,
) -> anyhow::Result<Config> {
    let config = Config::load(config_path, cli_overrides)?;
    config.validate()?;
    Ok(config)
}
