//! Configuration management commands

use anyhow::{Context, Result};
use clap::Subcommand;
use serde::Serialize;

use crate::cli::output::{OutputFormat, print_formatted, print_success};
use crate::config::Config;

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Get a specific config value
    Get {
        /// Config key (e.g., "server.url", "browse.page_size")
        key: String,
    },

    /// Set a config value
    Set {
        /// Config key (e.g., "server.url", "browse.page_size")
        key: String,

        /// Value to set
        value: String,
    },

    /// Show config file path
    Path,
}

#[derive(Serialize)]
struct ConfigPathResult {
    path: String,
    exists: bool,
}

pub async fn run(command: ConfigCommands, format: OutputFormat, quiet: bool) -> Result<()> {
    match command {
        ConfigCommands::Show => show(format).await,
        ConfigCommands::Get { key } => get(&key, format).await,
        ConfigCommands::Set { key, value } => set(&key, &value, quiet).await,
        ConfigCommands::Path => path(format).await,
    }
}

async fn show(format: OutputFormat) -> Result<()> {
    let config = Config::load()?;

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&config)?;
            println!("{}", json);
        }
        OutputFormat::Text => {
            let toml = toml::to_string_pretty(&config)?;
            println!("{}", toml);
        }
    }

    Ok(())
}

async fn get(key: &str, format: OutputFormat) -> Result<()> {
    let config = Config::load()?;
    let value = get_config_value(&config, key)?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string(&value)?);
        }
        OutputFormat::Text => {
            println!("{}", value);
        }
    }

    Ok(())
}

fn get_config_value(config: &Config, key: &str) -> Result<String> {
    let parts: Vec<&str> = key.split('.').collect();

    match parts.as_slice() {
        ["server", "url"] => Ok(config.server.url.clone()),
        ["browse", "page_size"] => Ok(config.browse.page_size.to_string()),
        ["browse", "complete"] => Ok(config.browse.complete.to_string()),
        ["browse", "incomplete"] => Ok(config.browse.incomplete.to_string()),
        ["browse", "ignored"] => Ok(config.browse.ignored.to_string()),
        ["browse", "one_region"] => Ok(config.browse.one_region.to_string()),
        _ => anyhow::bail!("Unknown config key: {}", key),
    }
}

async fn set(key: &str, value: &str, quiet: bool) -> Result<()> {
    let mut config = Config::load()?;

    set_config_value(&mut config, key, value)?;
    config.save()?;

    print_success(&format!("Set {} = {}", key, value), quiet);
    Ok(())
}

fn set_config_value(config: &mut Config, key: &str, value: &str) -> Result<()> {
    let parts: Vec<&str> = key.split('.').collect();

    match parts.as_slice() {
        ["server", "url"] => {
            let server = crate::config::ServerConfig {
                url: value.to_string(),
            };
            server.endpoint()?;
            config.server = server;
        }
        ["browse", "page_size"] => {
            let page_size: usize = value
                .parse()
                .with_context(|| format!("Invalid page size: {}", value))?;
            if page_size == 0 {
                anyhow::bail!("Page size must be at least 1");
            }
            config.browse.page_size = page_size;
        }
        ["browse", "complete"] => {
            config.browse.complete = parse_bool(value)?;
        }
        ["browse", "incomplete"] => {
            config.browse.incomplete = parse_bool(value)?;
        }
        ["browse", "ignored"] => {
            config.browse.ignored = parse_bool(value)?;
        }
        ["browse", "one_region"] => {
            config.browse.one_region = parse_bool(value)?;
        }
        _ => anyhow::bail!("Unknown config key: {}", key),
    }

    Ok(())
}

fn parse_bool(value: &str) -> Result<bool> {
    value
        .parse()
        .with_context(|| format!("Expected true or false, got: {}", value))
}

async fn path(format: OutputFormat) -> Result<()> {
    let path = Config::config_path()?;
    let exists = path.exists();

    let result = ConfigPathResult {
        path: path.to_string_lossy().to_string(),
        exists,
    };

    print_formatted(&result, format, |r| {
        format!("{}{}", r.path, if r.exists { "" } else { " (not found)" })
    });

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_then_get() {
        let mut config = Config::default();
        set_config_value(&mut config, "browse.page_size", "25").unwrap();
        set_config_value(&mut config, "browse.one_region", "true").unwrap();

        assert_eq!(get_config_value(&config, "browse.page_size").unwrap(), "25");
        assert_eq!(get_config_value(&config, "browse.one_region").unwrap(), "true");
    }

    #[test]
    fn test_set_rejects_bad_values() {
        let mut config = Config::default();
        assert!(set_config_value(&mut config, "browse.page_size", "0").is_err());
        assert!(set_config_value(&mut config, "browse.page_size", "many").is_err());
        assert!(set_config_value(&mut config, "browse.ignored", "yes").is_err());
        assert!(set_config_value(&mut config, "server.url", "not a url").is_err());
        assert!(set_config_value(&mut config, "browse.colour", "red").is_err());
        assert_eq!(config.browse.page_size, 100);
        assert_eq!(config.server.url, "http://localhost:8000");
    }
}
