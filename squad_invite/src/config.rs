use anyhow::Context;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

use std::{fs::File, io::Read, path::Path};

/// Command keywords used when the configuration doesn't list any
pub const DEFAULT_COMMANDS: &[&str] = &["invite", "inv", "please", "инвайт", "инв", "штм"];

fn default_commands() -> Vec<String>
{
    DEFAULT_COMMANDS.iter().map(|c| c.to_string()).collect()
}

#[derive(Debug,Error)]
pub enum ConfigError
{
    #[error("Required option '{0}' is missing")]
    MissingOption(&'static str),
    #[error("Invalid playtime service URL '{0}'")]
    InvalidUrl(String),
    #[error("No chat commands configured")]
    NoCommands,
    #[error("Couldn't parse options: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Options for the [`InviteToSquad`](crate::InviteToSquad) plugin
#[derive(Debug,Clone,PartialEq,Eq,Serialize,Deserialize)]
pub struct InviteToSquadConfig
{
    #[serde(default)]
    pub playtime_service_api_url: String,
    #[serde(default)]
    pub playtime_service_api_secret_key: String,
    #[serde(default = "default_commands")]
    pub commands: Vec<String>,
}

/// Describes one plugin option, for host-side documentation and config generation
#[derive(Debug,Clone,PartialEq,Serialize)]
pub struct OptionSpec
{
    pub name: &'static str,
    pub required: bool,
    pub description: &'static str,
    pub default: serde_json::Value,
}

impl InviteToSquadConfig
{
    pub fn new(playtime_service_api_url: impl Into<String>, playtime_service_api_secret_key: impl Into<String>) -> Self
    {
        Self {
            playtime_service_api_url: playtime_service_api_url.into(),
            playtime_service_api_secret_key: playtime_service_api_secret_key.into(),
            commands: default_commands(),
        }
    }

    /// Build from options the host has already parsed
    pub fn from_json(options: serde_json::Value) -> Result<Self, ConfigError>
    {
        let config: Self = serde_json::from_value(options)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a file
    pub fn load_file<P: AsRef<Path>>(filename: P) -> Result<Self, anyhow::Error>
    {
        let filename = filename.as_ref();
        let mut file = File::open(filename).with_context(|| format!("Couldn't open {}", filename.display()))?;
        let mut config = String::new();
        file.read_to_string(&mut config)?;

        let config: Self = json5::from_str(&config).with_context(|| format!("Couldn't parse {}", filename.display()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError>
    {
        if self.playtime_service_api_url.is_empty()
        {
            return Err(ConfigError::MissingOption("playtime_service_api_url"));
        }
        if self.playtime_service_api_secret_key.is_empty()
        {
            return Err(ConfigError::MissingOption("playtime_service_api_secret_key"));
        }
        if Url::parse(&self.playtime_service_api_url).is_err()
        {
            return Err(ConfigError::InvalidUrl(self.playtime_service_api_url.clone()));
        }
        if self.commands.iter().all(|c| c.trim().is_empty())
        {
            return Err(ConfigError::NoCommands);
        }
        Ok(())
    }

    /// The configured commands, without blanks or repeats, in their original order
    pub fn unique_commands(&self) -> Vec<&str>
    {
        let mut seen = Vec::new();
        for command in self.commands.iter().map(|c| c.trim()).filter(|c| !c.is_empty())
        {
            if !seen.contains(&command)
            {
                seen.push(command);
            }
        }
        seen
    }

    pub fn options_specification() -> Vec<OptionSpec>
    {
        vec![
            OptionSpec {
                name: "playtime_service_api_url",
                required: true,
                description: "URL to Playtime Service API",
                default: serde_json::Value::from(""),
            },
            OptionSpec {
                name: "playtime_service_api_secret_key",
                required: true,
                description: "Secret key for Playtime Service API",
                default: serde_json::Value::from(""),
            },
            OptionSpec {
                name: "commands",
                required: false,
                description: "Commands to invite to squad leader",
                default: serde_json::Value::from(default_commands()),
            },
        ]
    }
}
