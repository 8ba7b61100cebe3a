use std::path::PathBuf;
use std::time::Duration;

use serenity::all::{ApplicationId, ChannelId, GuildId};

use crate::server::{
    error::{config::ConfigError, AppError},
    util::parse::parse_snowflake,
};

const DEFAULT_SETTINGS_PATH: &str = "settings.json";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_RESTART_INTERVAL_HOURS: u64 = 24;

pub struct Config {
    pub discord_token: String,
    pub application_id: ApplicationId,
    /// Registers commands on this guild only when set, globally otherwise.
    pub command_guild_id: Option<GuildId>,

    pub log_channel_id: ChannelId,

    pub settings_path: PathBuf,
    pub port: u16,
    /// Time between scheduled restarts. Each one exits with
    /// `scheduler::restart::RESTART_EXIT_CODE` for the supervisor to relaunch.
    pub restart_interval: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let application_id = parse_id("CLIENT_ID", required("CLIENT_ID")?)?;
        let log_channel_id = parse_channel_reference("LOG_CHANNEL_ID", required("LOG_CHANNEL_ID")?)?;

        let command_guild_id = match optional("GUILD_ID") {
            Some(value) => Some(GuildId::new(parse_id("GUILD_ID", value)?)),
            None => None,
        };

        let port = match optional("PORT") {
            Some(value) => value
                .parse::<u16>()
                .map_err(|_| invalid("PORT", &value))?,
            None => DEFAULT_PORT,
        };

        let restart_interval = parse_restart_interval(optional("RESTART_INTERVAL_HOURS"))?;

        Ok(Self {
            discord_token: required("DISCORD_TOKEN")?,
            application_id: ApplicationId::new(application_id),
            command_guild_id,
            log_channel_id: ChannelId::new(log_channel_id),
            settings_path: optional("SETTINGS_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_SETTINGS_PATH)),
            port,
            restart_interval,
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

/// Unset and blank variables are both treated as absent.
fn optional(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn invalid(name: &str, value: &str) -> ConfigError {
    ConfigError::InvalidEnvVar {
        name: name.to_string(),
        value: value.to_string(),
    }
}

/// Parses a non-zero snowflake, reporting the variable name on failure.
fn parse_id(name: &str, value: String) -> Result<u64, ConfigError> {
    parse_snowflake(value.clone()).map_err(|_| invalid(name, &value))
}

/// Converts `RESTART_INTERVAL_HOURS` into a duration, defaulting when unset.
///
/// Zero and intervals whose length in seconds does not fit in a `u64` are rejected.
fn parse_restart_interval(value: Option<String>) -> Result<Duration, ConfigError> {
    let Some(value) = value else {
        return Ok(Duration::from_secs(DEFAULT_RESTART_INTERVAL_HOURS * 60 * 60));
    };

    value
        .parse::<u64>()
        .ok()
        .filter(|hours| *hours > 0)
        .and_then(|hours| hours.checked_mul(60 * 60))
        .map(Duration::from_secs)
        .ok_or_else(|| invalid("RESTART_INTERVAL_HOURS", &value))
}

/// Accepts either a raw channel id or a channel link such as
/// `https://discord.com/channels/<guild>/<channel>`, in which case the last
/// path segment is the channel id.
pub fn parse_channel_reference(name: &str, value: String) -> Result<u64, ConfigError> {
    let segment = value
        .trim()
        .trim_end_matches('/')
        .rsplit('/')
        .next()
        .unwrap_or_default()
        .to_string();

    parse_id(name, segment).map_err(|_| invalid(name, &value))
}
