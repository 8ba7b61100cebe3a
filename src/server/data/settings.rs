//! Guild settings store backed by a flat JSON file.
//!
//! This module provides the `SettingsStore` holding the in-memory mapping from guild id
//! to `GuildConfig`. The mapping is loaded once at startup and is the only source of truth
//! afterwards; every write replaces the whole file. The file format is a single JSON
//! object keyed by guild id strings:
//!
//! ```json
//! { "123": { "channelId": "456", "roleId": "789" } }
//! ```
//!
//! Unknown fields are ignored on load so newer files remain readable.

use serde::{Deserialize, Serialize};
use serenity::all::{ChannelId, GuildId, RoleId};
use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::server::{
    error::{settings::SettingsError, AppError},
    model::settings::GuildConfig,
    util::parse::parse_snowflake,
};

/// On-disk representation of a single guild's settings.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GuildConfigRecord {
    channel_id: String,
    role_id: String,
}

impl GuildConfigRecord {
    /// Converts the record into a domain model.
    ///
    /// # Returns
    /// - `Ok(GuildConfig)` - Both ids are valid snowflakes
    /// - `Err(AppError::InternalErr)` - Either id is not a non-zero number
    fn into_config(self) -> Result<GuildConfig, AppError> {
        Ok(GuildConfig {
            channel_id: ChannelId::new(parse_snowflake(self.channel_id)?),
            role_id: RoleId::new(parse_snowflake(self.role_id)?),
        })
    }
}

impl From<&GuildConfig> for GuildConfigRecord {
    fn from(config: &GuildConfig) -> Self {
        Self {
            channel_id: config.channel_id.to_string(),
            role_id: config.role_id.to_string(),
        }
    }
}

/// In-memory guild settings with write-through persistence.
///
/// Cloning is cheap and clones share the same mapping. Serenity dispatches events on
/// separate tasks, so the mapping is guarded by an `RwLock`; `set` holds the write lock
/// until the file has been rewritten so concurrent updates are persisted in order.
#[derive(Clone)]
pub struct SettingsStore {
    /// Location of the persisted settings file.
    path: Arc<PathBuf>,
    /// Guild id to settings mapping.
    settings: Arc<RwLock<HashMap<GuildId, GuildConfig>>>,
}

impl SettingsStore {
    /// Creates a store with no entries that persists to `path` on the first write.
    pub fn empty(path: impl Into<PathBuf>) -> Self {
        Self::with_settings(path.into(), HashMap::new())
    }

    /// Loads the store from the settings file.
    ///
    /// Never fails: a missing file yields an empty store, and an unreadable or
    /// malformed file is logged as a warning and also yields an empty store.
    /// Individual entries with invalid ids are skipped with a warning.
    ///
    /// # Arguments
    /// - `path` - Location of the settings file
    ///
    /// # Returns
    /// - `SettingsStore` - Store populated with every valid entry in the file
    pub async fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();

        let settings = match read_settings(&path).await {
            Ok(Some(settings)) => {
                tracing::info!(
                    "Loaded settings for {} guild(s) from {:?}",
                    settings.len(),
                    path
                );
                settings
            }
            Ok(None) => {
                tracing::info!(
                    "No settings file at {:?}, starting with an empty configuration",
                    path
                );
                HashMap::new()
            }
            Err(e) => {
                tracing::warn!("{}; starting with an empty configuration", e);
                HashMap::new()
            }
        };

        Self::with_settings(path, settings)
    }

    fn with_settings(path: PathBuf, settings: HashMap<GuildId, GuildConfig>) -> Self {
        Self {
            path: Arc::new(path),
            settings: Arc::new(RwLock::new(settings)),
        }
    }

    /// Gets the settings for a guild.
    ///
    /// # Returns
    /// - `Some(GuildConfig)` - The guild has been configured
    /// - `None` - The guild has never run `setup`
    pub async fn get(&self, guild_id: GuildId) -> Option<GuildConfig> {
        self.settings.read().await.get(&guild_id).copied()
    }

    /// Stores the settings for a guild, replacing any existing entry, and rewrites the file.
    ///
    /// The in-memory entry is updated before persisting and stays updated even if the
    /// write fails, so enforcement follows the new settings immediately.
    ///
    /// # Arguments
    /// - `guild_id` - Guild being configured
    /// - `channel_id` - Channel to monitor
    /// - `role_id` - Role allowed to post in the monitored channel
    ///
    /// # Returns
    /// - `Ok(())` - Entry stored and file rewritten
    /// - `Err(AppError::SettingsErr)` - Entry stored in memory but the file could not be written
    pub async fn set(
        &self,
        guild_id: GuildId,
        channel_id: ChannelId,
        role_id: RoleId,
    ) -> Result<(), AppError> {
        let mut settings = self.settings.write().await;

        settings.insert(
            guild_id,
            GuildConfig {
                channel_id,
                role_id,
            },
        );

        write_settings(&self.path, &settings).await?;

        tracing::debug!("Persisted settings for guild {} to {:?}", guild_id, self.path);

        Ok(())
    }

    /// Number of configured guilds.
    pub async fn len(&self) -> usize {
        self.settings.read().await.len()
    }
}

/// Reads and parses the settings file.
///
/// # Returns
/// - `Ok(Some(map))` - File parsed, invalid entries dropped
/// - `Ok(None)` - File does not exist
/// - `Err(SettingsError)` - File unreadable or not a JSON object of records
async fn read_settings(
    path: &Path,
) -> Result<Option<HashMap<GuildId, GuildConfig>>, SettingsError> {
    let contents = match tokio::fs::read_to_string(path).await {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(SettingsError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    let records: HashMap<String, GuildConfigRecord> =
        serde_json::from_str(&contents).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    let mut settings = HashMap::with_capacity(records.len());

    for (guild_id, record) in records {
        let entry = parse_snowflake(guild_id.clone())
            .and_then(|id| Ok((GuildId::new(id), record.into_config()?)));

        match entry {
            Ok((guild_id, config)) => {
                settings.insert(guild_id, config);
            }
            Err(e) => {
                tracing::warn!("Skipping settings entry for guild '{}': {}", guild_id, e);
            }
        }
    }

    Ok(Some(settings))
}

/// Writes the full mapping to a sibling temporary file and renames it over `path`,
/// so an interrupted write never leaves a truncated settings file behind.
async fn write_settings(
    path: &Path,
    settings: &HashMap<GuildId, GuildConfig>,
) -> Result<(), SettingsError> {
    let records: BTreeMap<String, GuildConfigRecord> = settings
        .iter()
        .map(|(guild_id, config)| (guild_id.to_string(), GuildConfigRecord::from(config)))
        .collect();

    let json = serde_json::to_string_pretty(&records).map_err(SettingsError::Serialize)?;

    let temp_path = temp_path(path);

    tokio::fs::write(&temp_path, json)
        .await
        .map_err(|source| SettingsError::Write {
            path: temp_path.clone(),
            source,
        })?;

    tokio::fs::rename(&temp_path, path)
        .await
        .map_err(|source| SettingsError::Write {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(())
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".tmp");
    PathBuf::from(name)
}
