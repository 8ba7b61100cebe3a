use super::*;

/// Tests that `set` writes the documented JSON layout.
///
/// Verifies that the file is a JSON object keyed by guild id string with camelCase
/// string ids.
///
/// Expected: Ok with the file matching the written entry
#[tokio::test]
async fn persists_camel_case_string_ids() -> Result<(), AppError> {
    let test = TestBuilder::new().build().unwrap();
    let store = SettingsStore::empty(&test.settings_path);

    store
        .set(
            GuildId::new(GUILD_ID),
            ChannelId::new(CHANNEL_ID),
            RoleId::new(ROLE_ID),
        )
        .await?;

    let contents = test.read_settings_file()?;
    let json: serde_json::Value = serde_json::from_str(&contents).unwrap();

    assert_eq!(
        json,
        serde_json::json!({
            GUILD_ID.to_string(): {
                "channelId": CHANNEL_ID.to_string(),
                "roleId": ROLE_ID.to_string(),
            }
        })
    );

    Ok(())
}

/// Tests that a store reloaded from disk equals the store that wrote it.
///
/// Expected: Ok with every guild round-tripping unchanged
#[tokio::test]
async fn reload_round_trips_written_settings() -> Result<(), AppError> {
    let test = TestBuilder::new().build().unwrap();
    let store = SettingsStore::empty(&test.settings_path);

    store
        .set(GuildId::new(1), ChannelId::new(10), RoleId::new(100))
        .await?;
    store
        .set(GuildId::new(2), ChannelId::new(20), RoleId::new(200))
        .await?;

    let reloaded = SettingsStore::load(&test.settings_path).await;

    assert_eq!(reloaded.len().await, 2);
    for guild_id in [GuildId::new(1), GuildId::new(2)] {
        assert_eq!(reloaded.get(guild_id).await, store.get(guild_id).await);
    }

    Ok(())
}

/// Tests that `set` replaces an existing entry for the same guild.
///
/// Expected: Ok with the second pair stored both in memory and on disk
#[tokio::test]
async fn overwrites_existing_entry() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_settings_file(settings::single_guild())
        .build()
        .unwrap();
    let store = SettingsStore::load(&test.settings_path).await;

    store
        .set(GuildId::new(GUILD_ID), ChannelId::new(11), RoleId::new(22))
        .await?;

    let expected = Some(GuildConfig {
        channel_id: ChannelId::new(11),
        role_id: RoleId::new(22),
    });
    assert_eq!(store.len().await, 1);
    assert_eq!(store.get(GuildId::new(GUILD_ID)).await, expected);

    let reloaded = SettingsStore::load(&test.settings_path).await;
    assert_eq!(reloaded.get(GuildId::new(GUILD_ID)).await, expected);

    Ok(())
}

/// Tests that no temporary file is left next to the settings file.
///
/// Expected: Ok with only `settings.json` in the directory
#[tokio::test]
async fn leaves_no_temporary_file() -> Result<(), AppError> {
    let test = TestBuilder::new().build().unwrap();
    let store = SettingsStore::empty(&test.settings_path);

    store
        .set(GuildId::new(1), ChannelId::new(2), RoleId::new(3))
        .await?;

    let entries: Vec<_> = std::fs::read_dir(test.dir.path())?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.file_name())
        .collect();
    assert_eq!(entries, vec![std::ffi::OsString::from("settings.json")]);

    Ok(())
}

/// Tests a write failure.
///
/// Verifies that the failure is surfaced to the caller while the in-memory entry is
/// still updated so enforcement follows the new settings.
///
/// Expected: Err(SettingsErr::Write) and the entry readable through `get`
#[tokio::test]
async fn surfaces_write_failure_but_keeps_entry() -> Result<(), TestError> {
    let test = TestBuilder::new().build()?;
    let store = SettingsStore::empty(test.unwritable_path());

    let result = store
        .set(GuildId::new(1), ChannelId::new(2), RoleId::new(3))
        .await;

    assert!(matches!(
        result,
        Err(AppError::SettingsErr(SettingsError::Write { .. }))
    ));
    assert!(store.get(GuildId::new(1)).await.is_some());

    Ok(())
}
