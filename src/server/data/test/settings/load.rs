use super::*;

/// Tests loading a well-formed settings file.
///
/// Verifies that every entry in the file is available through `get` with typed ids.
///
/// Expected: Ok with the single configured guild loaded
#[tokio::test]
async fn loads_valid_settings_file() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_settings_file(settings::single_guild())
        .build()?;

    let store = SettingsStore::load(&test.settings_path).await;

    assert_eq!(store.len().await, 1);
    assert_eq!(
        store.get(GuildId::new(GUILD_ID)).await,
        Some(GuildConfig {
            channel_id: ChannelId::new(CHANNEL_ID),
            role_id: RoleId::new(ROLE_ID),
        })
    );

    Ok(())
}

/// Tests loading when no settings file exists yet.
///
/// Expected: Ok with an empty store
#[tokio::test]
async fn missing_file_yields_empty_store() -> Result<(), TestError> {
    let test = TestBuilder::new().build()?;

    let store = SettingsStore::load(&test.settings_path).await;

    assert_eq!(store.len().await, 0);
    assert!(!test.settings_path.exists());

    Ok(())
}

/// Tests loading a truncated settings file.
///
/// Verifies that a parse failure is not fatal and falls back to an empty store.
///
/// Expected: Ok with an empty store
#[tokio::test]
async fn malformed_file_yields_empty_store() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_settings_file(settings::malformed())
        .build()?;

    let store = SettingsStore::load(&test.settings_path).await;

    assert_eq!(store.len().await, 0);
    assert_eq!(store.get(GuildId::new(GUILD_ID)).await, None);

    Ok(())
}

/// Tests loading a file whose top-level value is not an object.
///
/// Expected: Ok with an empty store
#[tokio::test]
async fn non_object_file_yields_empty_store() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_settings_file("[1, 2, 3]")
        .build()?;

    let store = SettingsStore::load(&test.settings_path).await;

    assert_eq!(store.len().await, 0);

    Ok(())
}

/// Tests that fields unknown to this version are ignored.
///
/// Expected: Ok with the entry loaded
#[tokio::test]
async fn ignores_unknown_fields() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_settings_file(settings::with_unknown_fields())
        .build()?;

    let store = SettingsStore::load(&test.settings_path).await;

    let config = store.get(GuildId::new(GUILD_ID)).await;
    assert_eq!(config.map(|c| c.role_id), Some(RoleId::new(ROLE_ID)));

    Ok(())
}

/// Tests that entries with unusable ids are dropped individually.
///
/// Verifies that a non-numeric guild key and a zero channel id are skipped while the
/// valid entry next to them still loads.
///
/// Expected: Ok with only the valid entry loaded
#[tokio::test]
async fn skips_entries_with_invalid_ids() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_settings_file(settings::with_invalid_entries())
        .build()?;

    let store = SettingsStore::load(&test.settings_path).await;

    assert_eq!(store.len().await, 1);
    assert!(store.get(GuildId::new(GUILD_ID)).await.is_some());
    assert!(store.get(GuildId::new(42)).await.is_none());

    Ok(())
}
