use super::*;

/// Tests `status` in a guild that never ran `setup`.
///
/// Verifies that no Discord lookups are made.
///
/// Expected: NotConfigured
#[tokio::test]
async fn unconfigured_guild_reports_not_configured() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_settings_file(settings::single_guild())
        .build()?;
    let store = SettingsStore::load(&test.settings_path).await;
    let actions = MockGuildActions::new();
    let service = CommandService::new(&store, &actions);

    let result = service.status(GuildId::new(GUILD_ID + 1)).await;

    assert_eq!(result, StatusResult::NotConfigured);
    assert!(actions.calls().is_empty());

    Ok(())
}

/// Tests `status` when both configured entities still exist.
///
/// Expected: Configured with both names resolved
#[tokio::test]
async fn resolves_channel_and_role_names() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_settings_file(settings::single_guild())
        .build()?;
    let store = SettingsStore::load(&test.settings_path).await;
    let actions = MockGuildActions::new()
        .with_channel(CHANNEL_ID, "announcements")
        .with_role(ROLE_ID, "Speaker");
    let service = CommandService::new(&store, &actions);

    let result = service.status(GuildId::new(GUILD_ID)).await;

    assert_eq!(
        result,
        StatusResult::Configured {
            channel_name: Some("announcements".to_string()),
            role_name: Some("Speaker".to_string()),
        }
    );
    assert_eq!(
        actions.calls(),
        vec![
            Call::ChannelName(ChannelId::new(CHANNEL_ID)),
            Call::RoleName(GuildId::new(GUILD_ID), RoleId::new(ROLE_ID)),
        ]
    );

    Ok(())
}

/// Tests `status` after the configured role was deleted on Discord.
///
/// Expected: Configured with the channel resolved and the role missing
#[tokio::test]
async fn deleted_role_yields_placeholder() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_settings_file(settings::single_guild())
        .build()?;
    let store = SettingsStore::load(&test.settings_path).await;
    let actions = MockGuildActions::new().with_channel(CHANNEL_ID, "announcements");
    let service = CommandService::new(&store, &actions);

    let result = service.status(GuildId::new(GUILD_ID)).await;

    assert_eq!(
        result,
        StatusResult::Configured {
            channel_name: Some("announcements".to_string()),
            role_name: None,
        }
    );

    Ok(())
}

/// Tests `status` after the configured channel was deleted on Discord.
///
/// Expected: Configured with the channel missing and the role resolved
#[tokio::test]
async fn deleted_channel_yields_placeholder() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_settings_file(settings::single_guild())
        .build()?;
    let store = SettingsStore::load(&test.settings_path).await;
    let actions = MockGuildActions::new().with_role(ROLE_ID, "Speaker");
    let service = CommandService::new(&store, &actions);

    let result = service.status(GuildId::new(GUILD_ID)).await;

    assert_eq!(
        result,
        StatusResult::Configured {
            channel_name: None,
            role_name: Some("Speaker".to_string()),
        }
    );

    Ok(())
}
