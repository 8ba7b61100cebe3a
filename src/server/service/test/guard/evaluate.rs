use super::*;

/// Tests that direct messages are never moderated.
///
/// Expected: Ignored(DirectMessage) with no calls
#[tokio::test]
async fn ignores_direct_messages() -> Result<(), TestError> {
    let (store, _test) = configured_store().await?;
    let actions = MockGuildActions::new();
    let guard = MessageGuardService::new(&store, &actions);

    let mut message = guild_message(CHANNEL_ID, &[]);
    message.guild_id = None;

    let outcome = guard.evaluate(&message).await;

    assert!(matches!(
        outcome,
        GuardOutcome::Ignored(IgnoreReason::DirectMessage)
    ));
    assert!(actions.calls().is_empty());

    Ok(())
}

/// Tests that bot and webhook authors are never moderated.
///
/// Expected: Ignored(AutomatedAuthor) with no calls
#[tokio::test]
async fn ignores_automated_authors() -> Result<(), TestError> {
    let (store, _test) = configured_store().await?;
    let actions = MockGuildActions::new();
    let guard = MessageGuardService::new(&store, &actions);

    let mut message = guild_message(CHANNEL_ID, &[]);
    message.author_is_automated = true;

    let outcome = guard.evaluate(&message).await;

    assert!(matches!(
        outcome,
        GuardOutcome::Ignored(IgnoreReason::AutomatedAuthor)
    ));
    assert!(actions.calls().is_empty());

    Ok(())
}

/// Tests a message in a guild without settings.
///
/// Expected: Ignored(GuildNotConfigured) with no calls
#[tokio::test]
async fn unconfigured_guild_takes_no_action() -> Result<(), TestError> {
    let test = TestBuilder::new().build()?;
    let store = SettingsStore::load(&test.settings_path).await;
    let actions = MockGuildActions::new();
    let guard = MessageGuardService::new(&store, &actions);

    let outcome = guard.evaluate(&guild_message(CHANNEL_ID, &[])).await;

    assert!(matches!(
        outcome,
        GuardOutcome::Ignored(IgnoreReason::GuildNotConfigured)
    ));
    assert!(actions.calls().is_empty());

    Ok(())
}

/// Tests messages outside the monitored channel, with and without the allowed role.
///
/// Expected: Ignored(UnmonitoredChannel) with no calls in both cases
#[tokio::test]
async fn unmonitored_channel_takes_no_action_regardless_of_role() -> Result<(), TestError> {
    let (store, _test) = configured_store().await?;
    let actions = MockGuildActions::new();
    let guard = MessageGuardService::new(&store, &actions);

    for roles in [&[][..], &[ROLE_ID][..]] {
        let outcome = guard.evaluate(&guild_message(OTHER_CHANNEL_ID, roles)).await;

        assert!(matches!(
            outcome,
            GuardOutcome::Ignored(IgnoreReason::UnmonitoredChannel)
        ));
    }
    assert!(actions.calls().is_empty());

    Ok(())
}

/// Tests a member holding the allowed role among others.
///
/// Expected: Ignored(AllowedRole) with no warn or delete
#[tokio::test]
async fn allowed_role_takes_no_action() -> Result<(), TestError> {
    let (store, _test) = configured_store().await?;
    let actions = MockGuildActions::new();
    let guard = MessageGuardService::new(&store, &actions);

    let outcome = guard
        .evaluate(&guild_message(CHANNEL_ID, &[123, ROLE_ID]))
        .await;

    assert!(matches!(
        outcome,
        GuardOutcome::Ignored(IgnoreReason::AllowedRole)
    ));
    assert!(actions.side_effects().is_empty());

    Ok(())
}

/// Tests a member without the allowed role posting in the monitored channel.
///
/// Verifies exactly one warning naming the channel followed by exactly one deletion.
///
/// Expected: Enforced with both side effects succeeding, warn before delete
#[tokio::test]
async fn offender_is_warned_then_message_deleted() -> Result<(), TestError> {
    let (store, _test) = configured_store().await?;
    let actions = MockGuildActions::new().with_channel(CHANNEL_ID, "announcements");
    let guard = MessageGuardService::new(&store, &actions);

    let outcome = guard.evaluate(&guild_message(CHANNEL_ID, &[123])).await;

    assert!(matches!(
        outcome,
        GuardOutcome::Enforced {
            warned: Ok(()),
            deleted: Ok(()),
        }
    ));
    assert_eq!(
        actions.side_effects(),
        vec![
            Call::DirectMessage(
                UserId::new(AUTHOR_ID),
                "⚠️ あなたは「#announcements」での発言権限がありません。".to_string(),
            ),
            Call::Delete(ChannelId::new(CHANNEL_ID), MessageId::new(MESSAGE_ID)),
        ]
    );

    Ok(())
}

/// Tests an author with direct messages disabled.
///
/// Expected: Enforced with the warning failed and the deletion still performed
#[tokio::test]
async fn failed_warning_does_not_prevent_deletion() -> Result<(), TestError> {
    let (store, _test) = configured_store().await?;
    let actions = MockGuildActions::new()
        .with_channel(CHANNEL_ID, "announcements")
        .failing_direct_messages();
    let guard = MessageGuardService::new(&store, &actions);

    let outcome = guard.evaluate(&guild_message(CHANNEL_ID, &[])).await;

    assert!(matches!(
        outcome,
        GuardOutcome::Enforced {
            warned: Err(_),
            deleted: Ok(()),
        }
    ));
    assert_eq!(
        actions
            .side_effects()
            .iter()
            .filter(|call| matches!(call, Call::Delete(..)))
            .count(),
        1
    );

    Ok(())
}

/// Tests a deletion failure, such as missing permissions.
///
/// Expected: Enforced with the warning sent and the deletion failure reported
#[tokio::test]
async fn failed_deletion_is_reported_independently() -> Result<(), TestError> {
    let (store, _test) = configured_store().await?;
    let actions = MockGuildActions::new()
        .with_channel(CHANNEL_ID, "announcements")
        .failing_deletes();
    let guard = MessageGuardService::new(&store, &actions);

    let outcome = guard.evaluate(&guild_message(CHANNEL_ID, &[])).await;

    assert!(matches!(
        outcome,
        GuardOutcome::Enforced {
            warned: Ok(()),
            deleted: Err(_),
        }
    ));
    assert_eq!(actions.side_effects().len(), 2);

    Ok(())
}

/// Tests the warning when the channel name cannot be resolved.
///
/// Expected: warning mentions the channel instead of naming it
#[tokio::test]
async fn warning_falls_back_to_channel_mention() -> Result<(), TestError> {
    let (store, _test) = configured_store().await?;
    let actions = MockGuildActions::new();
    let guard = MessageGuardService::new(&store, &actions);

    guard.evaluate(&guild_message(CHANNEL_ID, &[])).await;

    let expected = format!("<#{}>", CHANNEL_ID);
    assert!(actions.side_effects().iter().any(|call| matches!(
        call,
        Call::DirectMessage(_, content) if content.contains(&expected)
    )));

    Ok(())
}

/// Tests that a settings change applies to the very next message.
///
/// Expected: message in the old channel ignored, message in the new channel enforced
#[tokio::test]
async fn settings_change_applies_to_next_message() -> Result<(), TestError> {
    let (store, _test) = configured_store().await?;
    let actions = MockGuildActions::new();
    let guard = MessageGuardService::new(&store, &actions);

    store
        .set(
            GuildId::new(GUILD_ID),
            ChannelId::new(OTHER_CHANNEL_ID),
            RoleId::new(ROLE_ID),
        )
        .await
        .unwrap();

    let old_channel = guard.evaluate(&guild_message(CHANNEL_ID, &[])).await;
    let new_channel = guard.evaluate(&guild_message(OTHER_CHANNEL_ID, &[])).await;

    assert!(matches!(
        old_channel,
        GuardOutcome::Ignored(IgnoreReason::UnmonitoredChannel)
    ));
    assert!(matches!(new_channel, GuardOutcome::Enforced { .. }));

    Ok(())
}
