//! Settings file fixtures in the on-disk JSON format.

pub const GUILD_ID: u64 = 1296438818379005974;
pub const CHANNEL_ID: u64 = 1296459562299424788;
pub const ROLE_ID: u64 = 1296440000000000001;

/// Builds a settings file from `(guild_id, channel_id, role_id)` triples.
pub fn settings_json(entries: &[(u64, u64, u64)]) -> String {
    let mut map = serde_json::Map::new();

    for (guild_id, channel_id, role_id) in entries {
        map.insert(
            guild_id.to_string(),
            serde_json::json!({
                "channelId": channel_id.to_string(),
                "roleId": role_id.to_string(),
            }),
        );
    }

    serde_json::Value::Object(map).to_string()
}

/// Settings file configuring a single guild with the constants above.
pub fn single_guild() -> String {
    settings_json(&[(GUILD_ID, CHANNEL_ID, ROLE_ID)])
}

/// A settings entry carrying fields a newer version might add.
pub fn with_unknown_fields() -> String {
    serde_json::json!({
        GUILD_ID.to_string(): {
            "channelId": CHANNEL_ID.to_string(),
            "roleId": ROLE_ID.to_string(),
            "warnTemplate": "custom",
            "enabled": true,
        }
    })
    .to_string()
}

/// One valid entry next to entries whose ids are not snowflakes.
pub fn with_invalid_entries() -> String {
    serde_json::json!({
        GUILD_ID.to_string(): {
            "channelId": CHANNEL_ID.to_string(),
            "roleId": ROLE_ID.to_string(),
        },
        "not-a-guild": {
            "channelId": CHANNEL_ID.to_string(),
            "roleId": ROLE_ID.to_string(),
        },
        "42": {
            "channelId": "0",
            "roleId": ROLE_ID.to_string(),
        }
    })
    .to_string()
}

/// Truncated JSON, as left behind by an interrupted write.
pub fn malformed() -> String {
    r#"{"1296438818379005974": {"channelId": "1296459562"#.to_string()
}
