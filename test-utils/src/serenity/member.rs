//! Test factory for creating Serenity Member objects.

use serenity::all::Member;

/// Creates a test Serenity Member as delivered with an interaction.
///
/// # Arguments
/// - `user_id` - Discord user ID (snowflake)
/// - `guild_id` - Discord guild ID the member belongs to
/// - `role_ids` - Roles held by the member
/// - `permissions` - Resolved permission bits, `None` when Discord omitted them
///
/// # Returns
/// - `Member` - A valid Serenity Member struct for testing
///
/// # Panics
/// - If the JSON cannot be deserialized into a Member (indicates invalid test data)
pub fn create_test_member(
    user_id: u64,
    guild_id: u64,
    role_ids: &[u64],
    permissions: Option<u64>,
) -> Member {
    let roles: Vec<String> = role_ids.iter().map(|id| id.to_string()).collect();

    serde_json::from_value(serde_json::json!({
        "user": {
            "id": user_id.to_string(),
            "username": format!("user{}", user_id),
            "discriminator": "0",
            "global_name": null,
            "avatar": null,
            "bot": false,
        },
        "guild_id": guild_id.to_string(),
        "nick": null,
        "avatar": null,
        "roles": roles,
        "joined_at": "2020-01-01T00:00:00.000000+00:00",
        "deaf": false,
        "mute": false,
        "flags": 0,
        "pending": false,
        "permissions": permissions.map(|bits| bits.to_string()),
        "communication_disabled_until": null,
    }))
    .expect("Failed to create test member - invalid JSON structure")
}
