use crate::server::{
    data::settings::SettingsStore,
    model::{
        command::{SetupParams, SetupResult, StatusResult},
        settings::GuildConfig,
    },
    service::{
        command::CommandService,
        test::mock::{Call, MockGuildActions},
    },
};
use serenity::all::{ChannelId, GuildId, RoleId};
use test_utils::{
    builder::TestBuilder,
    error::TestError,
    fixture::settings::{self, CHANNEL_ID, GUILD_ID, ROLE_ID},
};

mod status;

fn setup_params(is_admin: bool, channel_id: u64, role_id: u64) -> SetupParams {
    SetupParams {
        guild_id: GuildId::new(GUILD_ID),
        is_admin,
        channel_id: ChannelId::new(channel_id),
        channel_name: "announcements".to_string(),
        role_id: RoleId::new(role_id),
        role_name: "Speaker".to_string(),
    }
}
