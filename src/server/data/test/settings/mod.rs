use crate::server::{
    data::settings::SettingsStore,
    error::{settings::SettingsError, AppError},
    model::settings::GuildConfig,
};
use serenity::all::{ChannelId, GuildId, RoleId};
use test_utils::{
    builder::TestBuilder,
    error::TestError,
    fixture::settings::{self, CHANNEL_ID, GUILD_ID, ROLE_ID},
};

mod load;
mod set;
