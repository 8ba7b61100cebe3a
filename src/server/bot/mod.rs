//! Discord bot integration for channel posting restrictions.
//!
//! This module connects to Discord's gateway with Serenity, publishes the `setup` and
//! `status` slash commands at startup, and dispatches gateway events to handlers that
//! run the command and guard services.
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Guild availability and interaction delivery
//! - `GUILD_MESSAGES` - Receive events about messages in guilds
//! - `DIRECT_MESSAGES` - Receive direct message events so they can be ignored explicitly
//!
//! Message content is not needed: the guard deletes disallowed messages regardless of
//! what they say.

pub mod command;
pub mod handler;
pub mod start;
