//! Business logic between the bot's event handlers and the settings store.
//!
//! Services never touch gateway event payloads or the Serenity client directly: event
//! handlers convert payloads into model types, and every Discord side effect goes through
//! the `GuildActions` trait so the services can be tested with a recording mock.

pub mod command;
pub mod diagnostics;
pub mod guard;
pub mod guild_actions;
pub mod reply;

#[cfg(test)]
mod test;
