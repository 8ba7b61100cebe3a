//! Channel Guard Test Utils
//!
//! Provides shared testing utilities for building unit tests for the channel guard
//! bot. This crate offers a builder pattern for creating test contexts backed by a
//! temporary directory with optional settings file fixtures, plus factories for the
//! Serenity objects the bot reads from Discord.
//!
//! # Overview
//!
//! The test utilities consist of four main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment owning the temporary directory and settings path
//! - **fixture**: Settings file contents, valid and malformed
//! - **serenity**: Factories for Serenity `Role`, `GuildChannel` and `Member` objects
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, fixture};
//!
//! #[tokio::test]
//! async fn loads_settings() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_settings_file(fixture::settings::single_guild())
//!         .build()?;
//!
//!     let store = SettingsStore::load(&test.settings_path).await;
//!     // Perform store operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod fixture;
pub mod serenity;
