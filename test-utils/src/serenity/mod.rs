//! Test factories for creating Serenity API objects.
//!
//! This module provides factory functions for creating mock Serenity structs
//! (Role, GuildChannel, Member) for testing purposes. These factories create
//! valid Serenity objects by deserializing JSON, simulating what Discord's API
//! would return.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::serenity::{create_test_channel, create_test_role};
//!
//! #[test]
//! fn resolves_names() {
//!     let channel = create_test_channel(111111111, 222222222, "announcements");
//!     let role = create_test_role(333333333, "Speaker", 0x00FF00, 1);
//!
//!     // Use in your tests...
//! }
//! ```
//!
//! # Available Factories
//!
//! - `channel::create_test_channel` - Create Serenity GuildChannel objects
//! - `member::create_test_member` - Create Serenity Member objects
//! - `role::create_test_role` - Create Serenity Role objects

pub mod channel;
pub mod member;
pub mod role;

pub use channel::create_test_channel;
pub use member::create_test_member;
pub use role::create_test_role;
