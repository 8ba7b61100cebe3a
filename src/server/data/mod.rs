//! Persistence layer for guild moderation settings.
//!
//! The settings store is the sole source of truth for which channel is monitored and
//! which role may post in each guild. It is loaded from a flat JSON file at startup and
//! rewritten in full after every change. On-disk records use string ids and are
//! converted to typed domain models at this boundary.

pub mod settings;
