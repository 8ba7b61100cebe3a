//! Test fixtures providing reusable settings file contents.
//!
//! Fixtures only produce data; pass them to `TestBuilder::with_settings_file` to place
//! them on disk.

pub mod settings;
