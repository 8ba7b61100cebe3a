//! Channel guard bot: restricts posting in one channel per guild to a single role.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Bot Layer** (`bot/`) - Gateway connection, slash command registration, event handlers
//! - **Service Layer** (`service/`) - Command handling, message guard, diagnostics forwarding
//! - **Data Layer** (`data/`) - Guild settings store persisted to a JSON file
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state handed to event handlers
//! - **Startup** (`startup`) - Logging setup and the liveness HTTP server
//! - **Router** (`router`) and **Controller** (`controller/`) - Liveness route
//! - **Scheduler** (`scheduler/`) - Periodic restart job
//!
//! # Event Flow
//!
//! 1. **Bot** receives a gateway event and converts its payload into model types
//! 2. **Service** consults or updates the settings store
//! 3. **Service** performs Discord side effects through `GuildActions`
//! 4. **Bot** replies to the invoking member or logs the outcome

pub mod bot;
pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod scheduler;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
