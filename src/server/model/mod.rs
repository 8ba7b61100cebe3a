//! Server-side domain models and parameter types.
//!
//! Domain models are converted from their on-disk records at the repository boundary and
//! passed through the service layer with typed Discord ids. They keep platform event
//! payloads out of business logic so the services can be exercised without a gateway.

pub mod command;
pub mod guard;
pub mod settings;
