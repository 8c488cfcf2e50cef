//! Application layer - use cases over the integration clients
//!
//! Exposes the collaborator surface of the core: formatted realtime
//! text for a stop, the normalized vehicle listing, the shared-line
//! route lookup, and the best-effort bike-share listing. Presentation
//! layers (CLI, GUI) call these services and choose their own
//! concurrency wrapper; every service call here is a plain blocking
//! async call with no internal parallelism.

pub mod error;
pub mod services;

pub use error::ApplicationError;
pub use services::*;
