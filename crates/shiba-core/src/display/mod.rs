//! Display formatting for catalog views.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]);
//! collections go through newtype wrappers that handle the empty case.
//! Everything renders as markdown, which the CLI pipes through its terminal
//! renderer and the MCP server returns verbatim.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │   Wrappers &    │    │   Formatted     │
//! │ (Exercise, ...) │───▶│  Status Types   │───▶│    Output       │
//! │                 │    │                 │    │  (Terminal/MCP) │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! - [`collections`]: list wrappers (Exercises, SubstitutionOptions, ...)
//! - [`status`]: confirmation messages (OperationStatus)
//! - [`models`]: Display implementations for domain models

pub mod collections;
pub mod models;
pub mod status;

pub use collections::{EquipmentList, Exercises, Names, SubstitutionOptions};
pub use status::OperationStatus;
