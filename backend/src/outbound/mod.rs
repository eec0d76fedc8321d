//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **catalogue**: in-memory course store seeded from a JSON file at startup
//!
//! Adapters are thin translators that convert between domain types and
//! infrastructure-specific representations. They contain no business logic.

pub mod catalogue;
