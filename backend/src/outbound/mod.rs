//! Outbound adapters implementing the store ports.
//!
//! - **persistence**: PostgreSQL-backed repositories using Diesel ORM
//! - **memory**: process-local tables for running without a database
//!
//! Adapters translate between domain types and storage representations and
//! contain no business logic.

pub mod memory;
pub mod persistence;
