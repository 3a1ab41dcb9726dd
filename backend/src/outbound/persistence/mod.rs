//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Each store port has one adapter backed by a shared `bb8` pool of
//! `diesel-async` connections.
//!
//! - **Thin adapters**: repositories translate between Diesel rows and domain
//!   types. Aggregate sequencing lives in the domain.
//! - **Internal models**: row structs (`models.rs`) and table definitions
//!   (`schema.rs`) never leave this module.
//! - **Strongly typed errors**: pool and Diesel failures map onto each port's
//!   `Connection`/`Query` variants.
//!
//! # Example
//!
//! ```ignore
//! use blog_backend::outbound::persistence::{DbPool, DieselPostRepository, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/blog")).await?;
//! let posts = DieselPostRepository::new(pool);
//! ```

mod diesel_basic_error_mapping;
mod diesel_comment_repository;
mod diesel_image_repository;
mod diesel_post_repository;
mod diesel_tag_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_comment_repository::DieselCommentRepository;
pub use diesel_image_repository::DieselImageRepository;
pub use diesel_post_repository::DieselPostRepository;
pub use diesel_tag_repository::DieselTagRepository;
pub use migrations::{MigrationError, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
