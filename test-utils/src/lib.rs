//! Shared testing utilities for the community site backend.
//!
//! Provides a builder pattern for creating test contexts with in-memory
//! SQLite databases and customizable table schemas, plus factories for
//! creating test entities with sensible defaults.
//!
//! # Usage
//!
//! Use `TestBuilder` to create a test context with the required tables:
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//! use entity::prelude::AdminUser;
//!
//! #[tokio::test]
//! async fn test_admin_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_table(AdminUser)
//!         .build()
//!         .await?;
//!
//!     let db = test.db.as_ref().unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
