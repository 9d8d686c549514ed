//! Storage backend implementations.
//!
//! This module provides concrete implementations of the
//! `kvgate_core::storage::KeyValueStore` trait.
//!
//! # Feature Flags
//!
//! - `dynamodb` (default): AWS DynamoDB backend using `aws-sdk-dynamodb`
//!
//! The in-memory backend is always compiled. It backs the test suite and
//! `kvgate --local --in-memory`.
//!
//! Build without AWS dependencies:
//! ```bash
//! cargo build -p kvgate --no-default-features
//! ```

#[cfg(feature = "dynamodb")]
pub mod dynamodb;
pub mod inmemory;

#[cfg(feature = "dynamodb")]
pub use dynamodb::DynamoDbStore;
pub use inmemory::InMemoryStore;
