//! DynamoDB storage backend implementation.
//!
//! This module provides a DynamoDB-based implementation of the
//! `KeyValueStore` trait using `aws-sdk-dynamodb`.
//!
//! Table layout: partition key `Key` (S), value attribute `Value` (S).

mod conversions;
mod error;
mod repository;

pub use repository::DynamoDbStore;
