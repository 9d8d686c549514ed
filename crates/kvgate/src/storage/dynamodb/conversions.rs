//! DynamoDB attribute conversion functions.
//!
//! Pure functions for converting between DynamoDB AttributeValue maps and
//! records. These are testable in isolation without DynamoDB access.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use kvgate_core::storage::{Record, StorageError, KEY_ATTRIBUTE, VALUE_ATTRIBUTE};

/// Builds the primary key attribute for a lookup or delete.
pub fn key_attribute(key: &str) -> AttributeValue {
    AttributeValue::S(key.to_string())
}

/// Convert a Record to a DynamoDB item.
pub fn record_to_item(record: &Record) -> HashMap<String, AttributeValue> {
    let mut item = HashMap::new();
    item.insert(KEY_ATTRIBUTE.to_string(), key_attribute(&record.key));
    item.insert(
        VALUE_ATTRIBUTE.to_string(),
        AttributeValue::S(record.value.clone()),
    );
    item
}

/// Convert a DynamoDB item to a Record.
pub fn item_to_record(item: &HashMap<String, AttributeValue>) -> Result<Record, StorageError> {
    Ok(Record {
        key: get_string(item, KEY_ATTRIBUTE)?,
        value: get_string(item, VALUE_ATTRIBUTE)?,
    })
}

/// Convert the item returned for `requested_key` to a Record.
///
/// Fails if the stored key differs from the one used for the lookup.
pub fn item_to_record_for_key(
    item: &HashMap<String, AttributeValue>,
    requested_key: &str,
) -> Result<Record, StorageError> {
    let record = item_to_record(item)?;
    if record.key != requested_key {
        return Err(StorageError::InvalidData(format!(
            "Item key {} does not match requested key {}",
            record.key, requested_key
        )));
    }
    Ok(record)
}

/// Get a required string attribute.
fn get_string(item: &HashMap<String, AttributeValue>, name: &str) -> Result<String, StorageError> {
    item.get(name)
        .and_then(|v| v.as_s().ok())
        .map(|s| s.to_string())
        .ok_or_else(|| StorageError::InvalidData(format!("Missing or invalid field: {}", name)))
}
