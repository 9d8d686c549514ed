//! Seed command implementation.

use super::error::{DynamodbError, Result};
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;
use kvgate_core::storage::{Record, KEY_ATTRIBUTE, VALUE_ATTRIBUTE};

/// Fixture record expected by the DynamoDB Local tests.
pub const FIXTURE_KEY: &str = "a";
pub const FIXTURE_VALUE: &str = "ahsfkahkfahfsla";

/// Parse a `KEY=VALUE` argument into a record.
///
/// Splits on the first `=`, so values may contain `=`.
pub fn parse_record(arg: &str) -> Result<Record> {
    match arg.split_once('=') {
        Some((key, value)) if !key.is_empty() && !value.is_empty() => Ok(Record::new(key, value)),
        _ => Err(DynamodbError::InvalidRecord(arg.to_string())),
    }
}

/// Records to seed: the given ones, or the test fixture when none are given.
pub fn seed_records(args: &[String]) -> Result<Vec<Record>> {
    if args.is_empty() {
        return Ok(vec![Record::new(FIXTURE_KEY, FIXTURE_VALUE)]);
    }
    args.iter().map(|arg| parse_record(arg)).collect()
}

/// Insert records into DynamoDB, one PutItem per record.
pub async fn seed_records_into(
    client: &Client,
    table_name: &str,
    records: &[Record],
) -> Result<u32> {
    let mut inserted = 0;

    for record in records {
        client
            .put_item()
            .table_name(table_name)
            .item(KEY_ATTRIBUTE, AttributeValue::S(record.key.clone()))
            .item(VALUE_ATTRIBUTE, AttributeValue::S(record.value.clone()))
            .send()
            .await
            .map_err(|e| DynamodbError::AwsSdk(e.to_string()))?;

        inserted += 1;
    }

    Ok(inserted)
}
