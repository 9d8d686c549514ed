//! DynamoDB store implementation.

use async_trait::async_trait;
use aws_sdk_dynamodb::Client;

use kvgate_core::storage::{KeyValueStore, Record, Result, KEY_ATTRIBUTE};

use super::conversions::{item_to_record_for_key, key_attribute, record_to_item};
use super::error::{map_delete_item_error, map_get_item_error, map_put_item_error};
use crate::config::StoreConfig;

/// DynamoDB-based key-value store.
///
/// Holds one SDK client for the lifetime of the process.
#[derive(Debug, Clone)]
pub struct DynamoDbStore {
    client: Client,
    table_name: String,
}

impl DynamoDbStore {
    /// Creates a new store with the given DynamoDB client and table name.
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    /// Creates a new store from configuration.
    ///
    /// Uses the AWS SDK default credential chain. The endpoint override, when
    /// set, points the client at a local DynamoDB instance.
    pub async fn from_config(config: &StoreConfig) -> Self {
        let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(aws_config::Region::new(config.region.clone()));

        if let Some(endpoint) = &config.endpoint_url {
            loader = loader.endpoint_url(endpoint);
        }

        let sdk_config = loader.load().await;
        Self::new(Client::new(&sdk_config), config.table_name.clone())
    }
}

#[async_trait]
impl KeyValueStore for DynamoDbStore {
    async fn get(&self, key: &str) -> Result<Option<Record>> {
        let result = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .key(KEY_ATTRIBUTE, key_attribute(key))
            .send()
            .await
            .map_err(|e| map_get_item_error(e, &self.table_name))?;

        match result.item {
            Some(item) => Ok(Some(item_to_record_for_key(&item, key)?)),
            None => {
                tracing::debug!(key = %key, table = %self.table_name, "Couldn't find item");
                Ok(None)
            }
        }
    }

    async fn put(&self, key: &str, value: &str) -> Result<()> {
        let item = record_to_item(&Record::new(key, value));

        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item))
            .send()
            .await
            .map_err(|e| map_put_item_error(e, &self.table_name))?;

        tracing::info!(key = %key, table = %self.table_name, "Successfully put item");
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<()> {
        self.client
            .delete_item()
            .table_name(&self.table_name)
            .key(KEY_ATTRIBUTE, key_attribute(key))
            .send()
            .await
            .map_err(|e| map_delete_item_error(e, &self.table_name))?;

        tracing::info!(key = %key, table = %self.table_name, "Successfully deleted item");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use aws_sdk_dynamodb::config::{retry::RetryConfig, BehaviorVersion, Credentials, Region};
    use axum::{
        http::{header, HeaderMap, StatusCode},
        Router,
    };
    use kvgate_core::storage::StorageError;
    use tokio::net::TcpListener;

    use super::*;

    const RESOURCE_NOT_FOUND: &str = r#"{"__type":"com.amazonaws.dynamodb.v20120810#ResourceNotFoundException","message":"Requested resource not found"}"#;
    const THROUGHPUT_EXCEEDED: &str = r#"{"__type":"com.amazonaws.dynamodb.v20120810#ProvisionedThroughputExceededException","message":"Rate of requests exceeds the allowed throughput"}"#;

    /// `X-Amz-Target` header and body of each request a fake endpoint received.
    type Received = Arc<Mutex<Vec<(String, String)>>>;

    /// Serves the same DynamoDB JSON response to every request.
    async fn fake_dynamodb(status: StatusCode, response: &'static str) -> (String, Received) {
        let received = Received::default();
        let log = received.clone();

        let app = Router::new().fallback(move |headers: HeaderMap, body: String| {
            let log = log.clone();
            async move {
                let target = headers
                    .get("x-amz-target")
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or_default()
                    .to_string();
                log.lock().unwrap().push((target, body));
                (
                    status,
                    [(header::CONTENT_TYPE, "application/x-amz-json-1.0")],
                    response,
                )
            }
        });

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}", listener.local_addr().unwrap());
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        (url, received)
    }

    fn store_at(endpoint_url: &str) -> DynamoDbStore {
        let config = aws_sdk_dynamodb::Config::builder()
            .behavior_version(BehaviorVersion::latest())
            .region(Region::new("ap-southeast-1"))
            .credentials_provider(Credentials::new("test", "test", None, None, "kvgate-tests"))
            .endpoint_url(endpoint_url)
            .retry_config(RetryConfig::disabled())
            .build();
        DynamoDbStore::new(Client::from_conf(config), "sample-table")
    }

    fn single_request(received: &Received) -> (String, String) {
        let requests = received.lock().unwrap();
        assert_eq!(requests.len(), 1);
        requests[0].clone()
    }

    #[tokio::test]
    async fn test_get_found_item() {
        let (url, received) = fake_dynamodb(
            StatusCode::OK,
            r#"{"Item":{"Key":{"S":"a"},"Value":{"S":"my expected value"}}}"#,
        )
        .await;
        let store = store_at(&url);

        let record = store.get("a").await.unwrap();

        assert_eq!(record, Some(Record::new("a", "my expected value")));
        let (target, body) = single_request(&received);
        assert_eq!(target, "DynamoDB_20120810.GetItem");
        assert!(body.contains(r#""TableName":"sample-table""#), "{body}");
        assert!(body.contains(r#""Key":{"Key":{"S":"a"}}"#), "{body}");
    }

    #[tokio::test]
    async fn test_get_without_item_is_absent() {
        let (url, _) = fake_dynamodb(StatusCode::OK, "{}").await;

        assert_eq!(store_at(&url).get("x").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_get_item_for_another_key_is_invalid() {
        let (url, _) = fake_dynamodb(
            StatusCode::OK,
            r#"{"Item":{"Key":{"S":"b"},"Value":{"S":"v"}}}"#,
        )
        .await;

        let err = store_at(&url).get("a").await.unwrap_err();
        assert!(matches!(err, StorageError::InvalidData(_)), "{err:?}");
    }

    #[tokio::test]
    async fn test_put_sends_key_and_value() {
        let (url, received) = fake_dynamodb(StatusCode::OK, "{}").await;

        store_at(&url).put("w", "yada yada").await.unwrap();

        let (target, body) = single_request(&received);
        assert_eq!(target, "DynamoDB_20120810.PutItem");
        assert!(body.contains(r#""TableName":"sample-table""#), "{body}");
        assert!(body.contains(r#""Key":{"S":"w"}"#), "{body}");
        assert!(body.contains(r#""Value":{"S":"yada yada"}"#), "{body}");
    }

    #[tokio::test]
    async fn test_delete_sends_key() {
        let (url, received) = fake_dynamodb(StatusCode::OK, "{}").await;

        store_at(&url).delete("w").await.unwrap();

        let (target, body) = single_request(&received);
        assert_eq!(target, "DynamoDB_20120810.DeleteItem");
        assert!(body.contains(r#""TableName":"sample-table""#), "{body}");
        assert!(body.contains(r#""Key":{"Key":{"S":"w"}}"#), "{body}");
    }

    #[tokio::test]
    async fn test_missing_table_maps_to_table_not_found() {
        let (url, _) = fake_dynamodb(StatusCode::BAD_REQUEST, RESOURCE_NOT_FOUND).await;
        let store = store_at(&url);
        let expected = StorageError::TableNotFound("sample-table".to_string());

        assert_eq!(store.get("a").await.unwrap_err(), expected);
        assert_eq!(store.put("a", "v").await.unwrap_err(), expected);
        assert_eq!(store.delete("a").await.unwrap_err(), expected);
    }

    #[tokio::test]
    async fn test_throughput_exceeded_maps_to_throttled() {
        let (url, _) = fake_dynamodb(StatusCode::BAD_REQUEST, THROUGHPUT_EXCEEDED).await;
        let store = store_at(&url);

        assert!(matches!(
            store.get("a").await,
            Err(StorageError::Throttled(_))
        ));
        assert!(matches!(
            store.put("a", "v").await,
            Err(StorageError::Throttled(_))
        ));
        assert!(matches!(
            store.delete("a").await,
            Err(StorageError::Throttled(_))
        ));
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_maps_to_connection_failed() {
        // Bind then drop to get a local port nothing listens on.
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}", listener.local_addr().unwrap());
        drop(listener);

        let err = store_at(&url).get("a").await.unwrap_err();
        assert!(matches!(err, StorageError::ConnectionFailed(_)), "{err:?}");
    }

    /// Tests against DynamoDB Local.
    ///
    /// Run with `cargo test -- --ignored` after pointing `AWS_ENDPOINT_URL` at
    /// DynamoDB Local, then `cargo xtask dynamodb deploy` and
    /// `cargo xtask dynamodb seed`.
    mod dynamodb_local {
        use super::*;

        async fn local_store() -> DynamoDbStore {
            let config = StoreConfig::from_env();
            assert!(
                config.endpoint_url.is_some(),
                "AWS_ENDPOINT_URL must point at DynamoDB Local"
            );
            DynamoDbStore::from_config(&config).await
        }

        #[tokio::test]
        #[ignore = "needs DynamoDB Local"]
        async fn test_get_seeded_item() {
            let store = local_store().await;

            let record = store.get("a").await.unwrap().expect("seeded record");
            assert_eq!(record.key, "a");
            assert_eq!(record.value, "ahsfkahkfahfsla");
        }

        #[tokio::test]
        #[ignore = "needs DynamoDB Local"]
        async fn test_get_nonexistent_is_absent() {
            let store = local_store().await;

            assert!(store.get("x").await.unwrap().is_none());
        }

        #[tokio::test]
        #[ignore = "needs DynamoDB Local"]
        async fn test_put_get_delete_round_trip() {
            let store = local_store().await;

            store.put("w", "yada yada").await.unwrap();
            assert_eq!(
                store.get("w").await.unwrap(),
                Some(Record::new("w", "yada yada"))
            );

            store.put("w", "overwritten").await.unwrap();
            assert_eq!(store.get("w").await.unwrap().unwrap().value, "overwritten");

            store.delete("w").await.unwrap();
            assert!(store.get("w").await.unwrap().is_none());

            // Idempotent delete
            store.delete("w").await.unwrap();
        }

        #[tokio::test]
        #[ignore = "needs DynamoDB Local"]
        async fn test_missing_table_is_reported() {
            let store = local_store().await;
            let store = DynamoDbStore::new(store.client.clone(), "kvgate-missing-table");

            let err = store.get("a").await.unwrap_err();
            assert_eq!(
                err,
                StorageError::TableNotFound("kvgate-missing-table".to_string())
            );
        }
    }
}
