//! DynamoDB error mapping.
//!
//! Maps AWS SDK errors to `StorageError` from `kvgate_core::storage`.

use std::fmt::Debug;

use aws_sdk_dynamodb::error::{ProvideErrorMetadata, SdkError};
use aws_sdk_dynamodb::operation::delete_item::DeleteItemError;
use aws_sdk_dynamodb::operation::get_item::GetItemError;
use aws_sdk_dynamodb::operation::put_item::PutItemError;
use kvgate_core::storage::StorageError;

/// Map a GetItem SDK error to StorageError.
pub fn map_get_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<GetItemError, R>,
    table_name: &str,
) -> StorageError {
    if let Some(error) = map_transport_error(&err) {
        return error;
    }
    match err.into_service_error() {
        GetItemError::ResourceNotFoundException(_) => {
            StorageError::TableNotFound(table_name.to_string())
        }
        GetItemError::ProvisionedThroughputExceededException(_) => {
            StorageError::Throttled("Throughput exceeded, please retry".to_string())
        }
        GetItemError::RequestLimitExceeded(_) => {
            StorageError::Throttled("Request limit exceeded, please retry".to_string())
        }
        GetItemError::InternalServerError(_) => {
            StorageError::RequestFailed("DynamoDB internal server error".to_string())
        }
        err if is_throttling(&err) => {
            StorageError::Throttled("Request throttled, please retry".to_string())
        }
        err => StorageError::RequestFailed(format!("GetItem failed: {:?}", err)),
    }
}

/// Map a PutItem SDK error to StorageError.
pub fn map_put_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<PutItemError, R>,
    table_name: &str,
) -> StorageError {
    if let Some(error) = map_transport_error(&err) {
        return error;
    }
    match err.into_service_error() {
        PutItemError::ResourceNotFoundException(_) => {
            StorageError::TableNotFound(table_name.to_string())
        }
        PutItemError::ProvisionedThroughputExceededException(_) => {
            StorageError::Throttled("Throughput exceeded, please retry".to_string())
        }
        PutItemError::RequestLimitExceeded(_) => {
            StorageError::Throttled("Request limit exceeded, please retry".to_string())
        }
        PutItemError::ItemCollectionSizeLimitExceededException(_) => {
            StorageError::RequestFailed("Item collection size limit exceeded".to_string())
        }
        PutItemError::TransactionConflictException(_) => {
            StorageError::RequestFailed("Transaction conflict, please retry".to_string())
        }
        PutItemError::InternalServerError(_) => {
            StorageError::RequestFailed("DynamoDB internal server error".to_string())
        }
        err if is_throttling(&err) => {
            StorageError::Throttled("Request throttled, please retry".to_string())
        }
        err => StorageError::RequestFailed(format!("PutItem failed: {:?}", err)),
    }
}

/// Map a DeleteItem SDK error to StorageError.
pub fn map_delete_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<DeleteItemError, R>,
    table_name: &str,
) -> StorageError {
    if let Some(error) = map_transport_error(&err) {
        return error;
    }
    match err.into_service_error() {
        DeleteItemError::ResourceNotFoundException(_) => {
            StorageError::TableNotFound(table_name.to_string())
        }
        DeleteItemError::ProvisionedThroughputExceededException(_) => {
            StorageError::Throttled("Throughput exceeded, please retry".to_string())
        }
        DeleteItemError::RequestLimitExceeded(_) => {
            StorageError::Throttled("Request limit exceeded, please retry".to_string())
        }
        DeleteItemError::TransactionConflictException(_) => {
            StorageError::RequestFailed("Transaction conflict, please retry".to_string())
        }
        DeleteItemError::InternalServerError(_) => {
            StorageError::RequestFailed("DynamoDB internal server error".to_string())
        }
        err if is_throttling(&err) => {
            StorageError::Throttled("Request throttled, please retry".to_string())
        }
        err => StorageError::RequestFailed(format!("DeleteItem failed: {:?}", err)),
    }
}

/// Throttling reported under the generic `ThrottlingException` code.
fn is_throttling(err: &impl ProvideErrorMetadata) -> bool {
    err.code() == Some("ThrottlingException")
}

/// Errors raised before the service answered: the request never reached
/// the table.
fn map_transport_error<E, R>(err: &SdkError<E, R>) -> Option<StorageError> {
    match err {
        SdkError::DispatchFailure(failure) => {
            Some(StorageError::ConnectionFailed(format!("{:?}", failure)))
        }
        SdkError::TimeoutError(_) => Some(StorageError::ConnectionFailed(
            "Request to DynamoDB timed out".to_string(),
        )),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use aws_sdk_dynamodb::types::error::{
        ProvisionedThroughputExceededException, RequestLimitExceeded, ResourceNotFoundException,
        TransactionConflictException,
    };

    use aws_sdk_dynamodb::error::ErrorMetadata;

    use super::*;

    #[test]
    fn test_get_item_resource_not_found() {
        let err = SdkError::service_error(
            GetItemError::ResourceNotFoundException(ResourceNotFoundException::builder().build()),
            (),
        );
        assert_eq!(
            map_get_item_error(err, "sample-table"),
            StorageError::TableNotFound("sample-table".to_string())
        );
    }

    #[test]
    fn test_get_item_throttling() {
        let err = SdkError::service_error(
            GetItemError::ProvisionedThroughputExceededException(
                ProvisionedThroughputExceededException::builder().build(),
            ),
            (),
        );
        assert!(matches!(
            map_get_item_error(err, "sample-table"),
            StorageError::Throttled(_)
        ));

        let err = SdkError::service_error(
            GetItemError::RequestLimitExceeded(RequestLimitExceeded::builder().build()),
            (),
        );
        assert!(matches!(
            map_get_item_error(err, "sample-table"),
            StorageError::Throttled(_)
        ));
    }

    #[test]
    fn test_throttling_exception_code_is_throttled() {
        let err = SdkError::service_error(
            PutItemError::generic(ErrorMetadata::builder().code("ThrottlingException").build()),
            (),
        );
        assert!(matches!(
            map_put_item_error(err, "sample-table"),
            StorageError::Throttled(_)
        ));
    }

    #[test]
    fn test_put_item_transaction_conflict_is_request_failure() {
        let err = SdkError::service_error(
            PutItemError::TransactionConflictException(
                TransactionConflictException::builder().build(),
            ),
            (),
        );
        assert_eq!(
            map_put_item_error(err, "sample-table"),
            StorageError::RequestFailed("Transaction conflict, please retry".to_string())
        );
    }

    #[test]
    fn test_delete_item_resource_not_found() {
        let err = SdkError::service_error(
            DeleteItemError::ResourceNotFoundException(
                ResourceNotFoundException::builder().build(),
            ),
            (),
        );
        assert_eq!(
            map_delete_item_error(err, "sample-table"),
            StorageError::TableNotFound("sample-table".to_string())
        );
    }

    #[test]
    fn test_timeout_is_connection_failure() {
        let err: SdkError<GetItemError, ()> = SdkError::timeout_error("operation timed out");
        assert_eq!(
            map_get_item_error(err, "sample-table"),
            StorageError::ConnectionFailed("Request to DynamoDB timed out".to_string())
        );

        let err: SdkError<DeleteItemError, ()> = SdkError::timeout_error("operation timed out");
        assert!(matches!(
            map_delete_item_error(err, "sample-table"),
            StorageError::ConnectionFailed(_)
        ));
    }
}
