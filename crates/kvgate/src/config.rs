use std::env;

/// Region used when `AWS_REGION` is unset or empty.
pub const DEFAULT_REGION: &str = "ap-southeast-1";

/// Table used when `TABLE_NAME` is unset or empty.
pub const DEFAULT_TABLE_NAME: &str = "sample-table";

/// Storage configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// AWS region (default: "ap-southeast-1")
    pub region: String,
    /// DynamoDB table name (default: "sample-table")
    pub table_name: String,
    /// Endpoint override, e.g. "http://localhost:8000" for DynamoDB Local.
    /// `None` targets the regional AWS endpoint.
    pub endpoint_url: Option<String>,
}

impl StoreConfig {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `TABLE_NAME` - DynamoDB table name (default: "sample-table")
    /// - `AWS_REGION` - AWS region (default: "ap-southeast-1")
    /// - `AWS_ENDPOINT_URL` - Endpoint override (default: none)
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |name: &str| lookup(name).filter(|v| !v.is_empty());

        Self {
            region: get("AWS_REGION").unwrap_or_else(|| DEFAULT_REGION.to_string()),
            table_name: get("TABLE_NAME").unwrap_or_else(|| DEFAULT_TABLE_NAME.to_string()),
            endpoint_url: get("AWS_ENDPOINT_URL"),
        }
    }

    /// Returns a display string for the target backend.
    pub fn target_display(&self) -> String {
        match &self.endpoint_url {
            Some(url) => format!("Local DynamoDB ({}), table {}", url, self.table_name),
            None => format!(
                "AWS DynamoDB (region: {}), table {}",
                self.region, self.table_name
            ),
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}
