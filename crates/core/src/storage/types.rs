/// Attribute holding a record's key in the persisted item.
pub const KEY_ATTRIBUTE: &str = "Key";

/// Attribute holding a record's value in the persisted item.
pub const VALUE_ATTRIBUTE: &str = "Value";

/// A key/value pair held by the backing store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub key: String,
    pub value: String,
}

impl Record {
    /// Creates a new record.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}
