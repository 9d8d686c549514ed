mod error;
mod traits;
mod types;

pub use error::{Result, StorageError};
pub use traits::KeyValueStore;
pub use types::{Record, KEY_ATTRIBUTE, VALUE_ATTRIBUTE};
