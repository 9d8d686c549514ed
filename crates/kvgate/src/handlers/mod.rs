pub mod error;
pub mod keys;
pub mod params;

pub use error::AppError;
pub use keys::handle_request;
pub use params::KeyParam;
