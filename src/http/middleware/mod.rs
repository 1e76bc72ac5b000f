pub mod api_key;

pub use api_key::{require_api_key, X_API_KEY};
