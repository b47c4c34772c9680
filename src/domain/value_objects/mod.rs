mod file_key;
mod public_base_url;

pub use file_key::FileKey;
pub use public_base_url::PublicBaseUrl;
