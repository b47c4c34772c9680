mod file_provider_errors;
mod storage_errors;
mod validation_errors;

pub use file_provider_errors::*;
pub use storage_errors::*;
pub use validation_errors::*;
