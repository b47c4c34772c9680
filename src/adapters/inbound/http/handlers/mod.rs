pub mod config_handlers;
pub mod upload_handlers;

pub use config_handlers::*;
pub use upload_handlers::*;
