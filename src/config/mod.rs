pub mod env;
pub mod project;

pub use env::{vars, EnvSnapshot};
pub use project::{admin_config, backend_url, project_config};
