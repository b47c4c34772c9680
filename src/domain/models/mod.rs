pub mod capability;
pub mod file;
pub mod plugin;
pub mod project;
pub mod registry;

pub use capability::*;
pub use file::*;
pub use plugin::*;
pub use project::*;
pub use registry::ProviderRegistry;
