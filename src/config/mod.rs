pub mod catalog;
pub mod file;
pub mod loader;

pub use catalog::Catalog;
pub use file::{ConfigFile, default_config_path};
pub use loader::{ConfigSource, OptionsRequest, ResolvedOptions, resolve};
