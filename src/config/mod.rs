pub mod consts;
pub mod file;
pub mod network;
pub mod query;

// Re-export for convenience
pub use file::{load_config_from_path, ConfigFile};
pub use network::{ClientOptions, NetworkConfig};
pub use query::{ConnectionArgs, QueryConfig};
