pub mod loader;
pub mod schema;

pub use loader::{
    default_config_path, load_config, load_config_from_str, resolve_config, write_default_config,
    CONFIG_ENV_VAR,
};
pub use schema::{Config, StoreConfig};
