//! Configuration loading for grantflow workspaces

mod loader;

pub use loader::load_config;
