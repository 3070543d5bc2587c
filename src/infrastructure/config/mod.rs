//! Configuration repository implementations.

mod toml_config;

pub use toml_config::TomlConfigRepository;
