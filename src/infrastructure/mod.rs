//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `config/` - TOML project file repository
//! - `env/` - Input sources (process environment, `.env` files, in-memory maps)

pub mod config;
pub mod env;

// Re-export for convenience
pub use config::TomlConfigRepository;
pub use env::{project_source, DotenvSource, LayeredSource, MapSource, ProcessEnv};
