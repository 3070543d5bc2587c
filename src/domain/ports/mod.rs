//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod config_repository;
pub mod input_source;

pub use config_repository::ConfigRepository;
pub use input_source::InputSource;
