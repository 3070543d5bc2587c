//! Domain Layer
//!
//! This is the core of Forkwise - pure resolution logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - The `ProjectConfiguration` aggregate
//! - `value_objects/` - Immutable value types (Secret, NetworkDescriptor, ForkDirective)
//! - `services/` - Secret resolution, network registry, fork forwarding
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system or environment directly
//! 2. **Pure Functions** - Services are stateless and testable
//! 3. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
