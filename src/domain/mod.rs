//! Domain Layer
//!
//! The migration engine itself - pure logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - The two views of a configuration file (line `Document`, `StructuredConfig`)
//! - `value_objects/` - Immutable value types (KeyPath, ConfigVersion, ReleaseVersion)
//! - `services/` - Locator, detector, renderer, planner and version stamp
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system directly
//! 2. **Pure Functions** - Services are stateless and testable
//! 3. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
