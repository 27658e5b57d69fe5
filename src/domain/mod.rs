//! Domain Layer
//!
//! The core of dockerbuild - pure path arithmetic without I/O dependencies.
//!
//! ## Structure
//!
//! - `value_objects/` - Validated inputs and the resolved output path
//! - `services/` - The build path resolver
//! - `ports/` - The settings interface a host integration implements
//!
//! Nothing in this layer reads files, environment variables, or global state.

pub mod ports;
pub mod services;
pub mod value_objects;
