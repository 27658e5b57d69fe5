//! Domain Services
//!
//! Stateless services over domain value objects.

mod path_resolver;

pub use path_resolver::{resolve_build_path, PathResolver};
