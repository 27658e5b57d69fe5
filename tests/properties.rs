//! Property tests for dockerbuild.
//!
//! Properties use randomized input generation to explore edge cases and
//! protect the resolution rules and the "always absolute" guarantee.
//!
//! Run with: `cargo test --test properties`

#[path = "properties/path_resolver.rs"]
mod path_resolver;
