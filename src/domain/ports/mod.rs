//! Domain Ports (Interfaces)
//!
//! Traits the host integration implements to feed values into the domain.

pub mod deploy_settings;

pub use deploy_settings::DeploySettings;
