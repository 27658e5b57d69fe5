//! Deploy settings port - how a host integration hands values to the resolver.

use std::path::Path;

/// Raw settings supplied by whatever configuration layer the host uses.
///
/// Values are unvalidated; the resolver turns them into value objects and
/// reports precondition violations.
pub trait DeploySettings {
    /// Root of the deployment tree (`deploy_to`)
    fn deploy_to(&self) -> Option<&Path>;

    /// Name of the active release directory. `None` means `"current"`.
    fn current_directory(&self) -> Option<&str>;

    /// User override for the build directory (`build_dir`)
    fn build_dir(&self) -> Option<&str>;
}
