//! Core provisioning logic for pam-rundir.
//!
//! This is the PAM-free half of the module: identity lookup, runtime
//! directory creation/repair, and the capability traits that let the
//! convergence logic run against fakes in tests. The `pam-rundir` crate
//! wires these pieces to libpam.

pub mod env;
pub mod error;
pub mod fs;
pub mod identity;
pub mod provision;

pub use error::ProvisionError;
pub use identity::Identity;
pub use provision::{provision, runtime_dir_path};

/// Parent directory for all per-user runtime directories.
///
/// Overridable at build time (`RUNTIME_DIR_PARENT=/some/path cargo build`).
/// The deployer must ensure this directory exists, is owned by root, and is
/// not writable by anyone else; it is never created or validated here.
pub const RUNTIME_DIR_PARENT: &str = match option_env!("RUNTIME_DIR_PARENT") {
    Some(parent) => parent,
    None => "/run/user",
};

/// Name of the published environment variable.
pub const RUNTIME_DIR_VAR: &str = "XDG_RUNTIME_DIR";

/// Mode every runtime directory is held at.
pub const RUNTIME_DIR_MODE: u32 = 0o700;
