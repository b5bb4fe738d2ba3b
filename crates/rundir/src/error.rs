use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong while provisioning a runtime directory.
///
/// Each variant maps to one step of the operation; there are no retries and
/// no partial successes, so the first failure is the overall result.
#[derive(Error, Debug)]
pub enum ProvisionError {
    /// The user name resolved to no local identity. No filesystem change
    /// has been made when this is returned.
    #[error("unknown user '{name}'")]
    UnknownUser { name: String },

    /// The passwd lookup itself failed (as opposed to finding no entry).
    #[error("identity lookup for '{name}' failed")]
    Lookup {
        name: String,
        #[source]
        source: io::Error,
    },

    /// The computed path cannot be represented at the C boundary.
    #[error("runtime dir path {path:?} is not a valid C string")]
    PathFormat { path: PathBuf },

    /// Directory creation failed for a reason other than already existing.
    #[error("failed to create {}", path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The directory pre-existed and the mode correction on it failed.
    #[error("failed to set mode 0700 on existing {}", path.display())]
    Repair {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Ownership assignment failed.
    #[error("failed to set owner {uid}:{gid} on {}", path.display())]
    Ownership {
        path: PathBuf,
        uid: u32,
        gid: u32,
        #[source]
        source: io::Error,
    },

    /// Publishing the path into the session environment failed.
    #[error("failed to publish {name} into the session environment")]
    Publish {
        name: String,
        #[source]
        source: io::Error,
    },
}

impl ProvisionError {
    /// Stable short tag for syslog lines.
    pub fn kind(&self) -> &'static str {
        match self {
            ProvisionError::UnknownUser { .. } => "unknown-user",
            ProvisionError::Lookup { .. } => "lookup-failed",
            ProvisionError::PathFormat { .. } => "path-format",
            ProvisionError::Create { .. } => "create-failed",
            ProvisionError::Repair { .. } => "repair-failed",
            ProvisionError::Ownership { .. } => "ownership-failed",
            ProvisionError::Publish { .. } => "publish-failed",
        }
    }
}
