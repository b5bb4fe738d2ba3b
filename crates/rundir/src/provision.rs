//! The provisioning operation itself.
//!
//! One linear sequence with a single branch: create the directory, or if it
//! already exists repair its mode, then set ownership. Safe to run
//! repeatedly; concurrent invocations for the same uid converge to the same
//! end state because every step is idempotent.

use std::io;
use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::RUNTIME_DIR_MODE;
use crate::error::ProvisionError;
use crate::fs::Filesystem;
use crate::identity::IdentitySource;

/// Compute the runtime directory path for a uid.
///
/// Pure function of (parent, uid); the user name and gid never influence it.
pub fn runtime_dir_path(parent: &Path, uid: u32) -> PathBuf {
    parent.join(uid.to_string())
}

/// Ensure `<parent>/<uid>` exists with mode 0700 and the right owner, and
/// return the path.
///
/// On success the directory exists, has mode 0700 and is owned by the
/// resolved uid:gid, regardless of whether it was absent, already correct,
/// or present with drifted mode/owner bits. Nothing is ever deleted.
pub fn provision(
    ids: &dyn IdentitySource,
    fs: &dyn Filesystem,
    user_name: &str,
    parent: &Path,
) -> Result<PathBuf, ProvisionError> {
    let identity = ids
        .resolve(user_name)
        .map_err(|source| ProvisionError::Lookup {
            name: user_name.to_string(),
            source,
        })?
        .ok_or_else(|| ProvisionError::UnknownUser {
            name: user_name.to_string(),
        })?;

    let path = runtime_dir_path(parent, identity.uid);

    match fs.mkdir(&path, RUNTIME_DIR_MODE) {
        Ok(()) => {
            debug!("created {} with mode 0700", path.display());
        }
        Err(err) if err.kind() == io::ErrorKind::AlreadyExists => {
            // Expected steady state on every login after the first. Repair
            // the mode before handing ownership over, in case it drifted.
            fs.chmod(&path, RUNTIME_DIR_MODE)
                .map_err(|source| ProvisionError::Repair {
                    path: path.clone(),
                    source,
                })?;
            debug!("reusing existing {}", path.display());
        }
        Err(source) => {
            warn!("mkdir {} failed: {source}", path.display());
            return Err(ProvisionError::Create { path, source });
        }
    }

    // Unconditional: covers both the fresh directory and a pre-existing one
    // left behind by an older login (possibly owned by someone else after a
    // uid reassignment).
    fs.chown(&path, identity.uid, identity.gid)
        .map_err(|source| ProvisionError::Ownership {
            path: path.clone(),
            uid: identity.uid,
            gid: identity.gid,
            source,
        })?;

    debug!(
        "runtime dir {} ready for {}:{}",
        path.display(),
        identity.uid,
        identity.gid
    );
    Ok(path)
}
