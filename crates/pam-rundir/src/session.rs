//! Session-open orchestration, kept free of FFI so it tests against fakes.

use std::ffi::c_int;
use std::path::{Path, PathBuf};

use rundir::env::SessionEnv;
use rundir::fs::Filesystem;
use rundir::identity::IdentitySource;
use rundir::{ProvisionError, RUNTIME_DIR_VAR, provision};

use crate::ffi::{PAM_SESSION_ERR, PAM_SUCCESS};

/// Provision the runtime directory for `user` and publish its path.
pub fn open_session(
    ids: &dyn IdentitySource,
    fs: &dyn Filesystem,
    env: &mut dyn SessionEnv,
    user: &str,
    parent: &Path,
) -> Result<PathBuf, ProvisionError> {
    let path = provision(ids, fs, user, parent)?;

    // The path crosses into C land as part of a NAME=value string; reject
    // anything that cannot survive the trip before attempting it.
    let value = match path.to_str() {
        Some(v) if !v.contains('\0') => v.to_owned(),
        _ => return Err(ProvisionError::PathFormat { path }),
    };

    env.publish(RUNTIME_DIR_VAR, &value)
        .map_err(|source| ProvisionError::Publish {
            name: RUNTIME_DIR_VAR.to_string(),
            source,
        })?;
    Ok(path)
}

/// Map the session result to a PAM return code. The contract is binary:
/// any failure is PAM_SESSION_ERR, and the stack decides whether that
/// denies the login.
pub fn pam_status(result: &Result<PathBuf, ProvisionError>) -> c_int {
    match result {
        Ok(_) => PAM_SUCCESS,
        Err(_) => PAM_SESSION_ERR,
    }
}
