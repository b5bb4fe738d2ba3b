//! User name to uid/gid resolution.

use std::ffi::CString;
use std::io;

use log::debug;

/// A resolved local identity. Immutable once looked up; lives for a single
/// provisioning invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub name: String,
    pub uid: u32,
    pub gid: u32,
}

/// Capability seam for identity lookup, so provisioning logic can be tested
/// without touching the real user database.
pub trait IdentitySource {
    /// Resolve a user name. `Ok(None)` means the user does not exist;
    /// `Err` means the lookup itself failed.
    fn resolve(&self, name: &str) -> io::Result<Option<Identity>>;
}

/// Identity lookup against the system user database via `getpwnam_r`.
#[derive(Debug, Default)]
pub struct PasswdSource;

impl IdentitySource for PasswdSource {
    fn resolve(&self, name: &str) -> io::Result<Option<Identity>> {
        // An embedded NUL can never name a real account.
        let Ok(c_name) = CString::new(name) else {
            return Ok(None);
        };

        let mut buf_len = match unsafe { libc::sysconf(libc::_SC_GETPW_R_SIZE_MAX) } {
            -1 => 1024,
            n => n as usize,
        };

        loop {
            let mut buf = vec![0u8; buf_len];
            let mut pwd: libc::passwd = unsafe { std::mem::zeroed() };
            let mut result: *mut libc::passwd = std::ptr::null_mut();

            let rc = unsafe {
                libc::getpwnam_r(
                    c_name.as_ptr(),
                    &mut pwd,
                    buf.as_mut_ptr().cast::<libc::c_char>(),
                    buf.len(),
                    &mut result,
                )
            };

            if rc == libc::ERANGE {
                // Entry larger than the buffer; grow and retry.
                buf_len *= 2;
                continue;
            }
            if rc != 0 {
                return Err(io::Error::from_raw_os_error(rc));
            }
            if result.is_null() {
                debug!("no passwd entry for '{name}'");
                return Ok(None);
            }

            debug!("resolved '{name}' to {}:{}", pwd.pw_uid, pwd.pw_gid);
            return Ok(Some(Identity {
                name: name.to_string(),
                uid: pwd.pw_uid,
                gid: pwd.pw_gid,
            }));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_root() {
        let identity = PasswdSource
            .resolve("root")
            .expect("lookup failed")
            .expect("root must exist");
        assert_eq!(identity.name, "root");
        assert_eq!(identity.uid, 0);
    }

    #[test]
    fn resolve_nonexistent() {
        let result = PasswdSource
            .resolve("rundir-no-such-user")
            .expect("lookup failed");
        assert!(result.is_none());
    }

    #[test]
    fn resolve_name_with_nul() {
        let result = PasswdSource.resolve("a\0b").expect("lookup failed");
        assert!(result.is_none());
    }
}
