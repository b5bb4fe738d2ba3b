//! The exported PAM entry point and its libpam-backed capabilities.

use std::ffi::{CStr, CString, c_char, c_int};
use std::io;
use std::path::Path;
use std::ptr;

use rundir::RUNTIME_DIR_PARENT;
use rundir::env::SessionEnv;
use rundir::fs::OsFilesystem;
use rundir::identity::PasswdSource;

use crate::ffi::{PAM_SESSION_ERR, PAM_SUCCESS, PamHandle, pam_get_user, pam_putenv, pam_syslog};
use crate::session;

/// `SessionEnv` over `pam_putenv`.
struct PamEnv {
    pamh: *mut PamHandle,
}

impl SessionEnv for PamEnv {
    fn publish(&mut self, name: &str, value: &str) -> io::Result<()> {
        let pair = CString::new(format!("{name}={value}"))
            .map_err(|_| io::Error::new(io::ErrorKind::InvalidInput, "embedded NUL"))?;
        let rc = unsafe { pam_putenv(self.pamh, pair.as_ptr()) };
        if rc != PAM_SUCCESS {
            return Err(io::Error::other(format!("pam_putenv returned {rc}")));
        }
        Ok(())
    }
}

fn syslog_err(pamh: *const PamHandle, msg: &str) {
    let Ok(c_msg) = CString::new(msg) else {
        return;
    };
    unsafe { pam_syslog(pamh, libc::LOG_ERR, c"%s".as_ptr(), c_msg.as_ptr()) };
}

/// Session open: provision the runtime directory and export its path.
///
/// Module flags and arguments are accepted and ignored; the parent path is
/// fixed at build time.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn pam_sm_open_session(
    pamh: *mut PamHandle,
    _flags: c_int,
    _argc: c_int,
    _argv: *const *const c_char,
) -> c_int {
    let mut user_ptr: *const c_char = ptr::null();
    if unsafe { pam_get_user(pamh, &mut user_ptr, ptr::null()) } != PAM_SUCCESS
        || user_ptr.is_null()
    {
        return PAM_SESSION_ERR;
    }

    let user = match unsafe { CStr::from_ptr(user_ptr) }.to_str() {
        Ok(user) => user,
        Err(_) => {
            syslog_err(pamh, "user name is not valid UTF-8");
            return PAM_SESSION_ERR;
        }
    };

    let mut env = PamEnv { pamh };
    let result = session::open_session(
        &PasswdSource,
        &OsFilesystem,
        &mut env,
        user,
        Path::new(RUNTIME_DIR_PARENT),
    );

    if let Err(err) = &result {
        syslog_err(pamh, &format!("{}: {err}", err.kind()));
    }
    session::pam_status(&result)
}
