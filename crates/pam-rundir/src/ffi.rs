//! Hand-declared bindings for the three libpam symbols this module consumes.
//!
//! No `#[link]` attribute: PAM modules are dlopen'd into a process that
//! already carries libpam, and the symbols resolve there at load time.

use std::ffi::c_int;
#[cfg(not(test))]
use std::ffi::c_char;

/// Opaque PAM handle. Only ever passed back to libpam.
#[repr(C)]
pub struct PamHandle {
    _private: [u8; 0],
}

pub const PAM_SUCCESS: c_int = 0;
pub const PAM_SESSION_ERR: c_int = 14;

#[cfg(not(test))]
unsafe extern "C" {
    pub fn pam_get_user(
        pamh: *mut PamHandle,
        user: *mut *const c_char,
        prompt: *const c_char,
    ) -> c_int;

    pub fn pam_putenv(pamh: *mut PamHandle, name_value: *const c_char) -> c_int;

    pub fn pam_syslog(pamh: *const PamHandle, priority: c_int, fmt: *const c_char, ...);
}
