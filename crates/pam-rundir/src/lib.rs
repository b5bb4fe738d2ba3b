//! pam_rundir: PAM session module publishing XDG_RUNTIME_DIR.
//!
//! Creates `/run/user/<uid>` (mode 0700, owned by the logging-in user) at
//! session open and exports its path as `XDG_RUNTIME_DIR`. The directory is
//! deliberately never removed, even after the last logout: reuse on the
//! next login is cheap and avoids racing processes that outlive the
//! session. Stack it as
//!
//! ```text
//! session  optional  pam_rundir.so
//! ```
//!
//! The deployer must ensure the parent directory (`/run/user` unless
//! overridden at build time) exists, is owned by root and is writable by
//! root only; this module never creates or validates it.

pub mod ffi;
pub mod session;

// The exported entry point references libpam symbols that only resolve
// inside a PAM stack; test builds link no libpam and must not carry those
// references.
#[cfg(not(test))]
mod entry;
