//! Session environment capability.

use std::io;

/// How a provisioned path gets published to the session. The PAM module
/// implements this over `pam_putenv`; tests record the pairs.
pub trait SessionEnv {
    fn publish(&mut self, name: &str, value: &str) -> io::Result<()>;
}
