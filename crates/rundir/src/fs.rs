//! Filesystem capability.
//!
//! Provisioning only ever needs three syscalls (mkdir, chmod, chown), so the
//! seam is exactly that wide. The real implementation goes through rustix;
//! tests substitute an in-memory fake.

use std::io;
use std::path::Path;

use rustix::fs::{Gid, Mode, Uid};

/// The three filesystem mutations provisioning is allowed to perform.
/// Deliberately no remove operation: runtime directories are never deleted.
pub trait Filesystem {
    fn mkdir(&self, path: &Path, mode: u32) -> io::Result<()>;
    fn chmod(&self, path: &Path, mode: u32) -> io::Result<()>;
    fn chown(&self, path: &Path, uid: u32, gid: u32) -> io::Result<()>;
}

/// Real syscalls via rustix.
#[derive(Debug, Default)]
pub struct OsFilesystem;

impl Filesystem for OsFilesystem {
    fn mkdir(&self, path: &Path, mode: u32) -> io::Result<()> {
        rustix::fs::mkdir(path, Mode::from_raw_mode(mode))?;
        Ok(())
    }

    fn chmod(&self, path: &Path, mode: u32) -> io::Result<()> {
        rustix::fs::chmod(path, Mode::from_raw_mode(mode))?;
        Ok(())
    }

    fn chown(&self, path: &Path, uid: u32, gid: u32) -> io::Result<()> {
        rustix::fs::chown(path, Some(Uid::from_raw(uid)), Some(Gid::from_raw(gid)))?;
        Ok(())
    }
}
