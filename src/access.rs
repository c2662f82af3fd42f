//! Permission checks made before listing a directory or deleting a file.
//!
//! On Unix these ask the kernel through `access(2)`, which answers for the
//! real user and honours ACLs and read-only mounts. Elsewhere the checks fall
//! back to what the metadata exposes.

use std::path::Path;

/// A directory is accessible when it can be listed and entered.
pub(crate) fn dir_accessible(path: &Path) -> bool {
    imp::check(path, imp::DIR_MODE)
}

/// A file is accessible when it can be read and written.
pub(crate) fn file_accessible(path: &Path) -> bool {
    imp::check(path, imp::FILE_MODE)
}

#[cfg(unix)]
mod imp {
    use std::ffi::CString;
    use std::os::unix::ffi::OsStrExt;
    use std::path::Path;

    pub(super) const DIR_MODE: libc::c_int = libc::R_OK | libc::X_OK;
    pub(super) const FILE_MODE: libc::c_int = libc::R_OK | libc::W_OK;

    pub(super) fn check(path: &Path, mode: libc::c_int) -> bool {
        let Ok(c_path) = CString::new(path.as_os_str().as_bytes()) else {
            return false;
        };
        // SAFETY: `c_path` is a valid NUL-terminated string that outlives the
        // call, and access(2) does not retain the pointer.
        unsafe { libc::access(c_path.as_ptr(), mode) == 0 }
    }
}

#[cfg(not(unix))]
mod imp {
    use std::fs;
    use std::path::Path;

    pub(super) const DIR_MODE: u8 = 0;
    pub(super) const FILE_MODE: u8 = 1;

    pub(super) fn check(path: &Path, mode: u8) -> bool {
        match mode {
            DIR_MODE => fs::read_dir(path).is_ok(),
            _ => fs::metadata(path).is_ok_and(|metadata| !metadata.permissions().readonly()),
        }
    }
}
