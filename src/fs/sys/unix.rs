use super::{DirStream, EntryMeta, RawEntry};
use crate::Result;
use crate::fs::{FileType, Timestamps};
use core::ffi::CStr;
use core::ptr::NonNull;
use libc::DIR;
use std::{
    ffi::{CString, OsStr},
    os::unix::ffi::OsStrExt as _,
    path::Path,
};

/**
 POSIX directory stream using libc's `opendir`/`readdir`.

 Returns every entry the kernel hands back, including "." and "..";
 filtering those is left to the caller.
*/
#[derive(Debug)]
pub(crate) struct ReadDir {
    /// Raw directory pointer from libc's `opendir()` wrapped in a nonnull
    dir: NonNull<DIR>,
}

// SAFETY: the `DIR` stream is exclusively owned and only touched through `&mut self`
unsafe impl Send for ReadDir {}

impl DirStream for ReadDir {
    #[inline]
    fn open(path: &Path) -> Result<Self> {
        let cpath = CString::new(path.as_os_str().as_bytes())?;
        // SAFETY: we are passing a null terminated directory to opendir
        let dir = unsafe { libc::opendir(cpath.as_ptr()) };

        match NonNull::new(dir) {
            Some(dir) => Ok(Self { dir }),
            None => return_os_error!(),
        }
    }

    #[inline]
    fn read_entry(&mut self) -> Option<RawEntry> {
        // SAFETY: `self.dir` is a valid directory pointer for as long as we hold it
        let dirent_ptr = NonNull::new(unsafe { libc::readdir(self.dir.as_ptr()) })?;
        // readdir returns null at end of directory or on error, past here the entry is valid
        // until the next readdir call, so copy the name out straight away.
        // SAFETY: d_name is null terminated inside a live dirent
        let name = unsafe { CStr::from_ptr((*dirent_ptr.as_ptr()).d_name.as_ptr()) };

        Some(RawEntry {
            name: OsStr::from_bytes(name.to_bytes()).to_owned(),
            meta: None,
        })
    }
}

impl Drop for ReadDir {
    /**
    Closes the directory stream to prevent resource leaks.

    File descriptors are limited system resources, this runs exactly once per stream.
    */
    #[inline]
    fn drop(&mut self) {
        // SAFETY: the pointer came from a successful opendir and is closed only here
        unsafe { libc::closedir(self.dir.as_ptr()) };
    }
}

/**
 Looks up the type and timestamps of `path`.

 Uses `stat` when following symlinks, `lstat` otherwise.

 # Errors
 Returns an error if the path contains a nul byte or the stat call fails
 (missing file, permission denied, dangling symlink when following).
*/
pub(crate) fn stat_path(path: &Path, follow_symlinks: bool) -> Result<EntryMeta> {
    let cpath = CString::new(path.as_os_str().as_bytes())?;

    let statted: libc::stat = if follow_symlinks {
        stat_syscall!(stat, cpath.as_ptr())?
    } else {
        stat_syscall!(lstat, cpath.as_ptr())?
    };

    Ok(EntryMeta {
        file_type: FileType::from_mode(statted.st_mode),
        times: Timestamps::from_stat(&statted),
    })
}
