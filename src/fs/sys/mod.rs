/*!
 The platform capability layer.

 Two native directory APIs sit behind the same small surface: a directory
 stream ([`DirStream`]: open, read the next raw entry, close on drop) and a
 metadata lookup by path ([`stat_path`]).
*/

use crate::fs::{FileType, Timestamps};
use crate::Result;
use std::{ffi::OsString, path::Path};

#[cfg(unix)]
mod unix;
#[cfg(unix)]
pub(crate) use unix::{ReadDir as NativeDir, stat_path};

#[cfg(windows)]
mod windows;
#[cfg(windows)]
pub(crate) use windows::{ReadDir as NativeDir, stat_path};

/// What a single lookup tells us about a path
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct EntryMeta {
    pub(crate) file_type: FileType,
    pub(crate) times: Timestamps,
}

/**
 One raw name out of a directory listing.

 `meta` is filled in when the listing itself carried type/time information
 (the Windows find data), so the walker can skip a second query.
*/
#[derive(Debug)]
pub(crate) struct RawEntry {
    pub(crate) name: OsString,
    pub(crate) meta: Option<EntryMeta>,
}

impl RawEntry {
    /// `.` and `..` show up in POSIX listings and are never reported
    #[inline]
    pub(crate) fn is_dot_or_dot_dot(&self) -> bool {
        matches!(self.name.as_encoded_bytes(), b"." | b"..")
    }
}

/// An open native directory handle. Dropping it releases the handle.
pub(crate) trait DirStream: Sized {
    /// Opens `path` for enumeration, failing if it is missing or not a directory
    fn open(path: &Path) -> Result<Self>;

    /// Reads the next raw entry, `None` at the end of the listing (or on a read error)
    fn read_entry(&mut self) -> Option<RawEntry>;
}
