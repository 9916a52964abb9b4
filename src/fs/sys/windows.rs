use super::{DirStream, EntryMeta, RawEntry};
use crate::Result;
use crate::fs::{FileType, Timestamps};
use std::{fs, path::Path};

/**
 Windows directory stream.

 std's `ReadDir` is `FindFirstFileW`/`FindNextFileW` underneath, and the
 metadata of each entry comes out of the same find data, so type and
 timestamps are known without a second query.
*/
#[derive(Debug)]
pub(crate) struct ReadDir {
    inner: fs::ReadDir,
}

impl EntryMeta {
    #[inline]
    fn from_metadata(metadata: &fs::Metadata) -> Self {
        Self {
            file_type: FileType::from(metadata.file_type()),
            times: Timestamps::from_metadata(metadata),
        }
    }
}

impl DirStream for ReadDir {
    #[inline]
    fn open(path: &Path) -> Result<Self> {
        Ok(Self {
            inner: fs::read_dir(path)?,
        })
    }

    #[inline]
    fn read_entry(&mut self) -> Option<RawEntry> {
        // A failed FindNextFileW ends the listing, same as a null from readdir
        let entry = self.inner.next()?.ok()?;

        Some(RawEntry {
            meta: entry
                .metadata()
                .ok()
                .map(|metadata| EntryMeta::from_metadata(&metadata)),
            name: entry.file_name(),
        })
    }
}

/**
 Looks up the type and timestamps of `path`.

 # Errors
 Returns an error if the path does not exist or cannot be queried.
*/
pub(crate) fn stat_path(path: &Path, follow_symlinks: bool) -> Result<EntryMeta> {
    let metadata = if follow_symlinks {
        fs::metadata(path)?
    } else {
        fs::symlink_metadata(path)?
    };

    Ok(EntryMeta::from_metadata(&metadata))
}
