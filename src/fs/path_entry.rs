use crate::fs::sys::EntryMeta;
use crate::fs::{FileType, Timestamps};
use chrono::{DateTime, Utc};
use core::cell::OnceCell;
use core::fmt;
use std::{
    ffi::OsStr,
    path::{Path, PathBuf},
};

/**
  One filesystem path plus whatever a lookup told us about it.

  The file name is located eagerly when the path is set; the extension, the
  name without extension and the base path are worked out on first use and
  cached until the path is replaced. Both `/` and `\` count as separators
  regardless of the host platform.

  The struct never holds an open handle, it is plain owned data.

  # Examples

  ```
  use dirwalk::PathEntry;
  use std::ffi::OsStr;
  use std::path::Path;

  let entry = PathEntry::new("/srv/logs/app.2024.log");
  assert_eq!(entry.file_name(), Some(OsStr::new("app.2024.log")));
  assert_eq!(entry.extension(), Some(OsStr::new("log")));
  assert_eq!(entry.file_name_without_extension(), Some(OsStr::new("app.2024")));
  assert_eq!(entry.base_path(), Some(Path::new("/srv/logs/")));

  // never looked up, so nothing is known about it
  assert!(!entry.is_file() && !entry.is_folder());
  ```
*/
#[derive(Clone, Default)]
pub struct PathEntry {
    /// The path exactly as given (or as built by the walker), `None` when empty
    path: Option<PathBuf>,
    /// Byte range of the file name inside `path`, trailing separators excluded
    name_start: usize,
    name_end: usize,
    file_type: FileType,
    /// Depth below the directory a walk was opened on, 0 for its direct children
    depth: usize,
    /// Unset means "not captured"; see [`PathEntry::timestamps`]
    times: OnceCell<Timestamps>,
    /// Position of the last `.` inside the file name
    last_dot: OnceCell<Option<usize>>,
    /// Length of the base path, trailing separator included
    base_len: OnceCell<usize>,
}

#[inline]
const fn is_separator(byte: u8) -> bool {
    matches!(byte, b'/' | b'\\')
}

/// Length of `bytes` once trailing separators are skipped
#[inline]
fn trimmed_len(bytes: &[u8]) -> usize {
    bytes
        .iter()
        .rposition(|&b| !is_separator(b))
        .map_or(0, |pos| pos + 1)
}

/// Length of the directory part, up to and including the separator before the final segment
#[inline]
fn base_len_of(bytes: &[u8]) -> usize {
    bytes[..trimmed_len(bytes)]
        .iter()
        .rposition(|&b| is_separator(b))
        .map_or(0, |pos| pos + 1)
}

impl PathEntry {
    /// Creates an entry for `path` without touching the filesystem
    #[must_use]
    pub fn new<P: AsRef<OsStr>>(path: P) -> Self {
        let mut entry = Self::default();
        entry.set_path(path);
        entry
    }

    /// Entry for a path whose metadata was just looked up
    pub(crate) fn from_lookup(path: PathBuf, meta: EntryMeta) -> Self {
        let mut entry = Self::new(path);
        entry.file_type = meta.file_type;
        entry.times = OnceCell::from(meta.times);
        entry
    }

    /**
     Entry produced by a walk: `path` is `<base><sep><name>` and the name length
     is known, so the name is taken verbatim rather than re-split (a unix file
     name may legally contain `\`).
    */
    pub(crate) fn from_walk(path: PathBuf, name_len: usize, meta: EntryMeta, depth: usize) -> Self {
        let len = path.as_os_str().len();
        let name_start = len.saturating_sub(name_len);
        Self {
            path: Some(path),
            name_start,
            name_end: len,
            file_type: meta.file_type,
            depth,
            times: OnceCell::from(meta.times),
            last_dot: OnceCell::new(),
            base_len: OnceCell::from(name_start),
        }
    }

    /**
     Replaces the path, dropping every cached value and whatever was known
     about the previous path.

     An empty path leaves the entry empty.

     ```
     use dirwalk::PathEntry;
     use std::ffi::OsStr;

     let mut entry = PathEntry::new("a/b.txt");
     entry.set_path("/a/b/");
     assert_eq!(entry.file_name(), Some(OsStr::new("b")));

     entry.set_path("");
     assert!(entry.full_path().is_none());
     ```
    */
    pub fn set_path<P: AsRef<OsStr>>(&mut self, path: P) {
        *self = Self::default();

        let path = path.as_ref();
        if path.is_empty() {
            return;
        }

        let bytes = path.as_encoded_bytes();
        self.name_end = trimmed_len(bytes);
        self.name_start = base_len_of(bytes);
        self.path = Some(path.into());
    }

    /// Resets the entry to the empty state
    #[inline]
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    #[inline]
    fn bytes(&self) -> Option<&[u8]> {
        self.path.as_ref().map(|path| path.as_os_str().as_encoded_bytes())
    }

    #[inline]
    fn slice(&self, start: usize, end: usize) -> Option<&OsStr> {
        let sub = self.bytes()?.get(start..end)?;
        // SAFETY: every boundary we cut at is either an end of the string or
        // sits next to an ASCII separator or dot, which is a valid split point
        // for the encoded bytes of an `OsStr` on every platform.
        Some(unsafe { OsStr::from_encoded_bytes_unchecked(sub) })
    }

    /// Returns the full path, `None` if no path is set
    #[inline]
    #[must_use]
    pub fn full_path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /**
     Returns the last path segment, ignoring trailing separators.

     A bare separator gives an empty name.
    */
    #[inline]
    #[must_use]
    pub fn file_name(&self) -> Option<&OsStr> {
        self.slice(self.name_start, self.name_end)
    }

    #[inline]
    fn last_dot(&self) -> Option<Option<usize>> {
        let name = self.bytes()?.get(self.name_start..self.name_end)?;
        Some(
            *self
                .last_dot
                .get_or_init(|| name.iter().rposition(|&b| b == b'.')),
        )
    }

    /**
     Returns what follows the last `.` of the file name.

     The result is an empty string when the name has no dot, and `None` only
     when no path is set.

     ```
     use dirwalk::PathEntry;
     use std::ffi::OsStr;

     assert_eq!(PathEntry::new("archive.tar.gz").extension(), Some(OsStr::new("gz")));
     assert_eq!(PathEntry::new(".gitignore").extension(), Some(OsStr::new("gitignore")));
     assert_eq!(PathEntry::new("Makefile").extension(), Some(OsStr::new("")));
     assert_eq!(PathEntry::default().extension(), None);
     ```
    */
    #[must_use]
    pub fn extension(&self) -> Option<&OsStr> {
        match self.last_dot()? {
            Some(dot) => self.slice(self.name_start + dot + 1, self.name_end),
            None => Some(OsStr::new("")),
        }
    }

    /// Returns the file name up to (not including) its last `.`, or the whole name if it has none
    #[must_use]
    pub fn file_name_without_extension(&self) -> Option<&OsStr> {
        match self.last_dot()? {
            Some(dot) => self.slice(self.name_start, self.name_start + dot),
            None => self.file_name(),
        }
    }

    /**
     Whether the file name contains a `.` at all.

     Tells `"a."` (empty extension after a dot) apart from `"a"` (no extension),
     so that `stem + "." + extension` rebuilds the name exactly when this is true.
    */
    #[must_use]
    pub fn has_extension(&self) -> bool {
        self.last_dot().flatten().is_some()
    }

    /**
     Returns the directory part of the path, trailing separator included.

     A path ending in a separator names the directory itself, so its base path
     is the parent. Every trailing separator is skipped before looking for the
     parent, the same view [`file_name`](Self::file_name) uses, so `"/a/b//"`
     gives `"/a/"` (paired with the name `"b"`) rather than `"/a/b/"`. Empty
     when there is no directory component.

     ```
     use dirwalk::PathEntry;
     use std::path::Path;

     assert_eq!(PathEntry::new("/a/b/c.txt").base_path(), Some(Path::new("/a/b/")));
     assert_eq!(PathEntry::new("/a/b/").base_path(), Some(Path::new("/a/")));
     assert_eq!(PathEntry::new("/a/b//").base_path(), Some(Path::new("/a/")));
     assert_eq!(PathEntry::new("c.txt").base_path(), Some(Path::new("")));
     ```
    */
    #[must_use]
    pub fn base_path(&self) -> Option<&Path> {
        let bytes = self.bytes()?;
        let len = *self.base_len.get_or_init(|| base_len_of(bytes));
        self.slice(0, len).map(Path::new)
    }

    /// Returns the file type found by the lookup, `Unknown` if there never was one
    #[inline]
    #[must_use]
    pub const fn file_type(&self) -> FileType {
        self.file_type
    }

    /// Cost free check for regular files
    #[inline]
    #[must_use]
    pub const fn is_file(&self) -> bool {
        self.file_type.is_regular_file()
    }

    /// Cost free check for directories
    #[inline]
    #[must_use]
    pub const fn is_folder(&self) -> bool {
        self.file_type.is_dir()
    }

    ///Returns the depth relative to the walked directory, this is cost free
    #[inline]
    #[must_use]
    pub const fn depth(&self) -> usize {
        self.depth
    }

    /**
     Returns the timestamps captured for this entry.

     On unix they are captured by the `stat` during lookup or not at all. On
     Windows an entry that never went through a lookup queries the filesystem
     once, on first access, and keeps whatever it got.
    */
    #[must_use]
    pub fn timestamps(&self) -> Option<&Timestamps> {
        #[cfg(windows)]
        if let Some(path) = self.path.as_deref() {
            return Some(self.times.get_or_init(|| {
                crate::fs::sys::stat_path(path, true)
                    .map(|meta| meta.times)
                    .unwrap_or_default()
            }));
        }

        self.times.get()
    }

    /// Last modification time, `None` when unknown
    #[inline]
    #[must_use]
    pub fn last_modified(&self) -> Option<DateTime<Utc>> {
        self.timestamps()?.modified
    }

    /// Creation time, `None` when unknown (always the case for a Linux `stat`)
    #[inline]
    #[must_use]
    pub fn creation_time(&self) -> Option<DateTime<Utc>> {
        self.timestamps()?.created
    }

    /// Last access time, `None` when unknown
    #[inline]
    #[must_use]
    pub fn last_access_time(&self) -> Option<DateTime<Utc>> {
        self.timestamps()?.accessed
    }

    /// Last status change time, `None` when unknown (always the case on Windows)
    #[inline]
    #[must_use]
    pub fn last_status_change_time(&self) -> Option<DateTime<Utc>> {
        self.timestamps()?.status_changed
    }
}

impl fmt::Display for PathEntry {
    #[allow(clippy::missing_inline_in_public_items)]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.path.as_deref() {
            Some(path) => write!(f, "{}", path.display()),
            None => Ok(()),
        }
    }
}

impl fmt::Debug for PathEntry {
    #[allow(clippy::missing_inline_in_public_items)]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PathEntry")
            .field("path", &self.path)
            .field("file_name", &self.file_name())
            .field("file_type", &self.file_type)
            .field("depth", &self.depth)
            .field("times", &self.times.get())
            .finish()
    }
}

impl AsRef<Path> for PathEntry {
    #[inline]
    fn as_ref(&self) -> &Path {
        self.full_path().unwrap_or_else(|| Path::new(""))
    }
}

impl From<PathEntry> for PathBuf {
    #[inline]
    fn from(entry: PathEntry) -> Self {
        entry.path.unwrap_or_default()
    }
}
