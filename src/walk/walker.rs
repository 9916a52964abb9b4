use crate::fs::{PathEntry, sys};
use crate::walk::{WalkConfig, frame::Frame};
use crate::{Result, WalkError};
use core::iter::FusedIterator;
use log::{debug, trace, warn};
use std::path::Path;

/**
 Enumerates a directory one entry at a time, optionally descending into
 subdirectories depth first.

 Open directories are kept on an explicit stack. The top frame always holds
 an unread entry, so an empty stack means the enumeration is over. A
 subdirectory found while recursing is pushed on top and therefore drained
 (with its own subdirectories) before its parent's next sibling is read.

 Sibling order is whatever the filesystem hands back; never assume it is
 sorted.

 The walker is single threaded and blocking. Every handle it opens is
 released exactly once, when its listing runs out or on `close`/drop.

 # Examples

 ```
 use dirwalk::DirectoryWalker;
 use std::fs;

 let root = tempfile::tempdir().unwrap();
 fs::write(root.path().join("x.txt"), b"x").unwrap();
 fs::create_dir(root.path().join("sub")).unwrap();
 fs::write(root.path().join("sub").join("y.txt"), b"y").unwrap();

 let mut walker = DirectoryWalker::new();
 walker.open(root.path(), true).unwrap();

 let mut names = Vec::new();
 while walker.has_next() {
     if let Some(entry) = walker.next_entry() {
         names.push(entry.file_name().unwrap().to_string_lossy().into_owned());
     }
 }
 names.sort();
 assert_eq!(names, ["sub", "x.txt", "y.txt"]);

 walker.close();
 assert!(!walker.has_next());
 ```
*/
#[derive(Debug, Default)]
pub struct DirectoryWalker {
    stack: Vec<Frame>,
    config: WalkConfig,
}

impl DirectoryWalker {
    /// Creates a closed walker
    #[must_use]
    pub const fn new() -> Self {
        Self {
            stack: Vec::new(),
            config: WalkConfig::new(),
        }
    }

    /**
     Starts enumerating `path`, closing whatever was open before.

     Shorthand for [`open_with`](Self::open_with) with only the `recursive`
     option changed from the defaults.

     # Errors
     See [`open_with`](Self::open_with).
    */
    #[inline]
    pub fn open<P: AsRef<Path>>(&mut self, path: P, recursive: bool) -> Result<()> {
        self.open_with(path, WalkConfig::new().recursive(recursive))
    }

    /**
     Starts enumerating `path` with the given options, closing whatever was
     open before.

     An existing directory with no entries is a success; the walker is simply
     exhausted straight away.

     # Errors
     - [`WalkError::EmptyPath`] for an empty path
     - [`WalkError::InvalidPath`] if it does not exist
     - [`WalkError::NotADirectory`] if it is not a directory
     - [`WalkError::AccessDenied`] if it cannot be read

     The walker is left closed on failure.
    */
    pub fn open_with<P: AsRef<Path>>(&mut self, path: P, config: WalkConfig) -> Result<()> {
        self.close();
        self.config = config;

        let path = path.as_ref();
        if path.as_os_str().is_empty() {
            return Err(WalkError::EmptyPath);
        }

        if let Some(frame) = Frame::open(path, 0)? {
            self.stack.push(frame);
        }
        Ok(())
    }

    /// Options of the current (or last) enumeration
    #[inline]
    #[must_use]
    pub const fn config(&self) -> &WalkConfig {
        &self.config
    }

    /// True while an unread entry is pending
    #[inline]
    #[must_use]
    pub fn has_next(&self) -> bool {
        !self.stack.is_empty()
    }

    /**
     Consumes the pending entry and returns it, looked up.

     Returns `None` once the walk is exhausted, and also when the lookup of
     this one entry fails (it vanished, permission was revoked...). In the
     latter case the entry is still consumed, so keep going while
     [`has_next`](Self::has_next) is true. The [`Iterator`] impl does that
     for you.
    */
    pub fn next_entry(&mut self) -> Option<PathEntry> {
        let frame = self.stack.pop()?;
        let full_path = frame.current_path();
        let depth = frame.depth();

        let (raw, rest) = frame.advance();
        if let Some(frame) = rest {
            self.stack.push(frame);
        }

        let follow = self.config.follow_symlinks;
        // listing metadata describes the link itself, so a link being followed needs a real lookup
        let meta = match raw
            .meta
            .filter(|meta| !(follow && meta.file_type.is_symlink()))
        {
            Some(meta) => meta,
            None => match sys::stat_path(&full_path, follow) {
                Ok(meta) => meta,
                Err(e) => {
                    warn!("skipping {}: {e}", full_path.display());
                    return None;
                }
            },
        };

        if meta.file_type.is_dir() && self.config.may_descend(depth) {
            self.descend(&full_path, depth + 1);
        }

        let entry = PathEntry::from_walk(full_path, raw.name.len(), meta, depth);
        trace!("{entry} ({})", entry.file_type());
        Some(entry)
    }

    fn descend(&mut self, path: &Path, depth: usize) {
        match Frame::open(path, depth) {
            Ok(Some(frame)) => self.stack.push(frame),
            Ok(None) => {}
            Err(e) => warn!("not descending into {}: {e}", path.display()),
        }
    }

    /// Releases every open handle. Safe to call any number of times.
    pub fn close(&mut self) {
        if !self.stack.is_empty() {
            debug!("closing {} open directories", self.stack.len());
        }
        self.stack.clear();
    }

    /**
     Looks up a single path, independent of any enumeration.

     Symlinks are followed.

     ```
     use dirwalk::DirectoryWalker;

     let dir = tempfile::tempdir().unwrap();
     let file = dir.path().join("a.txt");
     std::fs::write(&file, b"a").unwrap();

     let entry = DirectoryWalker::get_file_info(&file).unwrap();
     assert!(entry.is_file() && !entry.is_folder());
     assert!(DirectoryWalker::get_file_info(dir.path().join("missing")).is_err());
     ```

     # Errors
     [`WalkError::EmptyPath`] for an empty path, otherwise whatever the
     lookup reports (most commonly [`WalkError::InvalidPath`]).
    */
    pub fn get_file_info<P: AsRef<Path>>(path: P) -> Result<PathEntry> {
        let path = path.as_ref();
        if path.as_os_str().is_empty() {
            return Err(WalkError::EmptyPath);
        }

        let meta = sys::stat_path(path, true)?;
        Ok(PathEntry::from_lookup(path.to_path_buf(), meta))
    }
}

impl Iterator for DirectoryWalker {
    type Item = PathEntry;

    /// Like [`DirectoryWalker::next_entry`] but steps over entries whose lookup failed
    #[inline]
    fn next(&mut self) -> Option<PathEntry> {
        while self.has_next() {
            if let Some(entry) = self.next_entry() {
                return Some(entry);
            }
        }
        None
    }
}

impl FusedIterator for DirectoryWalker {}
