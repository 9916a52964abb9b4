use crate::Result;
use crate::fs::sys::{DirStream, NativeDir, RawEntry};
use log::debug;
use std::{
    ffi::OsString,
    path::{MAIN_SEPARATOR_STR, Path, PathBuf},
};

/**
 One open directory on the walker's stack.

 A frame only exists while it has an unread entry in `current`; dropping it
 releases the native handle.
*/
#[derive(Debug)]
pub(crate) struct Frame {
    dir: NativeDir,
    /// The next entry to hand out, already past `.`/`..`
    current: RawEntry,
    /// Directory path children are joined onto
    base: PathBuf,
    /// Depth of this directory's children below the walk root
    depth: usize,
}

/// Reads until a real entry shows up, skipping the `.`/`..` pseudo-entries
#[inline]
fn next_real_entry(dir: &mut NativeDir) -> Option<RawEntry> {
    core::iter::from_fn(|| dir.read_entry()).find(|entry| !entry.is_dot_or_dot_dot())
}

impl Frame {
    /**
     Opens `path` for enumeration.

     Returns `Ok(None)` when the directory opens fine but holds no real
     entries; the handle is released straight away in that case.

     # Errors
     Whatever the native open reports: missing path, not a directory, denied.
    */
    pub(crate) fn open(path: &Path, depth: usize) -> Result<Option<Self>> {
        let mut dir = NativeDir::open(path)?;

        let Some(current) = next_real_entry(&mut dir) else {
            debug!("{} has no entries", path.display());
            return Ok(None);
        };

        debug!("opened {} at depth {depth}", path.display());
        Ok(Some(Self {
            dir,
            current,
            base: path.to_path_buf(),
            depth,
        }))
    }

    #[inline]
    pub(crate) const fn depth(&self) -> usize {
        self.depth
    }

    /// Full path of the pending entry, adding a separator only if the base lacks a native one
    pub(crate) fn current_path(&self) -> PathBuf {
        let base = self.base.as_os_str();
        let name = &self.current.name;

        let mut full = OsString::with_capacity(base.len() + 1 + name.len());
        full.push(base);
        // only the native separators count here: `\` is an ordinary name byte on unix
        if !base
            .as_encoded_bytes()
            .last()
            .is_some_and(|&b| std::path::is_separator(char::from(b)))
        {
            full.push(MAIN_SEPARATOR_STR);
        }
        full.push(name);
        full.into()
    }

    /**
     Hands out the pending entry and reads the one after it.

     Returns the consumed entry and the frame itself when it still has more,
     or just the entry when the listing is done (the frame, and its handle,
     are dropped).
    */
    pub(crate) fn advance(mut self) -> (RawEntry, Option<Self>) {
        match next_real_entry(&mut self.dir) {
            Some(next) => {
                let consumed = core::mem::replace(&mut self.current, next);
                (consumed, Some(self))
            }
            None => {
                debug!("finished {}", self.base.display());
                (self.current, None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_directory_has_no_frame() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Frame::open(dir.path(), 0).unwrap().is_none());
    }

    #[test]
    fn missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Frame::open(&dir.path().join("gone"), 0).is_err());
    }

    #[test]
    fn current_path_joins_with_one_separator() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("f"), b"").unwrap();

        let frame = Frame::open(dir.path(), 0).unwrap().unwrap();
        assert_eq!(frame.current_path(), dir.path().join("f"));

        let mut with_slash = dir.path().as_os_str().to_owned();
        with_slash.push(MAIN_SEPARATOR_STR);
        let frame = Frame::open(Path::new(&with_slash), 3).unwrap().unwrap();
        assert_eq!(frame.current_path(), dir.path().join("f"));
        assert_eq!(frame.depth(), 3);
    }

    #[test]
    fn advance_drains_then_drops() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a"), b"").unwrap();
        std::fs::write(dir.path().join("b"), b"").unwrap();

        let frame = Frame::open(dir.path(), 0).unwrap().unwrap();
        let (first, frame) = frame.advance();
        let frame = frame.expect("one entry left");
        let (second, frame) = frame.advance();
        assert!(frame.is_none());

        let mut names = [first.name, second.name];
        names.sort();
        assert_eq!(names, [OsString::from("a"), OsString::from("b")]);
    }
}
