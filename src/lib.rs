/*!
 A small cross-platform directory walker.

 This library provides:
 - [`PathEntry`]: one path with its file name, extension, name without
   extension and base path parsed out lazily, plus the type flags and
   timestamps a lookup found
 - [`DirectoryWalker`]: a blocking, single threaded enumeration of a
   directory, optionally recursive (depth first, driven by an explicit stack
   of open directory handles)
 - [`DirectoryWalker::get_file_info`]: a one-off lookup of a single path

 On unix the walker sits on libc's `opendir`/`readdir`/`stat`; on Windows on
 the find-file API (through std), whose listing already carries each entry's
 metadata. Paths stay in the platform's native representation throughout.

 Nothing in here panics on a bad path: opening a missing directory or looking
 up a missing file returns a [`WalkError`], and an entry that disappears
 mid-walk is logged (through the `log` facade) and skipped.

 # Examples

 ```
 use dirwalk::{DirectoryWalker, WalkConfig};
 use std::ffi::OsStr;
 use std::fs;

 let root = tempfile::tempdir().unwrap();
 fs::create_dir_all(root.path().join("src/bin")).unwrap();
 fs::write(root.path().join("src/lib.rs"), b"").unwrap();
 fs::write(root.path().join("src/bin/main.rs"), b"").unwrap();

 let mut walker = DirectoryWalker::new();
 walker
     .open_with(root.path(), WalkConfig::new().recursive(true))
     .unwrap();

 let rust_files = walker
     .filter(|entry| entry.is_file() && entry.extension() == Some(OsStr::new("rs")))
     .count();
 assert_eq!(rust_files, 2);
 ```
*/

#[macro_use]
mod macros;

mod error;
pub mod fs;
pub mod walk;

pub use error::{Result, WalkError};
pub use fs::{FileType, PathEntry, Timestamps};
pub use walk::{DirectoryWalker, WalkConfig};
