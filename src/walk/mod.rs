mod config;
mod frame;
mod walker;

pub use config::WalkConfig;
pub use walker::DirectoryWalker;
