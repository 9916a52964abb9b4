mod file_type;
mod path_entry;
pub(crate) mod sys;
mod times;

pub use file_type::FileType;
pub use path_entry::PathEntry;
pub use times::Timestamps;
