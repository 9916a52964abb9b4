use std::{ffi::NulError, fmt, io};

#[derive(Debug)]
/// An error type for path lookups and directory enumeration.
///
/// Only `open` and `get_file_info` surface these; a failed lookup on a single
/// entry during a walk is logged and skipped instead.
pub enum WalkError {
    EmptyPath,
    InvalidPath(io::Error),
    NotADirectory,
    AccessDenied(io::Error),
    TooManySymbolicLinks, // only reachable when following symlinks
    NulError(NulError),
    OSerror(io::Error),
}

impl From<io::Error> for WalkError {
    fn from(error: io::Error) -> Self {
        #[cfg(unix)]
        if let Some(code) = error.raw_os_error() {
            return match code {
                libc::EINVAL | libc::ENOENT => Self::InvalidPath(error),
                libc::ENOTDIR => Self::NotADirectory,
                libc::ELOOP => Self::TooManySymbolicLinks,
                libc::EACCES | libc::EPERM => Self::AccessDenied(error),
                _ => Self::OSerror(error),
            };
        }

        // windows (and non-OS errors) go through the portable kinds
        match error.kind() {
            io::ErrorKind::NotFound | io::ErrorKind::InvalidInput => Self::InvalidPath(error),
            io::ErrorKind::NotADirectory => Self::NotADirectory,
            io::ErrorKind::PermissionDenied => Self::AccessDenied(error),
            _ => Self::OSerror(error),
        }
    }
}

impl From<NulError> for WalkError {
    fn from(e: NulError) -> Self {
        Self::NulError(e)
    }
}

#[allow(clippy::pattern_type_mismatch)]
impl fmt::Display for WalkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyPath => write!(f, "Empty path"),
            Self::InvalidPath(e) => write!(f, "Invalid path: {e}"),
            Self::NotADirectory => write!(f, "Not a directory"),
            Self::AccessDenied(e) => write!(f, "Access denied: {e}"),
            Self::TooManySymbolicLinks => write!(f, "Too many symbolic links"),
            Self::NulError(e) => write!(f, "Path contains a nul byte: {e}"),
            Self::OSerror(e) => write!(f, "OS error: {e}"),
        }
    }
}

#[allow(clippy::pattern_type_mismatch)]
impl std::error::Error for WalkError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidPath(e) | Self::AccessDenied(e) | Self::OSerror(e) => Some(e),
            Self::NulError(e) => Some(e),
            _ => None,
        }
    }
}

///Generic result type for lookups and enumeration
pub type Result<T> = core::result::Result<T, WalkError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_invalid_path() {
        let err = WalkError::from(io::Error::from(io::ErrorKind::NotFound));
        assert!(matches!(err, WalkError::InvalidPath(_)));
    }

    #[test]
    fn permission_denied_maps_to_access_denied() {
        let err = WalkError::from(io::Error::from(io::ErrorKind::PermissionDenied));
        assert!(matches!(err, WalkError::AccessDenied(_)));
    }

    #[cfg(unix)]
    #[test]
    fn raw_os_codes_are_classified() {
        let err = WalkError::from(io::Error::from_raw_os_error(libc::ENOTDIR));
        assert!(matches!(err, WalkError::NotADirectory));
        let err = WalkError::from(io::Error::from_raw_os_error(libc::ELOOP));
        assert!(matches!(err, WalkError::TooManySymbolicLinks));
        let err = WalkError::from(io::Error::from_raw_os_error(libc::EIO));
        assert!(matches!(err, WalkError::OSerror(_)));
    }

    #[test]
    fn source_is_kept_for_io_errors() {
        use std::error::Error as _;
        let err = WalkError::from(io::Error::from(io::ErrorKind::NotFound));
        assert!(err.source().is_some());
        assert!(WalkError::EmptyPath.source().is_none());
    }
}
