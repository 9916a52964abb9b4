use chrono::{DateTime, Utc};

/**
 The four timestamps a lookup can report.

 Each one is `None` when the platform did not provide it (for example creation
 time from a Linux `stat`, or status change time on Windows).
*/
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Timestamps {
    pub created: Option<DateTime<Utc>>,
    pub modified: Option<DateTime<Utc>>,
    pub accessed: Option<DateTime<Utc>>,
    pub status_changed: Option<DateTime<Utc>>,
}

impl Timestamps {
    /// Builds the timestamps out of a `stat` struct, the way a POSIX lookup reports them
    #[cfg(unix)]
    pub(crate) fn from_stat(statted: &libc::stat) -> Self {
        #[cfg(any(target_os = "macos", target_os = "freebsd"))]
        let created = unix_time(
            access_stat!(statted, st_birthtime),
            access_stat!(statted, st_birthtime_nsec),
        );
        #[cfg(not(any(target_os = "macos", target_os = "freebsd")))]
        let created = None;

        Self {
            created,
            modified: unix_time(
                access_stat!(statted, st_mtime),
                access_stat!(statted, st_mtimensec),
            ),
            accessed: unix_time(
                access_stat!(statted, st_atime),
                access_stat!(statted, st_atimensec),
            ),
            status_changed: unix_time(
                access_stat!(statted, st_ctime),
                access_stat!(statted, st_ctimensec),
            ),
        }
    }

    /// Builds the timestamps out of std metadata (which on Windows comes straight from the find data)
    #[cfg(windows)]
    pub(crate) fn from_metadata(metadata: &std::fs::Metadata) -> Self {
        Self {
            created: metadata.created().ok().map(DateTime::<Utc>::from),
            modified: metadata.modified().ok().map(DateTime::<Utc>::from),
            accessed: metadata.accessed().ok().map(DateTime::<Utc>::from),
            status_changed: None,
        }
    }
}

#[cfg(unix)]
#[inline]
fn unix_time(secs: i64, nsecs: i64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp(secs, u32::try_from(nsecs).ok()?)
}
