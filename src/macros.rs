/// Returns the last OS error, converted into a [`crate::WalkError`]
#[cfg(unix)]
macro_rules! return_os_error {
    () => {{
        return Err(std::io::Error::last_os_error().into());
    }};
}

/// Macro for safely calling `stat`/`lstat` and handling the result
///
/// Evaluates to `Result<libc::stat, std::io::Error>` so the caller picks the conversion.
#[cfg(unix)]
macro_rules! stat_syscall {
    ($syscall:ident, $path:expr) => {{
        let mut stat_buf = core::mem::MaybeUninit::<libc::stat>::uninit();
        // SAFETY:
        // - The path is guaranteed to be null-terminated (CStr)
        // - The buffer is valid for writes of a full `stat` struct
        let res = unsafe { libc::$syscall($path, stat_buf.as_mut_ptr()) };

        if res == 0 {
            // SAFETY: If the return code is 0, we know the stat structure has been properly initialized
            Ok(unsafe { stat_buf.assume_init() })
        } else {
            Err(std::io::Error::last_os_error())
        }
    }};
}

/**
 Reads timestamp fields out of a `stat` struct, papering over the naming
 differences between platforms.

 Seconds come back as `i64`, nanoseconds as `i64`.
*/
#[cfg(unix)]
macro_rules! access_stat {
    ($stat_struct:expr, st_mtimensec) => {{
        #[cfg(target_os = "netbsd")]
        {
            $stat_struct.st_mtimensec as i64
        }

        #[cfg(not(target_os = "netbsd"))]
        {
            $stat_struct.st_mtime_nsec as i64
        }
    }};

    ($stat_struct:expr, st_atimensec) => {{
        #[cfg(target_os = "netbsd")]
        {
            $stat_struct.st_atimensec as i64
        }

        #[cfg(not(target_os = "netbsd"))]
        {
            $stat_struct.st_atime_nsec as i64
        }
    }};

    ($stat_struct:expr, st_ctimensec) => {{
        #[cfg(target_os = "netbsd")]
        {
            $stat_struct.st_ctimensec as i64
        }

        #[cfg(not(target_os = "netbsd"))]
        {
            $stat_struct.st_ctime_nsec as i64
        }
    }};

    ($stat_struct:expr, $field:ident) => {{ $stat_struct.$field as i64 }};
}
