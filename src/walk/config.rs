/**
 Options for one enumeration, fixed from `open` until the next `open`/`close`.

 ```
 use dirwalk::WalkConfig;

 let config = WalkConfig::new().recursive(true).max_depth(Some(2));
 assert!(config.is_recursive());
 assert!(config.follows_symlinks());
 assert_eq!(config.depth_limit(), Some(2));
 ```
*/
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WalkConfig {
    pub(crate) recursive: bool,
    pub(crate) follow_symlinks: bool,
    pub(crate) max_depth: Option<usize>,
}

impl Default for WalkConfig {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl WalkConfig {
    /// Non-recursive, following symlinks, no depth limit
    #[must_use]
    pub const fn new() -> Self {
        Self {
            recursive: false,
            follow_symlinks: true,
            max_depth: None,
        }
    }

    /// Descend into subdirectories depth first, defaults to false
    #[must_use]
    pub const fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    /**
     Resolve entries through symlinks (`stat`) rather than describing the link
     itself (`lstat`), defaults to true.

     When false a symlink is neither a file nor a folder and is never descended.
    */
    #[must_use]
    pub const fn follow_symlinks(mut self, follow_symlinks: bool) -> Self {
        self.follow_symlinks = follow_symlinks;
        self
    }

    /// Set maximum descent depth, 0 keeps the walk to the opened directory itself
    #[must_use]
    pub const fn max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }

    #[inline]
    #[must_use]
    pub const fn is_recursive(&self) -> bool {
        self.recursive
    }

    #[inline]
    #[must_use]
    pub const fn follows_symlinks(&self) -> bool {
        self.follow_symlinks
    }

    #[inline]
    #[must_use]
    pub const fn depth_limit(&self) -> Option<usize> {
        self.max_depth
    }

    /// Whether an entry found at `depth` may have its own children pushed
    #[inline]
    pub(crate) fn may_descend(&self, depth: usize) -> bool {
        self.recursive && self.max_depth.is_none_or(|max| depth < max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = WalkConfig::default();
        assert!(!config.is_recursive());
        assert!(config.follows_symlinks());
        assert_eq!(config.depth_limit(), None);
        assert_eq!(config, WalkConfig::new());
    }

    #[test]
    fn descent_respects_flag_and_depth() {
        assert!(!WalkConfig::new().may_descend(0));

        let unbounded = WalkConfig::new().recursive(true);
        assert!(unbounded.may_descend(0));
        assert!(unbounded.may_descend(1_000));

        let bounded = unbounded.max_depth(Some(1));
        assert!(bounded.may_descend(0));
        assert!(!bounded.may_descend(1));

        assert!(!unbounded.max_depth(Some(0)).may_descend(0));
    }
}
