use std::path::PathBuf;

use crate::blueprint::BASE_DIRECTORY;

/// Everything a run needs besides the tree itself.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Where the tree is rooted; relative paths resolve against the working directory.
    pub base_directory: PathBuf,
    pub verbose: bool,
}
impl Default for Settings {
    fn default() -> Self {
        Self {
            base_directory: PathBuf::from(BASE_DIRECTORY),
            verbose: false,
        }
    }
}
impl Settings {
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Log filter used when `RUST_LOG` is not set.
    pub fn default_log_filter(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            "warn"
        }
    }
}
