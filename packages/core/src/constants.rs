use std::env;
use std::path::{Path, PathBuf};

/// Storage key the partnership collection is persisted under
pub const DEFAULT_STORAGE_KEY: &str = "partnerships";

/// Name of the data directory created under the user's home
pub const DATA_DIR_NAME: &str = ".partnerdesk";

/// Get the path to the PartnerDesk data directory (~/.partnerdesk)
pub fn partnerdesk_dir() -> PathBuf {
    // First try HOME environment variable (useful for tests)
    if let Ok(home) = env::var("HOME") {
        PathBuf::from(home).join(DATA_DIR_NAME)
    } else {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(DATA_DIR_NAME)
    }
}

/// Path of the file backing a storage key inside `dir` (`<dir>/<key>.json`)
pub fn storage_file(dir: impl AsRef<Path>, key: &str) -> PathBuf {
    dir.as_ref().join(format!("{}.json", key))
}
