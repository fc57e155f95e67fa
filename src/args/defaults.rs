use std::path::PathBuf;

pub(crate) const DEFAULT_TICK: &str = "1s";
pub(crate) const DEFAULT_VOLUME: &str = "50";
const LOG_FILE_NAME: &str = "xmascount.log";

pub(crate) fn default_log_path() -> PathBuf {
    default_base_dir().join(LOG_FILE_NAME)
}

fn default_base_dir() -> PathBuf {
    if let Some(home) = user_home_dir() {
        return home.join(".xmascount");
    }

    PathBuf::from(".xmascount")
}

fn user_home_dir() -> Option<PathBuf> {
    #[cfg(windows)]
    {
        if let Some(value) = std::env::var_os("USERPROFILE") {
            return Some(PathBuf::from(value));
        }
        let drive = std::env::var_os("HOMEDRIVE");
        let path = std::env::var_os("HOMEPATH");
        match (drive, path) {
            (Some(drive), Some(path)) => {
                let mut combined = PathBuf::from(drive);
                combined.push(path);
                Some(combined)
            }
            _ => None,
        }
    }

    #[cfg(not(windows))]
    {
        std::env::var_os("HOME").map(PathBuf::from)
    }
}
