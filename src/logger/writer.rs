//! Log file handling

use std::fs::{self, File, OpenOptions};

use super::config::FileConfig;
use super::error::LoggerError;

/// Open the configured log file, creating parent directories as needed
pub(crate) fn open_log_file(config: &FileConfig) -> Result<File, LoggerError> {
    if config.path.is_dir() {
        return Err(LoggerError::config(format!(
            "Log path {} is a directory",
            config.path.display()
        )));
    }

    if let Some(parent) = config.path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .append(config.append)
        .truncate(!config.append)
        .open(&config.path)?;

    Ok(file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/deeper/shout.log");
        let config = FileConfig::new(true, path.clone(), true);

        open_log_file(&config).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_append_keeps_existing_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shout.log");
        fs::write(&path, "first\n").unwrap();

        let mut file = open_log_file(&FileConfig::new(true, path.clone(), true)).unwrap();
        file.write_all(b"second\n").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "first\nsecond\n");
    }

    #[test]
    fn test_truncate_when_not_appending() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shout.log");
        fs::write(&path, "stale\n").unwrap();

        let mut file = open_log_file(&FileConfig::new(true, path.clone(), false)).unwrap();
        file.write_all(b"fresh\n").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "fresh\n");
    }

    #[test]
    fn test_directory_path_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let config = FileConfig::new(true, dir.path().to_path_buf(), true);

        assert!(matches!(
            open_log_file(&config),
            Err(LoggerError::Config { .. })
        ));
    }
}
