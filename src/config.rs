//! Runtime settings resolved once at startup from flags and the environment.

use crate::formatting::FormatContext;
use std::env;
use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};

/// Overrides the notebook file location.
pub const NOTEBOOK_ENV: &str = "CUP_NOTEBOOK";
/// Log level (`trace|debug|info|warn|error|off`).
pub const LOG_ENV: &str = "CUP_LOG";
pub const DEFAULT_FILE_NAME: &str = "notes.json";
pub const LOG_BASENAME: &str = "cup";

#[derive(Debug, Clone)]
pub struct Config {
    pub notebook_path: PathBuf,
    pub log_level: String,
    pub use_color: bool,
    pub width: Option<usize>,
}

impl Config {
    /// `file` is the value of `--file`, which wins over the environment.
    pub fn resolve(file: Option<PathBuf>) -> io::Result<Self> {
        let notebook_path = match file {
            Some(path) => path,
            None => notebook_path()?,
        };
        let log_level = env::var(LOG_ENV)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| crate::logging::default_log_level().to_string());
        let stdout_tty = io::stdout().is_terminal();
        Ok(Self {
            notebook_path,
            log_level,
            use_color: stdout_tty && env::var_os("NO_COLOR").is_none(),
            width: if stdout_tty { terminal_columns() } else { None },
        })
    }

    /// Logs live next to the notebook they describe.
    pub fn log_dir(&self) -> PathBuf {
        match self.notebook_path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }

    pub fn format_context(&self) -> FormatContext {
        FormatContext::new(self.use_color).with_width(self.width)
    }
}

/// `CUP_NOTEBOOK`, else `notes.json` beside the executable.
pub fn notebook_path() -> io::Result<PathBuf> {
    if let Some(path) = env::var_os(NOTEBOOK_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(path));
    }
    let exe = env::current_exe()?;
    Ok(default_path_for(&exe))
}

fn default_path_for(exe: &Path) -> PathBuf {
    exe.parent()
        .map(|dir| dir.join(DEFAULT_FILE_NAME))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_FILE_NAME))
}

pub fn terminal_columns() -> Option<usize> {
    terminal_size::terminal_size().map(|(w, _)| w.0 as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_path_sits_beside_executable() {
        let path = default_path_for(Path::new("/opt/cup/bin/cup"));
        assert_eq!(path, PathBuf::from("/opt/cup/bin/notes.json"));
    }

    #[test]
    fn test_file_flag_wins() {
        let config = Config::resolve(Some(PathBuf::from("/tmp/x/mine.json")))
            .unwrap();
        assert_eq!(config.notebook_path, PathBuf::from("/tmp/x/mine.json"));
        assert_eq!(config.log_dir(), PathBuf::from("/tmp/x"));
    }

    #[test]
    fn test_bare_file_name_logs_to_cwd() {
        let config = Config {
            notebook_path: PathBuf::from("notes.json"),
            log_level: "info".to_string(),
            use_color: false,
            width: None,
        };
        assert_eq!(config.log_dir(), PathBuf::from("."));
        assert!(!config.format_context().use_color);
    }
}
