use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LauncherError {
    #[error("unable to find {what} location (checked: {})", display_candidates(.candidates))]
    NotFound {
        what: &'static str,
        candidates: Vec<PathBuf>,
    },

    #[error("Steam does not appear to be running")]
    SteamNotRunning,

    #[error("unknown game '{0}'")]
    UnknownVariant(String),

    #[error("unable to change directory to game path {}: {source}", .path.display())]
    ChangeDirectory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to execute {}: {source}", .binary.display())]
    Exec {
        binary: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("unable to read the process list")]
    ProcessList,

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error("user interface failed: {0}")]
    Ui(String),
}

impl From<eframe::Error> for LauncherError {
    fn from(err: eframe::Error) -> Self {
        LauncherError::Ui(err.to_string())
    }
}

fn display_candidates(candidates: &[PathBuf]) -> String {
    candidates
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

pub type Result<T> = std::result::Result<T, LauncherError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_lists_every_candidate() {
        let err = LauncherError::NotFound {
            what: "Steam",
            candidates: vec![PathBuf::from("/a"), PathBuf::from("/b")],
        };
        assert_eq!(
            err.to_string(),
            "unable to find Steam location (checked: /a, /b)"
        );
    }

    #[test]
    fn exec_error_keeps_source() {
        use std::error::Error as _;

        let err = LauncherError::Exec {
            binary: PathBuf::from("/opt/wine"),
            source: io::Error::from(io::ErrorKind::NotFound),
        };
        assert!(err.to_string().starts_with("failed to execute /opt/wine"));
        assert!(err.source().is_some());
    }
}
