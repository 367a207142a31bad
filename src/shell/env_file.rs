use std::path::PathBuf;

/// What happened when looking for a `.env` file at startup.
#[derive(Debug)]
pub enum EnvFile {
    Loaded(PathBuf),
    Absent,
    Invalid(dotenvy::Error),
}

impl EnvFile {
    pub fn load() -> Self {
        Self::from_result(dotenvy::dotenv())
    }

    pub fn from_result(result: Result<PathBuf, dotenvy::Error>) -> Self {
        match result {
            Ok(path) => EnvFile::Loaded(path),
            Err(error) if error.not_found() => EnvFile::Absent,
            Err(error) => EnvFile::Invalid(error),
        }
    }

    /// Logs the outcome; call after the subscriber is installed.
    pub fn report(&self) {
        match self {
            EnvFile::Loaded(path) => {
                tracing::debug!(path = %path.display(), "loaded environment file");
            }
            EnvFile::Absent => {}
            EnvFile::Invalid(error) => {
                tracing::warn!(%error, "environment file could not be loaded");
            }
        }
    }
}
