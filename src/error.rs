use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("{0}")]
    Custom(String),

    #[error("Couldn't find {product} version in {file}!")]
    VersionNotFound { product: String, file: String },

    #[error("Staging directory {} already exists; remove it and retry", .0.display())]
    StagingExists(PathBuf),

    #[error("Failed to create archive {}: {source} (staging tree left at {})", .archive.display(), .staging.display())]
    ArchiveFailed {
        archive: PathBuf,
        staging: PathBuf,
        #[source]
        source: Box<Error>,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Walk(#[from] walkdir::Error),

    #[error(transparent)]
    Toml(#[from] toml::de::Error),

    #[error(transparent)]
    Pattern(#[from] regex::Error),
}

impl Error {
    pub fn custom<T: Into<String>>(msg: T) -> Self {
        Error::Custom(msg.into())
    }

    /// Process exit code reported for this error. A missing version
    /// declaration is a configuration problem and gets a distinct code so
    /// callers can tell it apart from filesystem failures.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::VersionNotFound { .. } => 2,
            _ => 1,
        }
    }
}

impl From<&str> for Error {
    fn from(err: &str) -> Self {
        Error::Custom(err.to_string())
    }
}

impl From<String> for Error {
    fn from(err: String) -> Self {
        Error::Custom(err)
    }
}
