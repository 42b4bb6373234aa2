use thiserror::Error;

/// Main error type for the ffx library
#[derive(Error, Debug)]
pub enum FfxError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Transcode error: {0}")]
    Transcode(#[from] TranscodeError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    FileNotFound { path: String },

    #[error("Failed to parse configuration file {path}: {reason}")]
    ParseFailed { path: String, reason: String },
}

/// Errors raised while invoking the external transcoder
#[derive(Error, Debug)]
pub enum TranscodeError {
    #[error("Transcoder not found: {program}")]
    ProgramNotFound { program: String },

    #[error("Failed to start {program}: {reason}")]
    SpawnFailed { program: String, reason: String },

    #[error("{program} exited with {status}")]
    Failed { program: String, status: String },
}

/// Convenience type alias for Results using FfxError
pub type Result<T> = std::result::Result<T, FfxError>;

impl FfxError {
    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::Config(ConfigError::FileNotFound { path }) => {
                format!("Configuration file '{}' not found. Pass one with --config.", path)
            }
            Self::Transcode(TranscodeError::ProgramNotFound { program }) => {
                format!("Could not find '{}'. Please install FFmpeg or pass --ffmpeg <path>.", program)
            }
            _ => self.to_string(),
        }
    }
}
