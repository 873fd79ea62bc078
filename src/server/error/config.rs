use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable is set but its value cannot be used.
    #[error("Invalid value '{value}' for environment variable {name}: {reason}")]
    InvalidEnvVar {
        /// Name of the offending variable
        name: String,
        /// The raw value that was rejected
        value: String,
        /// Why the value was rejected
        reason: String,
    },

    /// A credential file could not be read from the secrets directory.
    #[error("Failed to read secret file {path}: {source}")]
    UnreadableSecret {
        /// Path of the secret file
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A credential file exists but its first line is empty.
    #[error("Secret file {0} is empty")]
    MissingSecret(PathBuf),

    /// The session signing secret is too short to derive a cookie signing key.
    #[error("Session secret must be at least {required} bytes, found {found}")]
    InvalidSessionSecret {
        /// Minimum accepted length in bytes
        required: usize,
        /// Length of the secret that was loaded
        found: usize,
    },
}
